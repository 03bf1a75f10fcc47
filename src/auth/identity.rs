/**
 * Request Identity
 *
 * Resolves "who is making this request" once, as an explicit sum type rather
 * than an is-authenticated flag scattered through handlers.
 *
 * # Resolution
 *
 * The extractor reads the session cookie, verifies the signed token, and
 * resolves the embedded user id back to a `users` row. Every failure mode —
 * no cookie, bad signature, expired token, deleted user — degrades to
 * `Anonymous`; extraction itself never fails a request.
 */

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use serde::Serialize;

use crate::auth::sessions::{user_id_from_token, SESSION_COOKIE};
use crate::server::state::AppState;
use crate::store::users::{self, User};

/// The one identity allowed to manage posts.
pub const ADMIN_USER_ID: i64 = 1;

/// The identity behind a request.
///
/// Serializes into page contexts as the user object, or `null` when
/// anonymous.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Identity {
    Authenticated(User),
    Anonymous,
}

impl Identity {
    /// The logged-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Whether this identity is the designated admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Authenticated(user) if user.id == ADMIN_USER_ID)
    }
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let Some(cookie) = jar.get(SESSION_COOKIE) else {
            return Ok(Identity::Anonymous);
        };

        let Some(user_id) = user_id_from_token(cookie.value(), &state.config.secret_key) else {
            tracing::debug!("session cookie present but token invalid");
            return Ok(Identity::Anonymous);
        };

        match users::get_user_by_id(&state.pool, user_id).await {
            Ok(Some(user)) => Ok(Identity::Authenticated(user)),
            Ok(None) => {
                tracing::debug!("session token references deleted user {}", user_id);
                Ok(Identity::Anonymous)
            }
            Err(e) => {
                tracing::error!("failed to resolve session user {}: {}", user_id, e);
                Ok(Identity::Anonymous)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(id: i64) -> User {
        User {
            id,
            email: "a@x.com".to_string(),
            password_hash: "$2b$12$hash".to_string(),
            name: "Alice".to_string(),
        }
    }

    #[test]
    fn test_anonymous_is_not_admin() {
        assert!(!Identity::Anonymous.is_admin());
        assert!(!Identity::Anonymous.is_authenticated());
        assert!(Identity::Anonymous.user().is_none());
    }

    #[test]
    fn test_only_user_one_is_admin() {
        assert!(Identity::Authenticated(test_user(1)).is_admin());
        assert!(!Identity::Authenticated(test_user(2)).is_admin());
    }

    #[test]
    fn test_anonymous_serializes_to_null() {
        let value = serde_json::to_value(Identity::Anonymous).unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn test_authenticated_serializes_without_password_hash() {
        let value = serde_json::to_value(Identity::Authenticated(test_user(1))).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Alice");
        assert!(value.get("password_hash").is_none());
    }
}
