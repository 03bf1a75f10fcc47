/**
 * Admin Guard
 *
 * The single access-control rule in the system: only the identity with
 * user id 1 may reach the post management handlers. Everyone else, anonymous
 * included, gets a 403 with no body and the wrapped handler never runs.
 *
 * Applied as a `route_layer` on the admin route group, so the check sits in
 * one place instead of inside each handler.
 */

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};

use crate::auth::{Identity, ADMIN_USER_ID};

/// Reject any request whose identity is not the admin.
///
/// On success the admin's `User` row is attached to the request extensions,
/// so handlers behind this guard can take it without resolving the identity
/// a second time.
pub async fn admin_only(
    identity: Identity,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    match &identity {
        Identity::Authenticated(user) if user.id == ADMIN_USER_ID => {
            tracing::debug!("admin request by user {}", user.id);
            request.extensions_mut().insert(user.clone());
            Ok(next.run(request).await)
        }
        Identity::Authenticated(user) => {
            tracing::warn!("user {} denied access to admin route", user.id);
            Err(StatusCode::FORBIDDEN)
        }
        Identity::Anonymous => {
            tracing::warn!("anonymous request denied access to admin route");
            Err(StatusCode::FORBIDDEN)
        }
    }
}
