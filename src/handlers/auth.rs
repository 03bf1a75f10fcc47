/**
 * Registration, Login, Logout
 *
 * # Registration
 *
 * 1. Best-effort pre-check for an existing account with the same email
 * 2. Hash the password
 * 3. Insert the user; a lost race against a concurrent registration
 *    surfaces as a unique-violation from the store and is treated exactly
 *    like the pre-check catching the duplicate
 * 4. Establish the session and redirect to the post list
 *
 * # Login
 *
 * Unknown email and wrong password produce distinct flash messages and a
 * redirect back to the login page, matching the site's user-visible
 * behavior; neither establishes a session.
 *
 * # Security
 *
 * - Passwords are hashed before storage and never logged
 * - Session tokens are signed and carried in an HttpOnly cookie
 */

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde_json::json;

use crate::auth::sessions::{clear_session_cookie, create_token, session_cookie};
use crate::auth::{password, Identity};
use crate::error::AppError;
use crate::handlers::{set_flash, take_flash, Page};
use crate::server::state::AppState;
use crate::store::users;

const DUPLICATE_EMAIL_NOTICE: &str =
    "You've already signed up with that email, log in instead!";

/// Registration form fields, already deserialized and format-checked
/// upstream.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login form fields.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// GET /register
pub async fn register_page(identity: Identity, jar: CookieJar) -> impl IntoResponse {
    let (jar, flash) = take_flash(jar);
    let page = Page::new("register", json!({ "current_user": identity })).with_flash(flash);
    (jar, page)
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> Result<(CookieJar, Redirect), AppError> {
    // Best-effort pre-check; the UNIQUE constraint below is the real guard.
    if users::get_user_by_email(&state.pool, &form.email).await?.is_some() {
        tracing::warn!("registration with already-used email: {}", form.email);
        let jar = set_flash(jar, DUPLICATE_EMAIL_NOTICE);
        return Ok((jar, Redirect::to("/login")));
    }

    let digest = password::hash(&form.password)?;

    let user = match users::create_user(&state.pool, &form.email, &digest, &form.name).await {
        Ok(user) => user,
        Err(e) if users::is_unique_violation(&e) => {
            tracing::warn!("registration lost insert race for email: {}", form.email);
            let jar = set_flash(jar, DUPLICATE_EMAIL_NOTICE);
            return Ok((jar, Redirect::to("/login")));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!("registered user {} ({})", user.id, user.email);

    let token = create_token(user.id, &state.config.secret_key)?;
    let jar = jar.add(session_cookie(token));

    Ok((jar, Redirect::to("/")))
}

/// GET /login
pub async fn login_page(identity: Identity, jar: CookieJar) -> impl IntoResponse {
    let (jar, flash) = take_flash(jar);
    let page = Page::new("login", json!({ "current_user": identity })).with_flash(flash);
    (jar, page)
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Redirect), AppError> {
    let Some(user) = users::get_user_by_email(&state.pool, &form.email).await? else {
        tracing::warn!("login with unknown email: {}", form.email);
        let jar = set_flash(jar, "That email does not exist, please try again");
        return Ok((jar, Redirect::to("/login")));
    };

    if !password::verify(&form.password, &user.password_hash)? {
        tracing::warn!("wrong password for user {}", user.id);
        let jar = set_flash(jar, "Password incorrect, please try again");
        return Ok((jar, Redirect::to("/login")));
    }

    tracing::info!("user {} logged in", user.id);

    let token = create_token(user.id, &state.config.secret_key)?;
    let jar = jar.add(session_cookie(token));

    Ok((jar, Redirect::to("/")))
}

/// GET /logout
pub async fn logout(jar: CookieJar) -> Response {
    let jar = jar.remove(clear_session_cookie());
    (jar, Redirect::to("/")).into_response()
}
