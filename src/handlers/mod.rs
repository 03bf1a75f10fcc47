//! Request Handlers
//!
//! One handler per route. Handlers validate nothing about field formats
//! (deserialization has already happened by the time they run); they compose
//! identity, store, and mailer, and produce one of three response shapes:
//!
//! - a [`Page`] descriptor - view name plus JSON context, for rendering
//! - a redirect, optionally carrying a one-shot flash message in a cookie
//! - a bare error status via `AppError` or the admin guard
//!
//! # Modules
//!
//! - **`auth`** - register, login, logout
//! - **`posts`** - post list, post page and comments, admin post management
//! - **`pages`** - about and contact

pub mod auth;
pub mod pages;
pub mod posts;

use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Serialize;
use serde_json::Value;

/// Name of the one-shot flash cookie.
pub const FLASH_COOKIE: &str = "flash";

/// A response descriptor for a rendered page.
///
/// Template rendering is an external concern; the server answers with the
/// view name, the consumed flash message (if any), and the view's data.
#[derive(Debug, Serialize)]
pub struct Page {
    pub view: &'static str,
    pub flash: Option<String>,
    pub data: Value,
}

impl Page {
    pub fn new(view: &'static str, data: Value) -> Self {
        Self {
            view,
            flash: None,
            data,
        }
    }

    pub fn with_flash(mut self, flash: Option<String>) -> Self {
        self.flash = flash;
        self
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Queue a flash message for the next rendered page.
///
/// The value is percent-encoded so arbitrary message text survives the
/// cookie round trip.
pub fn set_flash(jar: CookieJar, message: &str) -> CookieJar {
    let cookie = Cookie::build((FLASH_COOKIE, urlencoding::encode(message).into_owned()))
        .path("/")
        .build();
    jar.add(cookie)
}

/// Consume the pending flash message, clearing its cookie.
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<String>) {
    let message = jar
        .get(FLASH_COOKIE)
        .and_then(|cookie| urlencoding::decode(cookie.value()).ok())
        .map(|decoded| decoded.into_owned());

    let jar = jar.remove(Cookie::build((FLASH_COOKIE, "")).path("/"));

    (jar, message)
}
