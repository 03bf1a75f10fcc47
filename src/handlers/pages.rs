/**
 * About and Contact Pages
 *
 * The about page has no data dependency. The contact form composes one
 * plain-text message and hands it to the mailer; delivery failures fail the
 * request, and a server running without an SMTP account answers 503.
 */

use axum::{extract::State, response::IntoResponse, Form};
use serde_json::json;

use crate::auth::Identity;
use crate::error::AppError;
use crate::handlers::Page;
use crate::mailer::ContactMessage;
use crate::server::state::AppState;

/// GET /about
pub async fn about(identity: Identity) -> Page {
    Page::new("about", json!({ "current_user": identity }))
}

/// GET /contact
pub async fn contact_page(identity: Identity) -> Page {
    Page::new(
        "contact",
        json!({ "msg_sent": false, "current_user": identity }),
    )
}

/// POST /contact
pub async fn contact(
    State(state): State<AppState>,
    identity: Identity,
    Form(form): Form<ContactMessage>,
) -> Result<impl IntoResponse, AppError> {
    let mailer = state.mailer.as_ref().ok_or(AppError::MailerUnavailable)?;

    mailer.send_contact(&form).await?;

    Ok(Page::new(
        "contact",
        json!({ "msg_sent": true, "current_user": identity }),
    ))
}
