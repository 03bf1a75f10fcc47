/**
 * Application Error Types
 *
 * This module defines the error type returned by request handlers. Each
 * variant maps to an HTTP status code; the conversion to an actual response
 * lives in `error::conversion`.
 *
 * # Error Categories
 *
 * - Infrastructure failures (database, hashing, tokens, SMTP) map to 500.
 *   There is no retry policy: every external call either succeeds or fails
 *   the request.
 * - `NotFound` maps to 404 (unknown post id in a path).
 * - `MailerUnavailable` maps to 503, for when the server was started without
 *   SMTP configuration.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database query or transaction failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification failure
    #[error("password hashing error: {0}")]
    Password(#[from] bcrypt::BcryptError),

    /// Session token creation failure
    #[error("session token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// SMTP delivery failure
    #[error("mail delivery failed: {0}")]
    Mail(#[from] lettre::transport::smtp::Error),

    /// Outbound message construction failure
    #[error("mail message error: {0}")]
    MailMessage(#[from] lettre::error::Error),

    /// Malformed sender or recipient address in configuration
    #[error("mail address error: {0}")]
    MailAddress(#[from] lettre::address::AddressError),

    /// A row referenced by the request path does not exist
    #[error("not found")]
    NotFound,

    /// The contact form was submitted but no SMTP account is configured
    #[error("mailer not configured")]
    MailerUnavailable,
}

impl AppError {
    /// The HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MailerUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_)
            | Self::Password(_)
            | Self::Token(_)
            | Self::Mail(_)
            | Self::MailMessage(_)
            | Self::MailAddress(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_mailer_unavailable_maps_to_503() {
        assert_eq!(
            AppError::MailerUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_database_error_maps_to_500() {
        let error = AppError::Database(sqlx::Error::RowNotFound);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
