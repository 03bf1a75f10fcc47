/**
 * Outbound Mail
 *
 * Sends the contact-form message to the site owner over authenticated SMTP
 * with STARTTLS on port 587. One message per submission, no retries: a
 * transport failure fails the request.
 *
 * The mailer is an optional service. If the SMTP account is not configured
 * the server starts without it and the contact form answers 503.
 */

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::error::AppError;
use crate::server::config::SmtpConfig;

/// A contact-form submission.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactMessage {
    /// The plain-text body sent to the site owner.
    pub fn compose_body(&self) -> String {
        format!(
            "New 'contact me' message\n\nFrom: {}\nE-mail: {}\nPhone: {}\nMessage: {}",
            self.name, self.email, self.phone, self.message
        )
    }
}

/// Authenticated SMTP client for contact-form mail.
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    recipient: Mailbox,
}

impl Mailer {
    /// Build a mailer from SMTP configuration.
    ///
    /// Fails if the relay host or the configured addresses are malformed.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, AppError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        let sender: Mailbox = config.username.parse::<Mailbox>()?;
        let recipient: Mailbox = config.recipient.parse::<Mailbox>()?;

        Ok(Self {
            transport,
            sender,
            recipient,
        })
    }

    /// Send one contact message to the fixed recipient.
    pub async fn send_contact(&self, contact: &ContactMessage) -> Result<(), AppError> {
        let email = Message::builder()
            .from(self.sender.clone())
            .to(self.recipient.clone())
            .subject("New 'contact me' message")
            .body(contact.compose_body())?;

        self.transport.send(email).await?;
        tracing::info!("contact message sent to {}", self.recipient);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_body_carries_all_fields() {
        let contact = ContactMessage {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            phone: "555-0100".to_string(),
            message: "Hello there".to_string(),
        };

        let body = contact.compose_body();
        assert!(body.starts_with("New 'contact me' message"));
        assert!(body.contains("From: Alice"));
        assert!(body.contains("E-mail: a@x.com"));
        assert!(body.contains("Phone: 555-0100"));
        assert!(body.contains("Message: Hello there"));
    }

    #[tokio::test]
    async fn test_from_config_rejects_bad_sender_address() {
        let config = SmtpConfig {
            host: "smtp.gmail.com".to_string(),
            port: 587,
            username: "not an address".to_string(),
            password: "app-key".to_string(),
            recipient: "owner@example.com".to_string(),
        };
        assert!(Mailer::from_config(&config).is_err());
    }

    #[tokio::test]
    async fn test_from_config_accepts_valid_addresses() {
        let config = SmtpConfig {
            host: "smtp.gmail.com".to_string(),
            port: 587,
            username: "site@example.com".to_string(),
            password: "app-key".to_string(),
            recipient: "owner@example.com".to_string(),
        };
        assert!(Mailer::from_config(&config).is_ok());
    }
}
