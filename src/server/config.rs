/**
 * Server Configuration
 *
 * All configuration is read from the environment once at startup and carried
 * in an explicit `AppConfig` struct; nothing reads environment variables
 * after boot.
 *
 * # Keys
 *
 * - `SECRET_KEY` - session token signing secret
 * - `DATABASE_URL` - SQLite connection string, default `sqlite://blog.db`
 * - `EMAIL` / `APP_KEY` - SMTP account and app-specific credential
 * - `SMTP_HOST` - SMTP relay, default `smtp.gmail.com`
 * - `CONTACT_RECIPIENT` - fixed recipient of contact-form mail
 * - `SERVER_PORT` - listen port, default 5000
 *
 * Missing SMTP settings disable the mailer rather than preventing startup.
 */

/// SMTP account settings for the contact form.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub recipient: String,
}

/// Complete server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Secret used to sign session tokens
    pub secret_key: String,
    /// SQLite connection string
    pub database_url: String,
    /// Listen port
    pub port: u16,
    /// SMTP settings, absent when the mail account is not configured
    pub smtp: Option<SmtpConfig>,
}

impl AppConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Self {
        let secret_key = std::env::var("SECRET_KEY").unwrap_or_else(|_| {
            tracing::warn!("SECRET_KEY not set, using an insecure development default");
            "insecure-dev-secret".to_string()
        });

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://blog.db".to_string());

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);

        let smtp = match (std::env::var("EMAIL"), std::env::var("APP_KEY")) {
            (Ok(username), Ok(password)) => {
                let recipient =
                    std::env::var("CONTACT_RECIPIENT").unwrap_or_else(|_| username.clone());
                Some(SmtpConfig {
                    host: std::env::var("SMTP_HOST")
                        .unwrap_or_else(|_| "smtp.gmail.com".to_string()),
                    port: 587,
                    username,
                    password,
                    recipient,
                })
            }
            _ => {
                tracing::warn!("EMAIL/APP_KEY not set, contact form mail is disabled");
                None
            }
        };

        Self {
            secret_key,
            database_url,
            port,
            smtp,
        }
    }
}
