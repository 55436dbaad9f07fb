//! Outbound mail transport.
//!
//! `Mailer` is the seam handlers depend on; `SmtpMailer` is the production
//! implementation. One message per transport session: connect, STARTTLS,
//! authenticate, submit, close. No pooling, no retry, no queuing.

use async_trait::async_trait;
use lettre::message::{MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("email credentials are not configured (set EMAIL_USER and EMAIL_PASSWORD)")]
    MissingCredentials,

    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("could not build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP transport failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Delivery abstraction for candidate notifications.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), MailError>;
}

/// SMTP delivery with STARTTLS upgrade before authentication.
pub struct SmtpMailer {
    host: String,
    port: u16,
    /// `(user, password)` — both must be present or sends are refused before
    /// any connection attempt.
    credentials: Option<(String, String)>,
}

impl SmtpMailer {
    pub fn from_config(config: &Config) -> Self {
        let credentials = match (&config.email_user, &config.email_password) {
            (Some(user), Some(password)) => Some((user.clone(), password.clone())),
            _ => None,
        };
        SmtpMailer {
            host: config.email_host.clone(),
            port: config.email_port,
            credentials,
        }
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), MailError> {
        let (user, password) = self
            .credentials
            .as_ref()
            .ok_or(MailError::MissingCredentials)?;

        // multipart/alternative with a single HTML part, sender as From.
        let message = Message::builder()
            .from(user.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .multipart(MultiPart::alternative().singlepart(SinglePart::html(html_body.to_string())))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)?
            .port(self.port)
            .credentials(Credentials::new(user.clone(), password.clone()))
            .build();

        transport.send(message).await?;
        debug!("Message submitted to SMTP relay {}:{}", self.host, self.port);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn config_without_mail_creds() -> Config {
        Config {
            groq_api_key: None,
            email_user: None,
            email_password: None,
            email_host: "smtp.gmail.com".to_string(),
            email_port: 587,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_without_credentials_fails_before_connecting() {
        let mailer = SmtpMailer::from_config(&config_without_mail_creds());
        let result = mailer.send("jo@example.com", "Hello", "<p>Hi</p>").await;
        assert!(matches!(result, Err(MailError::MissingCredentials)));
    }

    #[tokio::test]
    async fn test_partial_credentials_count_as_missing() {
        let mut config = config_without_mail_creds();
        config.email_user = Some("hr@example.com".to_string());
        let mailer = SmtpMailer::from_config(&config);
        let result = mailer.send("jo@example.com", "Hello", "<p>Hi</p>").await;
        assert!(matches!(result, Err(MailError::MissingCredentials)));
    }

    #[test]
    fn test_missing_credentials_message_names_env_vars() {
        let message = MailError::MissingCredentials.to_string();
        assert!(message.contains("EMAIL_USER"));
        assert!(message.contains("EMAIL_PASSWORD"));
    }
}
