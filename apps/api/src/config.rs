use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Credentials are optional at startup: the tool must boot without them and
/// report their absence when the operator triggers the action that needs
/// them, before any network call is made.
#[derive(Debug, Clone)]
pub struct Config {
    /// Groq API key. `None` disables resume analysis with an inline error.
    pub groq_api_key: Option<String>,
    /// SMTP account used as both login and the From address.
    pub email_user: Option<String>,
    pub email_password: Option<String>,
    pub email_host: String,
    pub email_port: u16,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            email_user: optional_env("EMAIL_USER"),
            email_password: optional_env("EMAIL_PASSWORD"),
            email_host: std::env::var("EMAIL_HOST")
                .unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            email_port: std::env::var("EMAIL_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse::<u16>()
                .context("EMAIL_PORT must be a valid port number")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an environment variable, treating empty values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
