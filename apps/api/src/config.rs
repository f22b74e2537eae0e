use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// `GROQ_API_KEY` is deliberately optional: when it is missing the service
/// still boots, but the scorer runs disabled and every resume receives a
/// zero-score placeholder explaining why.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// An empty value counts as unset: a blank `GROQ_API_KEY=` line in .env must
/// disable scoring the same way a missing variable does.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
