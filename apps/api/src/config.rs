use anyhow::{Context, Result};

const DEFAULT_DATABASE_URL: &str = "sqlite://fitness_app.db";
const DEFAULT_PAYMENT_LINK: &str = "https://rzp.io/rzp/5VHFcVO1";

/// Application configuration loaded from environment variables.
/// Only `PORT` can fail to load; everything else has a default or is optional.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Missing key disables the AI features; the rest of the API keeps working.
    pub groq_api_key: Option<String>,
    pub payment_link: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: env_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            groq_api_key: optional_env("GROQ_API_KEY"),
            payment_link: env_or("PAYMENT_LINK", DEFAULT_PAYMENT_LINK),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Treats an empty or whitespace-only value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
