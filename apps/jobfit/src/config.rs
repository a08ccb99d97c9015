use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_MATCH_SERVICE_URL: &str = "https://jobfitai-backend-674b.onrender.com/match";

/// Application configuration loaded from environment variables.
/// Every variable has a default; a variable that is set but unparsable is a startup error.
#[derive(Debug, Clone)]
pub struct Config {
    pub match_service_url: String,
    /// Total request timeout for the match call. No retries are attempted.
    pub match_timeout: Duration,
    pub match_connect_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
    pub logo_path: String,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            match_service_url: env_or("MATCH_SERVICE_URL", DEFAULT_MATCH_SERVICE_URL),
            match_timeout: Duration::from_secs(parse_env("MATCH_TIMEOUT_SECS", 30)?),
            match_connect_timeout: Duration::from_secs(parse_env(
                "MATCH_CONNECT_TIMEOUT_SECS",
                10,
            )?),
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
            logo_path: env_or("LOGO_PATH", "logo1.jpg"),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        Err(_) => Ok(default),
    }
}
