use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_NAME: &str = "Ujwal Hiredesai";
pub const DEFAULT_TAGLINE: &str = "AI Engineer | Data Science | Automation | ML Ops";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Static assets shipped with the crate, independent of the working directory.
pub const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Application configuration loaded from environment variables.
///
/// The chat API key is deliberately absent: it is looked up on every chat request
/// so that a missing key only switches the assistant to its offline reply.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    pub rust_log: String,
    pub display_name: String,
    pub tagline: String,
    pub static_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: get("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            display_name: get("PORTFOLIO_NAME").unwrap_or_else(|| DEFAULT_NAME.to_string()),
            tagline: get("PORTFOLIO_TAGLINE").unwrap_or_else(|| DEFAULT_TAGLINE.to_string()),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            catalog_path: get("CATALOG_PATH").map(PathBuf::from),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_base_url: get("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            request_timeout_secs: get("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}
