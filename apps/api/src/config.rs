use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_BASE_URL;

/// Application configuration loaded from environment variables.
///
/// Nothing is strictly required at startup: a missing `GEMINI_API_KEY` only
/// disables structuring (see `ResumeStructurer::from_config`).
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub llm_timeout_secs: u64,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 120)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            port: parse_env("PORT", 8000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
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
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u16 = parse_env("PORTFOLIO_TEST_UNSET_VARIABLE", 8000).unwrap();
        assert_eq!(value, 8000);
    }

    #[test]
    fn test_parse_env_reads_and_rejects_values() {
        std::env::set_var("PORTFOLIO_TEST_TIMEOUT", " 30 ");
        let value: u64 = parse_env("PORTFOLIO_TEST_TIMEOUT", 120).unwrap();
        assert_eq!(value, 30);

        std::env::set_var("PORTFOLIO_TEST_PORT", "not-a-port");
        let err = parse_env::<u16>("PORTFOLIO_TEST_PORT", 8000).unwrap_err();
        assert!(err.to_string().contains("PORTFOLIO_TEST_PORT"));
    }
}
