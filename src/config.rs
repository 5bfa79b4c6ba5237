//! Helper configuration, read from the environment

use crate::message::{LengthEstimator, DEFAULT_URL_LENGTH};
use crate::poll::{LETTER_MARK_CHARS, MAX_ALTERNATIVE_CHARS};
use regex::Regex;
use std::path::PathBuf;

/// Links as the target platform detects them
pub const DEFAULT_URL_PATTERN: &str = r#"https?://[^\s<>"']+[^\s<>"'.,;:!?)\]]"#;

pub const DEFAULT_STATE_PATH: &str = "galgenhelfer-inputs.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid URL pattern: {0}")]
    InvalidUrlPattern(#[from] regex::Error),
}

#[derive(Debug, Clone)]
pub struct HelperConfig {
    /// Where the input fields are persisted
    pub state_path: PathBuf,
    /// Characters a link counts for once posted
    pub url_length: usize,
    pub url_pattern: String,
    /// Platform limit for one poll alternative
    pub max_alternative_chars: usize,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
            url_length: DEFAULT_URL_LENGTH,
            url_pattern: DEFAULT_URL_PATTERN.to_string(),
            max_alternative_chars: MAX_ALTERNATIVE_CHARS,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

fn parsed_var(name: &str, default: usize) -> usize {
    match non_empty_var(name) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring {}={:?}, not a number; using {}", name, raw, default);
            default
        }),
        None => default,
    }
}

impl HelperConfig {
    /// Load a `.env` file if present, then read the environment
    pub fn load() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !matches!(e, dotenvy::Error::Io(_)) {
                tracing::warn!("Failed to load .env file: {}", e);
            }
        }
        Self::from_env()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let max_alternative_chars =
            parsed_var("GALGEN_MAX_ALTERNATIVE_CHARS", defaults.max_alternative_chars);
        let max_alternative_chars = if max_alternative_chars <= LETTER_MARK_CHARS {
            tracing::warn!(
                "GALGEN_MAX_ALTERNATIVE_CHARS must exceed {}; using {}",
                LETTER_MARK_CHARS,
                defaults.max_alternative_chars
            );
            defaults.max_alternative_chars
        } else {
            max_alternative_chars
        };

        Self {
            state_path: non_empty_var("GALGEN_STATE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.state_path),
            url_length: parsed_var("GALGEN_URL_LENGTH", defaults.url_length),
            url_pattern: non_empty_var("GALGEN_URL_PATTERN").unwrap_or(defaults.url_pattern),
            max_alternative_chars,
        }
    }

    /// Longest answer word, leaving room for the letter marks
    pub fn max_answer_chars(&self) -> usize {
        self.max_alternative_chars.saturating_sub(LETTER_MARK_CHARS)
    }

    pub fn length_estimator(&self) -> Result<LengthEstimator, ConfigError> {
        let pattern = Regex::new(&self.url_pattern)?;
        Ok(LengthEstimator::new(pattern, self.url_length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "GALGEN_STATE_PATH",
        "GALGEN_URL_LENGTH",
        "GALGEN_URL_PATTERN",
        "GALGEN_MAX_ALTERNATIVE_CHARS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config() {
        let config = HelperConfig::default();
        assert_eq!(config.url_length, 23);
        assert_eq!(config.max_alternative_chars, 50);
        assert_eq!(config.max_answer_chars(), 48);
        assert!(config.length_estimator().is_ok());
    }

    #[test]
    fn test_default_url_pattern() {
        let est = HelperConfig::default().length_estimator().unwrap();
        assert_eq!(est.estimate("see https://example.org/x."), "see .".len() + 23);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("GALGEN_STATE_PATH", " /tmp/galgen.json ");
        std::env::set_var("GALGEN_URL_LENGTH", "30");
        std::env::set_var("GALGEN_MAX_ALTERNATIVE_CHARS", "25");

        let config = HelperConfig::from_env();
        assert_eq!(config.state_path, PathBuf::from("/tmp/galgen.json"));
        assert_eq!(config.url_length, 30);
        assert_eq!(config.max_answer_chars(), 23);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_falls_back_on_garbage() {
        clear_env();
        std::env::set_var("GALGEN_URL_LENGTH", "lots");
        std::env::set_var("GALGEN_MAX_ALTERNATIVE_CHARS", "1");
        std::env::set_var("GALGEN_URL_PATTERN", "   ");

        let config = HelperConfig::from_env();
        assert_eq!(config.url_length, 23);
        assert_eq!(config.max_alternative_chars, 50);
        assert_eq!(config.url_pattern, DEFAULT_URL_PATTERN);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_url_pattern() {
        clear_env();
        std::env::set_var("GALGEN_URL_PATTERN", "(unclosed");

        let result = HelperConfig::from_env().length_estimator();
        assert!(matches!(result, Err(ConfigError::InvalidUrlPattern(_))));
        clear_env();
    }
}
