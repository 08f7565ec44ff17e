//! Bot configuration
//!
//! Loaded once at startup from a JSON file (`config.json` unless `CONFIG_PATH`
//! says otherwise). `DISCORD_TOKEN` in the environment overrides `TOKEN`.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::utils::template::{self, TemplateError};

/// Placeholders available to `TIP_MESSAGE_FORMAT`
pub const TIP_PLACEHOLDERS: &[&str] = &["sender", "receiver", "ltc_amount", "usd"];

/// Placeholders available to `BAL_MESSAGE_FORMAT`
pub const BAL_PLACEHOLDERS: &[&str] = &["ltc", "usd", "username"];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(rename = "TOKEN")]
    pub token: String,

    /// Command prefix, e.g. `$`
    #[serde(rename = "PREFIX")]
    pub prefix: String,

    /// Users allowed to run `setbal`
    #[serde(rename = "OWNER_IDS")]
    pub owner_ids: Vec<u64>,

    #[serde(rename = "TIP_MESSAGE_FORMAT")]
    pub tip_message_format: String,

    #[serde(rename = "BAL_MESSAGE_FORMAT")]
    pub bal_message_format: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Read(String, #[source] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid {0}: {1}")]
    Template(&'static str, #[source] TemplateError),
}

impl Config {
    /// Load the config file and apply environment overrides
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.display().to_string(), e))?;

        let mut config = Self::from_json(&raw)?;
        if let Ok(token) = std::env::var("DISCORD_TOKEN") {
            config.token = token;
        }
        Ok(config)
    }

    /// Parse and validate a config document
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(raw)?;

        template::validate(&config.tip_message_format, TIP_PLACEHOLDERS)
            .map_err(|e| ConfigError::Template("TIP_MESSAGE_FORMAT", e))?;
        template::validate(&config.bal_message_format, BAL_PLACEHOLDERS)
            .map_err(|e| ConfigError::Template("BAL_MESSAGE_FORMAT", e))?;

        Ok(config)
    }

    pub fn is_owner(&self, user_id: u64) -> bool {
        self.owner_ids.contains(&user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "TOKEN": "abc",
        "PREFIX": "$",
        "OWNER_IDS": [111, 222],
        "TIP_MESSAGE_FORMAT": "{sender} sent {receiver} {ltc_amount} LTC (${usd})",
        "BAL_MESSAGE_FORMAT": "**{ltc} LTC** ≈ ${usd} for {username}"
    }"#;

    #[test]
    fn test_from_json() {
        let config = Config::from_json(SAMPLE).unwrap();
        assert_eq!(config.prefix, "$");
        assert_eq!(config.owner_ids, vec![111, 222]);
        assert!(config.is_owner(222));
        assert!(!config.is_owner(333));
    }

    #[test]
    fn test_missing_key() {
        let raw = r#"{"TOKEN": "abc", "PREFIX": "$"}"#;
        assert!(matches!(Config::from_json(raw), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_bad_template() {
        let raw = SAMPLE.replace("{username}", "{name}");
        assert!(matches!(
            Config::from_json(&raw),
            Err(ConfigError::Template("BAL_MESSAGE_FORMAT", _))
        ));
    }

    #[test]
    fn test_format_spec_rejected_at_load() {
        let raw = SAMPLE.replace("${usd} for", "${usd:>8} for");
        assert!(matches!(
            Config::from_json(&raw),
            Err(ConfigError::Template("BAL_MESSAGE_FORMAT", TemplateError::FormatSpec(_)))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.is_owner(111));
        assert!(!config.token.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load(dir.path().join("nope.json")),
            Err(ConfigError::Read(_, _))
        ));
    }
}
