use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
const API_KEY_VAR: &str = "TWITTER_API_KEY";
const API_SECRET_VAR: &str = "TWITTER_API_SECRET";
const ACCESS_TOKEN_VAR: &str = "TWITTER_ACCESS_TOKEN";
const ACCESS_TOKEN_SECRET_VAR: &str = "TWITTER_ACCESS_TOKEN_SECRET";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub fetch_timeout_seconds: u64,
    pub publish_timeout_seconds: u64,
    pub prices_path: PathBuf,
    pub twitter_api_url: String,
    pub publish_max_retries: u32,
    pub publish_retry_delay_seconds: u64,
    /// Keep the previous baseline when a change alert could not be posted.
    pub hold_baseline_on_publish_failure: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://fantasy.premierleague.com/api".into(),
            fetch_timeout_seconds: 30,
            publish_timeout_seconds: 30,
            prices_path: PathBuf::from("data/prices.json"),
            twitter_api_url: "https://api.twitter.com/2/tweets".into(),
            publish_max_retries: 3,
            publish_retry_delay_seconds: 5,
            hold_baseline_on_publish_failure: false,
        }
    }
}

/// OAuth 1.0a user-context keys for the posting account, read from the environment (and `.env`).
#[derive(Debug, Clone, Default)]
pub struct TwitterCredentials {
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub access_token: Option<String>,
    pub access_token_secret: Option<String>,
}

/// A complete set of signing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigningKeys<'a> {
    pub consumer_key: &'a str,
    pub consumer_secret: &'a str,
    pub token: &'a str,
    pub token_secret: &'a str,
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str, ConfigError> {
    value.as_deref().ok_or(ConfigError::MissingCredential(name))
}

impl TwitterCredentials {
    pub fn from_env() -> Self {
        Self {
            api_key: env_var(API_KEY_VAR),
            api_secret: env_var(API_SECRET_VAR),
            access_token: env_var(ACCESS_TOKEN_VAR),
            access_token_secret: env_var(ACCESS_TOKEN_SECRET_VAR),
        }
    }

    /// Fails with the name of the first missing variable.
    pub fn signing_keys(&self) -> Result<SigningKeys<'_>, ConfigError> {
        Ok(SigningKeys {
            consumer_key: required(&self.api_key, API_KEY_VAR)?,
            consumer_secret: required(&self.api_secret, API_SECRET_VAR)?,
            token: required(&self.access_token, ACCESS_TOKEN_VAR)?,
            token_secret: required(&self.access_token_secret, ACCESS_TOKEN_SECRET_VAR)?,
        })
    }
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Loads the given config file, or the default one when it exists, falling back to defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                load_config(default_path)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}
