//! Environment variable loading.
//!
//! Every field has a default except the OpenAI API key. Blank values count
//! as unset.

use std::collections::HashMap;

use thiserror::Error;

use crate::defaults::*;
use crate::schema::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing env var \"{0}\"")]
    MissingEnvVar(String),

    #[error("Invalid value for env var \"{var}\": {value:?}")]
    InvalidValue { var: String, value: String },
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Load configuration from a provided map (useful for testing).
    pub fn from_vars(env: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |name: &str| {
            env.get(name)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let port = match get("DOCSCAN_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: "DOCSCAN_PORT".into(),
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            bind_address: get("DOCSCAN_BIND").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            port,
            provider: get("DOCSCAN_PROVIDER").unwrap_or_else(|| DEFAULT_PROVIDER.to_string()),
            openai_api_key: get("OPENAI_API_KEY"),
            openai_api_url: get("OPENAI_API_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string()),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            log_level: get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_dir: get("DOCSCAN_LOG_DIR").unwrap_or_else(|| DEFAULT_LOG_DIR.to_string()),
        })
    }

    /// The trimmed OpenAI API key, or an error naming the variable.
    pub fn require_openai_api_key(&self) -> Result<&str, ConfigError> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("OPENAI_API_KEY".into()))
    }
}
