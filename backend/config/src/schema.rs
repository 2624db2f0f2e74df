use std::fmt;

use serde::{Deserialize, Serialize};

use docscan_core::{AnalyzerError, Provider};

use crate::defaults::*;
use crate::redact::mask_secret;

/// docscan runtime configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Vision provider identifier (e.g. "openai")
    pub provider: String,
    /// OpenAI API key
    pub openai_api_key: Option<String>,
    /// Chat completions endpoint
    pub openai_api_url: String,
    /// Vision model name
    pub openai_model: String,
    /// Log level
    pub log_level: String,
    /// Directory for the rolling JSON log file
    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            provider: DEFAULT_PROVIDER.to_string(),
            openai_api_key: None,
            openai_api_url: DEFAULT_OPENAI_API_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: DEFAULT_LOG_DIR.to_string(),
        }
    }
}

impl Config {
    /// Parse the configured provider identifier.
    pub fn provider(&self) -> Result<Provider, AnalyzerError> {
        self.provider.parse()
    }

    /// `host:port` string for the HTTP listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bind_address", &self.bind_address)
            .field("port", &self.port)
            .field("provider", &self.provider)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_deref().map(mask_secret),
            )
            .field("openai_api_url", &self.openai_api_url)
            .field("openai_model", &self.openai_model)
            .field("log_level", &self.log_level)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.openai_model, "gpt-4o");
        assert_eq!(
            config.openai_api_url,
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(config.provider().unwrap(), Provider::OpenAi);
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let config = Config {
            provider: "gemini".into(),
            ..Config::default()
        };
        assert!(matches!(
            config.provider(),
            Err(AnalyzerError::UnsupportedProvider(p)) if p == "gemini"
        ));
    }

    #[test]
    fn test_debug_masks_api_key() {
        let config = Config {
            openai_api_key: Some("sk-abcdef1234567890".into()),
            ..Config::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("abcdef1234567890"));
        assert!(debug.contains("sk-a***"));
    }
}
