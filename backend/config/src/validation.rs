//! Config validation with user-friendly error messages.

use crate::schema::Config;
use thiserror::Error;

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &Config) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_provider(config, &mut report);
    validate_server(config, &mut report);
    report
}

fn validate_provider(config: &Config, report: &mut ValidationReport) {
    if let Err(e) = config.provider() {
        report.error("provider", e.to_string());
        return;
    }
    if config.require_openai_api_key().is_err() {
        report.error("openai_api_key", "OPENAI_API_KEY is required for the openai provider");
    }
    if !(config.openai_api_url.starts_with("https://")
        || config.openai_api_url.starts_with("http://"))
    {
        report.error("openai_api_url", "Endpoint must be an http(s) URL");
    } else if config.openai_api_url.starts_with("http://") {
        report.warn("openai_api_url", "Endpoint is not using TLS");
    }
    if config.openai_model.trim().is_empty() {
        report.error("openai_model", "Model name cannot be empty");
    }
}

fn validate_server(config: &Config, report: &mut ValidationReport) {
    if !matches!(config.bind_address.as_str(), "127.0.0.1" | "localhost" | "::1") {
        report.warn(
            "bind_address",
            format!(
                "Listening on {} exposes unauthenticated file reads to the network",
                config.bind_address
            ),
        );
    }
    if config.port == 0 {
        report.error("port", "Port must be > 0");
    } else if config.port < 1024 && config.port != 80 && config.port != 443 {
        report.warn(
            "port",
            format!(
                "Port {} requires elevated privileges; consider using a port >= 1024",
                config.port
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            openai_api_key: Some("sk-test".into()),
            ..Config::default()
        }
    }

    #[test]
    fn accepts_complete_config() {
        let report = validate(&valid_config());
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn flags_missing_api_key() {
        let report = validate(&Config::default());
        assert!(!report.is_valid());
        assert_eq!(report.errors[0].path, "openai_api_key");
    }

    #[test]
    fn flags_unknown_provider_only() {
        let config = Config {
            provider: "gemini".into(),
            ..Config::default()
        };
        let report = validate(&config);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].path, "provider");
        assert!(report.errors[0].message.contains("gemini"));
    }

    #[test]
    fn warns_on_plain_http_and_low_port() {
        let config = Config {
            port: 81,
            openai_api_url: "http://localhost:9000/v1/chat/completions".into(),
            ..valid_config()
        };
        let report = validate(&config);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn warns_on_public_bind() {
        let config = Config {
            bind_address: "0.0.0.0".into(),
            ..valid_config()
        };
        let report = validate(&config);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].path, "bind_address");
    }

    #[test]
    fn rejects_port_zero() {
        let config = Config {
            port: 0,
            ..valid_config()
        };
        assert!(!validate(&config).is_valid());
    }
}
