//! `docscan-config`: runtime configuration for docscan.
//!
//! Provides:
//! - Typed config schema (server, provider, OpenAI endpoint, logging)
//! - Environment variable loading with defaults
//! - API key masking for safe logging/display
//! - Validation with errors and warnings

pub mod defaults;
pub mod env;
pub mod redact;
pub mod schema;
pub mod validation;

pub use env::ConfigError;
pub use redact::{mask_secret, redact};
pub use schema::Config;
pub use validation::{validate, ConfigValidationError, ValidationReport};

/// Log validation findings for a loaded config and return the report.
///
/// Errors are logged rather than raised: a missing API key only matters once
/// a provider is resolved.
pub fn log_validation(config: &Config) -> ValidationReport {
    let report = validate(config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }
    report
}
