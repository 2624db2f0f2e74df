//! Provider resolution: map a [`Provider`] to a concrete analyzer.
//!
//! Analyzers are built once, at composition time, and handed to
//! [`crate::DocumentService`].

use std::sync::Arc;

use tracing::info;

use docscan_config::Config;
use docscan_core::{AnalyzerError, DocumentAnalyzer, Provider};

use crate::openai::{OpenAiClient, OpenAiDocumentAnalyzer};

/// Build the document analyzer for `provider` from `config`.
pub fn resolve_document_analyzer(
    provider: Provider,
    config: &Config,
) -> Result<Arc<dyn DocumentAnalyzer>, AnalyzerError> {
    match provider {
        Provider::OpenAi => {
            let client = OpenAiClient::from_config(config)?;
            let analyzer = OpenAiDocumentAnalyzer::new(client)
                .with_api_url(&config.openai_api_url)
                .with_model(&config.openai_model);
            info!(provider = %provider, model = %config.openai_model, "Resolved document analyzer");
            Ok(Arc::new(analyzer))
        }
    }
}

/// Parse `name` and resolve it. Unknown names fail before any client is built.
pub fn resolve_named(
    name: &str,
    config: &Config,
) -> Result<Arc<dyn DocumentAnalyzer>, AnalyzerError> {
    let provider: Provider = name.parse()?;
    resolve_document_analyzer(provider, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key() -> Config {
        Config {
            openai_api_key: Some("sk-test".into()),
            ..Config::default()
        }
    }

    #[test]
    fn test_resolves_openai() {
        let analyzer = resolve_document_analyzer(Provider::OpenAi, &config_with_key()).unwrap();
        assert_eq!(analyzer.name(), "openai");

        let by_name = resolve_named("openai", &config_with_key()).unwrap();
        assert_eq!(by_name.name(), "openai");
    }

    #[test]
    fn test_unsupported_provider_fails_before_client() {
        // No API key: building a client would fail with MissingApiKey instead.
        for name in ["unknown_provider", "OpenAI", ""] {
            let err = resolve_named(name, &Config::default()).err().unwrap();
            assert!(
                matches!(err, AnalyzerError::UnsupportedProvider(ref p) if p == name),
                "{name:?} gave {err}"
            );
        }
    }

    #[test]
    fn test_missing_key_surfaces_on_resolution() {
        let err = resolve_document_analyzer(Provider::OpenAi, &Config::default())
            .err()
            .unwrap();
        assert!(matches!(err, AnalyzerError::MissingApiKey));
    }
}
