use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use docscan_core::{AnalyzerError, DocumentAnalyzer};

/// Entry point for document analysis.
///
/// Validates arguments, then delegates to the injected analyzer.
#[derive(Clone)]
pub struct DocumentService {
    analyzer: Arc<dyn DocumentAnalyzer>,
}

impl DocumentService {
    pub fn new(analyzer: Arc<dyn DocumentAnalyzer>) -> Self {
        Self { analyzer }
    }

    pub fn provider_name(&self) -> &str {
        self.analyzer.name()
    }

    /// Extraction mode. Returns the model's JSON object, or
    /// `{"approved": false, "raw_response": ...}` when the reply is unusable.
    pub async fn extract(&self, prompt: &str, file_path: &Path) -> Result<Value, AnalyzerError> {
        validate_presence(prompt, file_path)?;
        debug!(provider = self.provider_name(), path = %file_path.display(), "extract");
        Ok(self.analyzer.extract(prompt, file_path).await?)
    }

    /// Verification mode. `true` only when the model answered exactly "true".
    pub async fn check(&self, prompt: &str, file_path: &Path) -> Result<bool, AnalyzerError> {
        validate_presence(prompt, file_path)?;
        debug!(provider = self.provider_name(), path = %file_path.display(), "check");
        Ok(self.analyzer.check(prompt, file_path).await?)
    }
}

/// Reject blank arguments before touching the file system or network.
fn validate_presence(prompt: &str, file_path: &Path) -> Result<(), AnalyzerError> {
    let path = file_path.to_string_lossy();
    let params = [("prompt", prompt), ("file_path", path.as_ref())];

    for (name, value) in params {
        if value.trim().is_empty() {
            return Err(AnalyzerError::Validation(name.to_string()));
        }
    }
    Ok(())
}
