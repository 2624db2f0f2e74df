use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Trait for vision providers that analyze a document image.
///
/// Both calls send the image at `file_path` together with `prompt` to the
/// provider's model. They differ only in how the textual reply is read.
#[async_trait]
pub trait DocumentAnalyzer: Send + Sync {
    /// Provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Extraction mode: the reply is parsed as a JSON object.
    ///
    /// Malformed replies never surface as errors; they come back as
    /// `{"approved": false, "raw_response": ...}`.
    async fn extract(&self, prompt: &str, file_path: &Path) -> Result<Value>;

    /// Verification mode: the reply must be exactly `true` or `false`.
    ///
    /// Anything else reads as `false`.
    async fn check(&self, prompt: &str, file_path: &Path) -> Result<bool>;
}
