use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;
use serde_json::{json, Value};

use docscan_core::{ApiReply, DocumentAnalyzer};
use docscan_understanding::{interpret_extraction, interpret_verification};

/// A mock analyzer that answers every call with a canned reply text.
///
/// The text goes through the same interpreters as a real provider reply.
pub struct MockAnalyzer {
    name: String,
    reply: Option<String>,
    failure: Option<String>,
    calls: Mutex<Vec<(String, PathBuf)>>,
}

impl MockAnalyzer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reply: None,
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Reply content returned as `choices[0].message.content`.
    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.reply = Some(reply.into());
        self
    }

    /// Make every call fail with `message`.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// `(prompt, file_path)` for each call received, in order.
    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn respond(&self, prompt: &str, file_path: &Path) -> Result<ApiReply> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((prompt.to_string(), file_path.to_path_buf()));
        }
        if let Some(message) = &self.failure {
            bail!("{message}");
        }
        Ok(ApiReply::Completion(json!({
            "choices": [{ "message": { "role": "assistant", "content": self.reply } }]
        })))
    }
}

#[async_trait]
impl DocumentAnalyzer for MockAnalyzer {
    fn name(&self) -> &str {
        &self.name
    }

    async fn extract(&self, prompt: &str, file_path: &Path) -> Result<Value> {
        Ok(interpret_extraction(&self.respond(prompt, file_path)?))
    }

    async fn check(&self, prompt: &str, file_path: &Path) -> Result<bool> {
        Ok(interpret_verification(&self.respond(prompt, file_path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_interprets_reply() {
        let mock = MockAnalyzer::new("mock").with_reply(r#"{"approved": true}"#);
        let result = mock.extract("p", Path::new("doc.jpg")).await.unwrap();
        assert_eq!(result, json!({ "approved": true }));
        assert!(!mock.check("p", Path::new("doc.jpg")).await.unwrap());
        assert_eq!(mock.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_mock_without_reply_falls_back() {
        let mock = MockAnalyzer::new("mock");
        let result = mock.extract("p", Path::new("doc.jpg")).await.unwrap();
        assert_eq!(result["approved"], false);
        assert!(result["raw_response"]["choices"].is_array());
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let mock = MockAnalyzer::new("mock").failing("API Error");
        let err = mock.check("p", Path::new("doc.jpg")).await.unwrap_err();
        assert_eq!(err.to_string(), "API Error");
    }
}
