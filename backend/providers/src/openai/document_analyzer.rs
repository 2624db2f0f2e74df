use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

use docscan_core::{ApiReply, DocumentAnalyzer};
use docscan_logging::{AnalysisEvent, EventLogger};
use docscan_understanding::{extraction_fallback, parse_extraction, parse_verification};

use super::api_client::OpenAiClient;

pub const API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const MODEL: &str = "gpt-4o";

/// Document analysis through OpenAI's vision models.
#[derive(Debug, Clone)]
pub struct OpenAiDocumentAnalyzer {
    client: OpenAiClient,
    api_url: String,
    model: String,
}

impl OpenAiDocumentAnalyzer {
    pub fn new(client: OpenAiClient) -> Self {
        Self {
            client,
            api_url: API_URL.to_string(),
            model: MODEL.to_string(),
        }
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn post_document(&self, prompt: &str, file_path: &Path) -> Result<ApiReply> {
        let image = tokio::fs::read(file_path)
            .await
            .with_context(|| format!("Failed to read image {}", file_path.display()))?;

        debug!(
            model = %self.model,
            path = %file_path.display(),
            bytes = image.len(),
            "Posting document to OpenAI"
        );

        let payload = self.client.prepare_payload(&self.model, prompt, &image)?;
        self.client.post(&self.api_url, payload).await
    }
}

fn fallback_event(mode: &str, reason: String) -> AnalysisEvent {
    warn!(mode, reason = %reason, "Reply unusable, falling back");
    AnalysisEvent::Fallback {
        mode: mode.to_string(),
        reason,
    }
}

/// Extraction result plus the fallback event, if the reply was unusable.
fn read_extraction(reply: &ApiReply) -> (Value, Option<AnalysisEvent>) {
    match parse_extraction(reply) {
        Ok(value) => (value, None),
        Err(reason) => (
            extraction_fallback(reply),
            Some(fallback_event("extraction", reason)),
        ),
    }
}

/// Verdict plus the fallback event, if the reply was not a boolean literal.
fn read_verification(reply: &ApiReply) -> (bool, Option<AnalysisEvent>) {
    match parse_verification(reply) {
        Ok(verdict) => (verdict, None),
        Err(reason) => (false, Some(fallback_event("verification", reason))),
    }
}

#[async_trait]
impl DocumentAnalyzer for OpenAiDocumentAnalyzer {
    fn name(&self) -> &str {
        "openai"
    }

    async fn extract(&self, prompt: &str, file_path: &Path) -> Result<Value> {
        let reply = self.post_document(prompt, file_path).await?;
        let (result, fallback) = read_extraction(&reply);
        if let Some(event) = fallback {
            EventLogger::log_event(event);
        }

        let approved = result.get("approved").and_then(Value::as_bool);
        info!(model = %self.model, approved = ?approved, "Document extraction finished");
        EventLogger::log_event(AnalysisEvent::Extraction {
            provider: self.name().to_string(),
            model: self.model.clone(),
            approved,
        });

        Ok(result)
    }

    async fn check(&self, prompt: &str, file_path: &Path) -> Result<bool> {
        let reply = self.post_document(prompt, file_path).await?;
        let (verdict, fallback) = read_verification(&reply);
        if let Some(event) = fallback {
            EventLogger::log_event(event);
        }

        info!(model = %self.model, verdict, "Document verification finished");
        EventLogger::log_event(AnalysisEvent::Verification {
            provider: self.name().to_string(),
            model: self.model.clone(),
            verdict,
        });

        Ok(verdict)
    }
}
