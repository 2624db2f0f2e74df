//! Document analysis endpoints.
//!
//! `POST /document_analyzers/extract` and `POST /document_analyzers/check`.

use std::path::Path;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use docscan_understanding::{PromptTemplate, PromptVars};

use crate::error::ApiError;
use crate::server::GatewayState;

/// What the caller expects the document to be.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocumentRequest {
    pub image_path: String,
    pub expected_type: String,
    #[serde(default)]
    pub expected_values: Vec<String>,
}

impl DocumentRequest {
    pub fn prompt_vars(&self) -> PromptVars {
        PromptVars::new()
            .set("expected_type", self.expected_type.as_str())
            .expected_values(&self.expected_values)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExtractResponse {
    pub approved: Value,
    pub document: DocumentComparison,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DocumentComparison {
    pub expected: ExpectedDocument,
    pub got: ExtractedDocument,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExpectedDocument {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub values: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExtractedDocument {
    #[serde(rename = "type")]
    pub doc_type: Value,
    pub matched: Value,
}

impl ExtractResponse {
    /// Pair the caller's expectations with what the model reported.
    pub fn from_result(request: DocumentRequest, result: &Value) -> Self {
        let field = |name: &str| result.get(name).cloned().unwrap_or(Value::Null);

        Self {
            approved: field("approved"),
            document: DocumentComparison {
                expected: ExpectedDocument {
                    doc_type: request.expected_type,
                    values: request.expected_values,
                },
                got: ExtractedDocument {
                    doc_type: field("document_type"),
                    matched: field("matches"),
                },
            },
        }
    }
}

/// Handler for `POST /document_analyzers/extract`.
///
/// `image_path` is read from the server's own file system and uploaded to the
/// provider, so the gateway must only be reachable by trusted callers.
pub async fn extract(
    State(state): State<GatewayState>,
    body: Result<Json<DocumentRequest>, JsonRejection>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let Json(request) = body?;
    let prompt = PromptTemplate::load(PromptTemplate::CHECK_EXTRACT_IDENTITY, &request.prompt_vars())?;

    let result = state
        .service
        .extract(&prompt, Path::new(&request.image_path))
        .await?;

    let response = ExtractResponse::from_result(request, &result);
    info!(approved = %response.approved, "Extract request handled");
    Ok(Json(response))
}

/// Handler for `POST /document_analyzers/check`. Responds with a bare boolean.
pub async fn check(
    State(state): State<GatewayState>,
    body: Result<Json<DocumentRequest>, JsonRejection>,
) -> Result<Json<bool>, ApiError> {
    let Json(request) = body?;
    let prompt = PromptTemplate::load(PromptTemplate::CHECK_IDENTITY, &request.prompt_vars())?;

    let verdict = state
        .service
        .check(&prompt, Path::new(&request.image_path))
        .await?;

    info!(verdict, "Check request handled");
    Ok(Json(verdict))
}
