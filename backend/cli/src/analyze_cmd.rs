//! CLI Extract / Check Commands
//!
//! Same prompts and response envelope as the HTTP handlers.

use std::path::Path;

use anyhow::Result;

use docscan_gateway::document_analyzers::{DocumentRequest, ExtractResponse};
use docscan_providers::DocumentService;
use docscan_understanding::PromptTemplate;

use crate::DocumentArgs;

impl From<DocumentArgs> for DocumentRequest {
    fn from(args: DocumentArgs) -> Self {
        DocumentRequest {
            image_path: args.image.to_string_lossy().into_owned(),
            expected_type: args.expected_type,
            expected_values: args.expected_values,
        }
    }
}

fn prompt_for(template: &str, request: &DocumentRequest) -> Result<String> {
    Ok(PromptTemplate::load(template, &request.prompt_vars())?)
}

pub async fn extract(service: &DocumentService, request: DocumentRequest) -> Result<ExtractResponse> {
    let prompt = prompt_for(PromptTemplate::CHECK_EXTRACT_IDENTITY, &request)?;
    let result = service
        .extract(&prompt, Path::new(&request.image_path))
        .await?;
    Ok(ExtractResponse::from_result(request, &result))
}

pub async fn check(service: &DocumentService, request: DocumentRequest) -> Result<bool> {
    let prompt = prompt_for(PromptTemplate::CHECK_IDENTITY, &request)?;
    Ok(service
        .check(&prompt, Path::new(&request.image_path))
        .await?)
}
