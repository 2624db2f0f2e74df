pub mod mock;
pub mod openai;
pub mod resolver;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

pub use mock::MockAnalyzer;
pub use openai::{OpenAiClient, OpenAiDocumentAnalyzer};
pub use resolver::{resolve_document_analyzer, resolve_named};
pub use service::DocumentService;
