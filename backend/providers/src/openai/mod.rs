pub mod api_client;
pub mod document_analyzer;

pub use api_client::OpenAiClient;
pub use document_analyzer::{OpenAiDocumentAnalyzer, API_URL, MODEL};
