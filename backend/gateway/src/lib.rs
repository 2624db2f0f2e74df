//! docscan Gateway HTTP API Server
//!
//! Exposes the document analysis handlers (extract / check) and a health probe.

pub mod document_analyzers;
pub mod error;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, start_server, GatewayState};
