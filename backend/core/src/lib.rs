pub mod error;
pub mod traits;
pub mod types;

pub use error::AnalyzerError;
pub use traits::DocumentAnalyzer;
pub use types::{ApiReply, Provider};
