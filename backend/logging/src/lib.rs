//! Structured logging components for docscan.
//!
//! Handles log redaction, console and rolling JSON output, and analysis event logging.

pub mod event_logger;
pub mod logger;
pub mod redact;

pub use event_logger::{AnalysisEvent, EventLogEntry, EventLogger};
pub use logger::{file_appender, init_logger};
pub use redact::redact_sensitive_data;
