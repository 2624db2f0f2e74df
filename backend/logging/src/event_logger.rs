//! Analysis Event Logger
//!
//! Structured events (extraction, verification, fallback) emitted once per
//! analyzer call and written through `tracing` to the NDJSON log.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::redact::redact_sensitive_data;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum AnalysisEvent {
    Extraction {
        provider: String,
        model: String,
        approved: Option<bool>,
    },
    Verification {
        provider: String,
        model: String,
        verdict: bool,
    },
    /// The reply could not be read in the requested mode
    /// (`"extraction"` or `"verification"`).
    Fallback {
        mode: String,
        reason: String,
    },
}

#[derive(Debug, Serialize)]
pub struct EventLogEntry {
    pub timestamp: DateTime<Utc>,
    pub event: AnalysisEvent,
}

pub struct EventLogger;

impl EventLogger {
    /// Redact free-text fields and wrap the event in a timestamped entry.
    pub fn entry(mut event: AnalysisEvent) -> EventLogEntry {
        if let AnalysisEvent::Fallback { reason, .. } = &mut event {
            *reason = redact_sensitive_data(reason);
        }

        EventLogEntry {
            timestamp: Utc::now(),
            event,
        }
    }

    /// Logs an analysis event, immediately serializing it to the tracing system.
    pub fn log_event(event: AnalysisEvent) {
        let entry = Self::entry(event);
        let json = serde_json::to_string(&entry).unwrap_or_default();

        info!(target: "analysis_events", event = %json, "Analysis event");
    }
}
