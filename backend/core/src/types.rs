use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::AnalyzerError;

/// Supported vision providers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Provider {
    #[default]
    #[serde(rename = "openai")]
    OpenAi,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(Provider::OpenAi),
            other => Err(AnalyzerError::UnsupportedProvider(other.to_string())),
        }
    }
}

/// Outcome of a single chat-completion POST.
///
/// HTTP-level failures are values, not errors: the interpreters turn them
/// into the negative result for their mode.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply {
    /// 2xx response with a JSON body.
    Completion(Value),
    /// Non-2xx response.
    HttpError { status: u16, details: String },
    /// 2xx response whose body did not parse as JSON.
    InvalidJson { raw: String, message: String },
}

impl ApiReply {
    /// The assistant text at `choices[0].message.content`, if any.
    pub fn content(&self) -> Option<&str> {
        match self {
            ApiReply::Completion(body) => body
                .pointer("/choices/0/message/content")
                .and_then(Value::as_str),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, ApiReply::Completion(_))
    }

    /// JSON rendering used as `raw_response` when the reply has no usable text.
    pub fn to_value(&self) -> Value {
        match self {
            ApiReply::Completion(body) => body.clone(),
            ApiReply::HttpError { status, details } => json!({
                "error": "OpenAI HTTP error",
                "status": status,
                "details": details,
            }),
            ApiReply::InvalidJson { raw, message } => json!({
                "error": "Invalid JSON response from OpenAI",
                "raw": raw,
                "message": message,
            }),
        }
    }
}
