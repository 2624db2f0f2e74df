//! Vision request payloads for the chat completions API.
//!
//! One user turn carrying the document image as a data URL followed by the
//! prompt text.
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Serialize;

/// Every image is declared as JPEG; the API sniffs the real format.
pub const IMAGE_MIME: &str = "image/jpeg";

/// Completion budget for a single document reply.
pub const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Clone, Serialize)]
pub struct ChatPayload {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Vec<ContentPart>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    ImageUrl { image_url: ImageUrl },
    Text { text: String },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ImageUrl {
    pub url: String,
}

impl ChatPayload {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Encode raw image bytes as a `data:image/jpeg;base64,...` URL.
pub fn image_data_url(image: &[u8]) -> String {
    format!("data:{};base64,{}", IMAGE_MIME, STANDARD.encode(image))
}

/// Build the chat completion request for one image and one prompt.
///
/// The image is encoded fresh on every call.
pub fn build_payload(model: &str, prompt: &str, image: &[u8]) -> ChatPayload {
    ChatPayload {
        model: model.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: vec![
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image_data_url(image),
                    },
                },
                ContentPart::Text {
                    text: prompt.to_string(),
                },
            ],
        }],
        max_tokens: MAX_TOKENS,
    }
}
