pub mod prompts;
pub mod reply;
pub mod vision;

pub use prompts::{PromptError, PromptTemplate, PromptVars};
pub use reply::{
    extraction_fallback, interpret_extraction, interpret_verification, parse_extraction,
    parse_verification, strip_code_fence,
};
pub use vision::{build_payload, image_data_url, ChatPayload, ContentPart};
