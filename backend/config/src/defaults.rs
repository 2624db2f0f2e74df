//! Default values applied when an environment variable is unset.

/// Default HTTP bind address. Loopback only: requests name server-side files.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default vision provider.
pub const DEFAULT_PROVIDER: &str = "openai";

/// OpenAI chat completions endpoint.
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Vision model used for document analysis.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const DEFAULT_LOG_DIR: &str = "logs";
