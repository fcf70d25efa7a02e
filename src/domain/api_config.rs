//! Suggestion service endpoint configuration.

use url::Url;

/// Connection settings for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiApiConfig {
    /// Base API URL, without the model path.
    pub api_url: Url,
    /// Model identifier appended to the request path.
    pub model: String,
    /// Defensive request timeout; not part of the observable contract.
    pub timeout_secs: u64,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: default_timeout() }
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_timeout() -> u64 {
    30
}
