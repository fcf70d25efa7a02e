//! Gemini suggestion client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, DependencySuggestion, GeminiApiConfig};
use crate::ports::SuggestionClient;

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";
const DEFAULT_STATUS_MESSAGE: &str = "Suggestion API request failed";

/// HTTP transport for the Gemini `generateContent` API.
///
/// This client performs a single request per call. Failures are typed; the
/// app layer decides whether to collapse them to an empty suggestion list.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GeminiApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::SuggestionApiError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        let endpoint = generate_content_endpoint(config)?;
        Ok(Self { api_key, endpoint, client })
    }

    /// Create from environment variable with default configuration.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_env_with_config(&GeminiApiConfig::default())
    }

    /// Create from environment variable with custom configuration.
    pub fn from_env_with_config(config: &GeminiApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| AppError::EnvironmentVariableMissing("GEMINI_API_KEY".into()))?;

        Self::new(api_key, config)
    }

    fn send_request(&self, request: &ApiRequest) -> Result<Vec<DependencySuggestion>, AppError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::SuggestionApiError {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: ApiResponse =
                serde_json::from_str(&body_text).map_err(|e| AppError::SuggestionApiError {
                    message: format!("Failed to parse response: {}", e),
                    status: Some(status.as_u16()),
                })?;

            let text = api_response
                .candidates
                .into_iter()
                .next()
                .and_then(|candidate| candidate.content)
                .and_then(|content| content.parts.into_iter().next())
                .and_then(|part| part.text)
                .ok_or_else(|| AppError::SuggestionApiError {
                    message: "No content in response".into(),
                    status: Some(status.as_u16()),
                })?;

            let suggestions: Vec<DependencySuggestion> = serde_json::from_str(&text)
                .map_err(|e| AppError::SuggestionApiError {
                    message: format!("Failed to parse suggestion list: {}", e),
                    status: Some(status.as_u16()),
                })?;

            return Ok(suggestions);
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::SuggestionApiError { message, status: Some(status.as_u16()) })
    }
}

/// Builds an [`HttpGeminiClient`] from the environment on every call.
///
/// Each suggestion call is an independent request, so nothing is lost by
/// constructing the transport per call, and a missing `GEMINI_API_KEY` only
/// surfaces once a suggestion is actually requested instead of at startup.
#[derive(Debug, Clone, Default)]
pub struct EnvGeminiClient {
    config: GeminiApiConfig,
}

impl EnvGeminiClient {
    pub fn new(config: GeminiApiConfig) -> Self {
        Self { config }
    }
}

impl SuggestionClient for EnvGeminiClient {
    fn suggest(&self, description: &str) -> Result<Vec<DependencySuggestion>, AppError> {
        if description.trim().is_empty() {
            return Ok(Vec::new());
        }

        HttpGeminiClient::from_env_with_config(&self.config)?.suggest(description)
    }
}

fn generate_content_endpoint(config: &GeminiApiConfig) -> Result<Url, AppError> {
    let raw = format!(
        "{}/models/{}:generateContent",
        config.api_url.as_str().trim_end_matches('/'),
        config.model
    );
    Url::parse(&raw).map_err(|e| AppError::SuggestionApiError {
        message: format!("Invalid API endpoint '{}': {}", raw, e),
        status: None,
    })
}

fn build_prompt(description: &str) -> String {
    format!(
        "I am building a Python project with the following description: \"{}\". \
         Please suggest a list of popular, standard Python packages (PyPI) that I should install. \
         Provide the package name and a very brief reason why.",
        description
    )
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

impl ApiRequest {
    fn for_description(description: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: build_prompt(description) }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: serde_json::json!({
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "package": { "type": "STRING" },
                            "reason": { "type": "STRING" },
                        },
                        "required": ["package", "reason"],
                    },
                }),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl SuggestionClient for HttpGeminiClient {
    fn suggest(&self, description: &str) -> Result<Vec<DependencySuggestion>, AppError> {
        if description.trim().is_empty() {
            return Ok(Vec::new());
        }

        self.send_request(&ApiRequest::for_description(description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL_PATH: &str = "/models/gemini-2.5-flash:generateContent";

    fn test_config(server: &mockito::Server) -> GeminiApiConfig {
        GeminiApiConfig {
            api_url: Url::parse(&server.url()).unwrap(),
            model: "gemini-2.5-flash".to_string(),
            timeout_secs: 1,
        }
    }

    fn success_body(inner: &str) -> String {
        serde_json::json!({
            "candidates": [
                { "content": { "parts": [ { "text": inner } ] } }
            ]
        })
        .to_string()
    }

    #[test]
    fn suggest_parses_structured_suggestions() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", MODEL_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(success_body(
                r#"[{"package":"scrapy","reason":"Web scraping framework"},{"package":"lxml","reason":"Fast HTML parsing"}]"#,
            ))
            .create();

        let client = HttpGeminiClient::new("fake-key".to_string(), &test_config(&server)).unwrap();
        let suggestions = client.suggest("a web scraper for news sites").unwrap();

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].package, "scrapy");
        assert_eq!(suggestions[0].reason, "Web scraping framework");
        assert_eq!(suggestions[1].package, "lxml");
    }

    #[test]
    fn suggest_short_circuits_blank_description_without_calling_the_service() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", MODEL_PATH).expect(0).create();

        let client = HttpGeminiClient::new("fake-key".to_string(), &test_config(&server)).unwrap();
        assert!(client.suggest("   ").unwrap().is_empty());
        mock.assert();
    }

    #[test]
    fn suggest_returns_error_on_500() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", MODEL_PATH).with_status(500).expect(1).create();

        let client = HttpGeminiClient::new("fake-key".to_string(), &test_config(&server)).unwrap();
        let result = client.suggest("anything");

        assert!(result.is_err());
        mock.assert();
    }

    #[test]
    fn suggest_returns_error_when_response_has_no_candidates() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", MODEL_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates": []}"#)
            .create();

        let client = HttpGeminiClient::new("fake-key".to_string(), &test_config(&server)).unwrap();
        let err = client.suggest("anything").unwrap_err();

        match err {
            AppError::SuggestionApiError { message, status } => {
                assert_eq!(status, Some(200));
                assert_eq!(message, "No content in response");
            }
            other => panic!("unexpected error variant: {}", other),
        }
    }

    #[test]
    fn suggest_returns_error_on_malformed_suggestion_payload() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", MODEL_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(success_body("not json at all"))
            .create();

        let client = HttpGeminiClient::new("fake-key".to_string(), &test_config(&server)).unwrap();
        assert!(client.suggest("anything").is_err());
    }

    #[test]
    fn parses_nested_error_message() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", MODEL_PATH)
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"message":"API key not valid"}}"#)
            .expect(1)
            .create();

        let client = HttpGeminiClient::new("fake-key".to_string(), &test_config(&server)).unwrap();
        let err = client.suggest("anything").unwrap_err();

        match err {
            AppError::SuggestionApiError { message, status } => {
                assert_eq!(status, Some(400));
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected error variant: {}", other),
        }
    }

    #[test]
    fn request_body_carries_description_and_response_schema() {
        let request = ApiRequest::for_description("a small flask API");
        let value = serde_json::to_value(&request).unwrap();

        let text = value["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.contains("\"a small flask API\""));
        assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "ARRAY");
    }
}
