//! Suggestion client: generated listing copy via the Gemini API.
//!
//! The add-product form can ask for a suggested title and description.
//! The boundary is a narrow trait so the draft workflow can be driven by a
//! deterministic fake in tests; the real implementation is a single REST
//! call with no retry and no timeout. API key: `GEMINI_API_KEY` in `.env`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Inputs for a suggestion request. `name` or `category` should be
/// non-empty; the form enforces that before calling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub name: String,
    pub category: String,
    pub keywords: String,
}

/// A suggested listing title and description. The description may use the
/// markup subset handled by [`crate::markup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
}

/// Why a suggestion could not be produced. Every variant renders as a
/// human-readable reason for the form and the toast.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SuggestError {
    /// No credential configured; detected before any network I/O.
    #[error("API key is not configured. Set GEMINI_API_KEY to enable AI suggestions.")]
    MissingApiKey,

    /// The remote call failed: transport, HTTP status, or an unreadable body.
    #[error("Failed to generate AI content: {0}")]
    Request(String),

    /// The response parsed but is missing the required fields.
    #[error("AI response was incomplete: {0}")]
    Content(String),
}

/// The suggestion boundary. One call in, a suggestion or a reason out.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn suggest(&self, request: SuggestionRequest) -> Result<Suggestion, SuggestError>;
}

// Gemini generateContent request/response shapes
#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Gemini-backed [`SuggestionProvider`].
pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a client. `None` (or a blank key) leaves the client
    /// unconfigured; every `suggest` call then fails fast with
    /// [`SuggestError::MissingApiKey`].
    pub fn new(api_key: Option<String>) -> Self {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Self {
        let key = std::env::var("GEMINI_API_KEY").ok();
        if key.as_deref().map(str::trim).unwrap_or("").is_empty() {
            eprintln!("[OmniSell] GEMINI_API_KEY not set. AI suggestions will not work.");
        }
        Self::new(key)
    }

    /// Override the model (e.g. `gemini-2.5-flash`).
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl SuggestionProvider for GeminiClient {
    async fn suggest(&self, request: SuggestionRequest) -> Result<Suggestion, SuggestError> {
        let key = self.api_key.as_deref().ok_or(SuggestError::MissingApiKey)?;

        let url = format!(
            "{}/{}:generateContent?key={}",
            API_BASE,
            self.model,
            urlencoding::encode(key)
        );

        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![Part {
                    text: build_prompt(&request),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        };

        let res = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SuggestError::Request(e.to_string()))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(SuggestError::Request(format!("API error {}: {}", status, body)));
        }

        let parsed: GenerateResponse = res
            .json()
            .await
            .map_err(|e| SuggestError::Request(format!("response parse failed: {}", e)))?;

        let text = parsed
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| SuggestError::Content("no candidates returned".to_string()))?;

        parse_suggestion(text)
    }
}

/// The schema the model is asked to fill.
fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "A catchy, SEO-friendly product title, under 80 characters.",
            },
            "description": {
                "type": "STRING",
                "description": "A persuasive, well-structured product description highlighting \
                                key benefits. Use markdown for formatting like bolding (**text**) \
                                and bullet points (- item).",
            },
        },
        "required": ["title", "description"],
    })
}

fn build_prompt(request: &SuggestionRequest) -> String {
    format!(
        "You are an expert e-commerce SEO copywriter. Your task is to generate a compelling \
         product title and description for an online listing.\n\n\
         Product Name: \"{}\"\n\
         Category: \"{}\"\n\
         Keywords: \"{}\"\n\n\
         Generate a JSON object that strictly follows the provided schema.\n\
         - The \"title\" should be SEO-friendly, catchy, and under 80 characters.\n\
         - The \"description\" should be persuasive, detailed, and structured with markdown \
         for bullet points or bold text to highlight key features and benefits for the customer.",
        request.name, request.category, request.keywords
    )
}

/// Parse the model's JSON payload into a [`Suggestion`].
///
/// The model sometimes wraps the payload in a ```json fence even when
/// asked for raw JSON, so fences are stripped first. A payload that isn't
/// JSON is a request-level failure; JSON missing (or blanking) the
/// required fields is a content failure.
fn parse_suggestion(raw: &str) -> Result<Suggestion, SuggestError> {
    let cleaned = strip_code_fence(raw.trim());

    let value: serde_json::Value = serde_json::from_str(cleaned)
        .map_err(|e| SuggestError::Request(format!("invalid JSON from model: {}", e)))?;

    let field = |name: &str| -> Result<String, SuggestError> {
        value
            .get(name)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .ok_or_else(|| SuggestError::Content(format!("missing \"{}\"", name)))
    };

    Ok(Suggestion {
        title: field("title")?,
        description: field("description")?,
    })
}

fn strip_code_fence(text: &str) -> &str {
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    text.strip_suffix("```").unwrap_or(text).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SuggestionRequest {
        SuggestionRequest {
            name: "Wireless Mouse".to_string(),
            category: "Electronics".to_string(),
            keywords: "comfortable, office".to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let client = GeminiClient::new(None);
        assert!(!client.has_credential());

        let err = client.suggest(request()).await.unwrap_err();
        assert_eq!(err, SuggestError::MissingApiKey);
    }

    #[tokio::test]
    async fn test_blank_key_counts_as_missing() {
        let client = GeminiClient::new(Some("   ".to_string()));
        let err = client.suggest(request()).await.unwrap_err();
        assert_eq!(err, SuggestError::MissingApiKey);
    }

    #[test]
    fn test_prompt_includes_inputs() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("Wireless Mouse"));
        assert!(prompt.contains("Electronics"));
        assert!(prompt.contains("comfortable, office"));
    }

    #[test]
    fn test_parse_plain_json() {
        let suggestion =
            parse_suggestion(r#"{"title": "Great Mouse", "description": "Very nice."}"#).unwrap();
        assert_eq!(suggestion.title, "Great Mouse");
        assert_eq!(suggestion.description, "Very nice.");
    }

    #[test]
    fn test_parse_fenced_json() {
        let raw = "```json\n{\"title\": \"T\", \"description\": \"D\"}\n```";
        let suggestion = parse_suggestion(raw).unwrap();
        assert_eq!(suggestion.title, "T");
        assert_eq!(suggestion.description, "D");
    }

    #[test]
    fn test_missing_field_is_content_error() {
        let err = parse_suggestion(r#"{"title": "only a title"}"#).unwrap_err();
        assert!(matches!(err, SuggestError::Content(_)));
    }

    #[test]
    fn test_blank_field_is_content_error() {
        let err =
            parse_suggestion(r#"{"title": "T", "description": "   "}"#).unwrap_err();
        assert!(matches!(err, SuggestError::Content(_)));
    }

    #[test]
    fn test_non_json_is_request_error() {
        let err = parse_suggestion("sorry, I can't do that").unwrap_err();
        assert!(matches!(err, SuggestError::Request(_)));
    }

    #[test]
    fn test_errors_render_human_readable() {
        assert!(SuggestError::MissingApiKey.to_string().contains("GEMINI_API_KEY"));
        assert!(SuggestError::Request("boom".to_string())
            .to_string()
            .contains("boom"));
    }

    struct FakeProvider;

    #[async_trait]
    impl SuggestionProvider for FakeProvider {
        async fn suggest(&self, request: SuggestionRequest) -> Result<Suggestion, SuggestError> {
            Ok(Suggestion {
                title: format!("Better {}", request.name),
                description: "- bullet".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_provider_trait_is_fakeable() {
        let provider: std::sync::Arc<dyn SuggestionProvider> = std::sync::Arc::new(FakeProvider);
        let suggestion = provider.suggest(request()).await.unwrap();
        assert_eq!(suggestion.title, "Better Wireless Mouse");
    }
}
