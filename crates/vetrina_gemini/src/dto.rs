//! Data transfer objects for the Gemini REST API.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use vetrina_core::{Comment, EditingSuggestions};

/// An inline media payload in a request or response part.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the encoded bytes
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

/// One part of a content turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline media payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// A text-only part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    /// An inline-media part.
    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

/// A content turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Ordered parts
    pub parts: Vec<Part>,
}

/// Generation controls for a request.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// MIME type the response must use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// JSON schema the response must satisfy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<JsonValue>,
}

/// A `generateContent` request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Input turns
    pub contents: Vec<Content>,
    /// Generation controls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// A single-turn text prompt constrained to a JSON response schema.
    pub fn structured(prompt: impl Into<String>, schema: JsonValue) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part::text(prompt)],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema),
            }),
        }
    }

    /// A single-turn request with free-form parts and no schema.
    pub fn parts(parts: Vec<Part>) -> Self {
        Self {
            contents: vec![Content { parts }],
            generation_config: None,
        }
    }
}

/// One candidate in a `generateContent` response.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// The produced content turn
    pub content: Content,
}

/// A `generateContent` response.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Produced candidates
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// The first text part across candidates, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .iter()
            .flat_map(|candidate| candidate.content.parts.iter())
            .find_map(|part| part.text.as_deref())
    }

    /// The first inline-media part across candidates, if any.
    pub fn first_inline(&self) -> Option<&InlineData> {
        self.candidates
            .iter()
            .flat_map(|candidate| candidate.content.parts.iter())
            .find_map(|part| part.inline_data.as_ref())
    }
}

/// Metadata payload inferred from a file name or idea.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataPayload {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub content_type: String,
}

/// Per-platform content payload.
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformContentPayload {
    pub title: String,
    pub description: String,
    pub hashtags: Vec<String>,
}

/// Content-and-suggestions payload for existing media.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAndSuggestionsPayload {
    pub platform_content: HashMap<String, PlatformContentPayload>,
    pub editing_suggestions: EditingSuggestions,
}

/// Idea-expansion payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaPayload {
    pub video_metadata: MetadataPayload,
    pub platform_content: HashMap<String, PlatformContentPayload>,
    pub editing_suggestions: EditingSuggestions,
}

/// Best-time entry for one platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestTimePayload {
    pub best_time_iso: String,
}

/// Comment-simulation payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentsPayload {
    pub comments: Vec<Comment>,
}

/// Analytics-simulation payload.
///
/// Counters arrive as JSON numbers; conversion rounds them into `u64`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsPayload {
    pub views: f64,
    pub likes: f64,
    pub shares: f64,
    pub comments: f64,
}
