//! Response types for `generateContent`.

use serde::{Deserialize, Serialize};

use crate::content::{Content, FunctionCall};

/// Token usage reported alongside a response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens in the prompt, including the conversation history
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_token_count: Option<u32>,
    /// Tokens across all generated candidates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates_token_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_token_count: Option<u32>,
}

impl UsageMetadata {
    /// Returns true if any usage data is present
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.prompt_token_count.is_some()
            || self.candidates_token_count.is_some()
            || self.total_token_count.is_some()
    }
}

/// One alternative response generated by the model.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
    /// Why generation stopped, e.g. `STOP` or `MAX_TOKENS`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

impl Candidate {
    /// Creates a candidate holding the given content.
    #[must_use]
    pub fn new(content: Content) -> Self {
        Self {
            content,
            ..Default::default()
        }
    }
}

/// A response from the `generateContent` endpoint.
///
/// Deserializes directly from the API's JSON:
///
/// ```
/// use genai_tool_turns::GenerateContentResponse;
///
/// let response: GenerateContentResponse = serde_json::from_str(r#"{
///     "candidates": [{
///         "content": {"role": "model", "parts": [{"text": "Hi there"}]},
///         "finishReason": "STOP"
///     }],
///     "usageMetadata": {"promptTokenCount": 4, "totalTokenCount": 7}
/// }"#).unwrap();
///
/// assert_eq!(response.text().as_deref(), Some("Hi there"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Creates a response with a single candidate holding `content`.
    #[must_use]
    pub fn from_content(content: Content) -> Self {
        Self {
            candidates: vec![Candidate::new(content)],
            ..Default::default()
        }
    }

    /// Returns the concatenated text of the first candidate, if any.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        self.candidates.first().and_then(|c| c.content.text())
    }

    /// Returns the function calls of the first candidate.
    ///
    /// Unlike [`extract_function_calls`](crate::extract_function_calls) this does
    /// not check the candidate count, which makes it suitable for inspection and
    /// logging but not for driving automatic function calling.
    #[must_use]
    pub fn function_calls(&self) -> Vec<&FunctionCall> {
        self.candidates
            .first()
            .map(|c| c.content.function_calls().collect())
            .unwrap_or_default()
    }

    /// Returns `true` if the first candidate requested any function call.
    #[must_use]
    pub fn has_function_calls(&self) -> bool {
        self.candidates
            .first()
            .is_some_and(|c| c.content.function_calls().next().is_some())
    }
}
