//! Gemini `generateContent` wire types.
//!
//! Only the fields the relay reads or writes are modelled; everything else
//! in the upstream payload is ignored on decode.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A single user turn carrying `prompt`.
    pub fn user_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A content part. Non-text parts (inline data, function calls) decode with
/// `text: None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// `candidates[0].content.parts[0].text`, if every step is present.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }

    /// Explain why [`first_text`](Self::first_text) came back empty.
    pub fn missing_text_reason(&self) -> String {
        let Some(candidate) = self.candidates.first() else {
            return match self
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.as_deref())
            {
                Some(reason) => format!("Upstream returned no candidates (blocked: {})", reason),
                None => "Upstream returned no candidates".to_string(),
            };
        };

        let finish = candidate
            .finish_reason
            .as_deref()
            .map(|r| format!(" (finish reason: {})", r))
            .unwrap_or_default();

        match &candidate.content {
            None => format!("Upstream candidate has no content{}", finish),
            Some(content) if content.parts.is_empty() => {
                format!("Upstream candidate has no parts{}", finish)
            }
            Some(_) => format!("Upstream candidate has no text part{}", finish),
        }
    }
}

/// The normalized success envelope returned to clients.
pub fn text_envelope(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": text }]
            }
        }]
    })
}
