//! Wire types mirroring the Gemini `generateContent` JSON format.

use serde::{Deserialize, Serialize};

use crate::prompt::GenerationConfig;

const BLOCK_NONE: &str = "BLOCK_NONE";

const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: WireGenerationConfig,
    pub safety_settings: Vec<SafetySetting>,
}

impl GenerateContentRequest {
    /// Builds a single-turn request carrying the prompt as one text part,
    /// with safety filtering disabled for every harm category.
    pub fn single_turn(prompt: &str, config: &GenerationConfig) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: WireGenerationConfig {
                temperature: config.temperature,
                max_output_tokens: config.max_output_tokens,
            },
            safety_settings: HARM_CATEGORIES
                .into_iter()
                .map(|category| SafetySetting {
                    category,
                    threshold: BLOCK_NONE,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireGenerationConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
pub struct SafetySetting {
    pub category: &'static str,
    pub threshold: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, or `None` when the
    /// response carries no text (e.g. the prompt was blocked).
    pub fn into_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }

    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Creativity;

    #[test]
    fn request_serializes_with_camel_case_fields() {
        let config = GenerationConfig::for_creativity(Creativity::Low);
        let request = GenerateContentRequest::single_turn("add comments", &config);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["generationConfig"]["temperature"], 0.30);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 2048);
        assert_eq!(
            json["contents"][0]["parts"][0]["text"],
            "add comments"
        );
    }

    #[test]
    fn all_four_harm_categories_are_unblocked() {
        let config = GenerationConfig::for_creativity(Creativity::High);
        let request = GenerateContentRequest::single_turn("p", &config);
        let json = serde_json::to_value(&request).unwrap();

        let settings = json["safetySettings"].as_array().unwrap();
        assert_eq!(settings.len(), 4);
        for setting in settings {
            assert_eq!(setting["threshold"], "BLOCK_NONE");
        }
    }

    #[test]
    fn response_text_is_extracted_verbatim() {
        let raw = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "// a comment\n"}, {"text": "done"}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        });
        let response: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.into_text().unwrap(), "// a comment\ndone");
    }

    #[test]
    fn blocked_response_yields_no_text() {
        let raw = serde_json::json!({
            "candidates": [],
            "promptFeedback": {"blockReason": "SAFETY"}
        });
        let response: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.block_reason(), Some("SAFETY"));
        assert!(response.into_text().is_none());
    }
}
