//! Serde types for the Gemini `generateContent` wire format.
//!
//! Requests carry the uploaded photo as an inline-data part followed by
//! the shot brief as a text part, and ask for a mixed IMAGE+TEXT
//! response. Response parsing extracts the **first** inline image part
//! of the **first** candidate; anything else is a failure.

use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};
use crate::format::ImageFormat;

/// Top-level `generateContent` request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<RequestPart>,
}

/// A request part: either a text prompt or inline image data.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RequestPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<String>,
}

impl GenerateRequest {
    /// Build a request carrying one image and one instruction.
    ///
    /// The image goes first (matching the editing convention), followed
    /// by the brief text. The response is requested with mixed
    /// IMAGE+TEXT modalities; only the image part is consumed.
    #[must_use]
    pub fn new(image: &[u8], mime_type: &str, brief: &str) -> Self {
        let parts = vec![
            RequestPart::InlineData {
                inline_data: InlineData {
                    mime_type: mime_type.to_owned(),
                    data: base64::engine::general_purpose::STANDARD.encode(image),
                },
            },
            RequestPart::Text {
                text: brief.to_owned(),
            },
        ];

        Self {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE".to_owned(), "TEXT".to_owned()],
            },
        }
    }
}

/// Top-level `generateContent` response body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
    #[serde(default)]
    block_reason_message: Option<String>,
}

/// Finish reasons that indicate the safety filter rejected the request
/// or its output. Returned with HTTP 200.
const BLOCKED_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "IMAGE_SAFETY",
    "IMAGE_PROHIBITED_CONTENT",
    "IMAGE_RECITATION",
    "RECITATION",
    "PROHIBITED_CONTENT",
    "BLOCKLIST",
];

/// A decoded image payload extracted from a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedImage {
    /// Raw image bytes.
    pub bytes: Vec<u8>,
    /// Format declared by the response MIME type (PNG when unknown).
    pub format: ImageFormat,
}

/// Extract the first inline image part of the first candidate.
///
/// # Errors
///
/// Returns [`GenError::ContentBlocked`] for prompt-feedback blocks and
/// safety finish reasons, [`GenError::UnexpectedResponse`] when no
/// candidate, content, or inline image part is present, and
/// [`GenError::Decode`] when the payload is not valid base64.
pub fn extract_image(response: GenerateResponse) -> Result<ExtractedImage> {
    if let Some(feedback) = response.prompt_feedback
        && let Some(reason) = feedback.block_reason
    {
        let message = feedback
            .block_reason_message
            .unwrap_or_else(|| format!("prompt blocked: {reason}"));
        return Err(GenError::ContentBlocked(message));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| GenError::UnexpectedResponse("no candidates in response".into()))?;

    if let Some(ref reason) = candidate.finish_reason {
        if BLOCKED_FINISH_REASONS.contains(&reason.as_str()) {
            return Err(GenError::ContentBlocked(format!(
                "blocked by safety filter: {reason}"
            )));
        }
        if reason == "IMAGE_OTHER" || reason == "NO_IMAGE" {
            return Err(GenError::UnexpectedResponse(format!(
                "generation failed: {reason}"
            )));
        }
        // STOP, MAX_TOKENS, etc. are normal.
    }

    let content = candidate
        .content
        .ok_or_else(|| GenError::UnexpectedResponse("no content in candidate".into()))?;

    let inline = content
        .parts
        .into_iter()
        .find_map(|p| p.inline_data)
        .ok_or_else(|| GenError::UnexpectedResponse("no image part in response".into()))?;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(&inline.data)
        .map_err(|e| GenError::Decode(e.to_string()))?;

    let format = ImageFormat::from_mime_type(&inline.mime_type).unwrap_or_default();

    Ok(ExtractedImage { bytes, format })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case() {
        let req = GenerateRequest::new(b"bytes", "image/jpeg", "the brief");
        let json = serde_json::to_value(&req).unwrap();

        assert!(json.get("generationConfig").is_some());
        assert!(json.get("generation_config").is_none());

        let modalities = &json["generationConfig"]["responseModalities"];
        assert_eq!(modalities[0], "IMAGE");
        assert_eq!(modalities[1], "TEXT");
    }

    #[test]
    fn request_puts_image_before_brief() {
        let req = GenerateRequest::new(&[1, 2, 3], "image/png", "re-shoot this");
        let json = serde_json::to_value(&req).unwrap();
        let parts = json["contents"][0]["parts"].as_array().unwrap();

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[0]["inlineData"]["data"], "AQID");
        assert_eq!(parts[1]["text"], "re-shoot this");
    }

    #[test]
    fn extract_returns_first_image_part() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {},
                        {"inlineData": {"mimeType": "image/png", "data": "AQID"}},
                        {"inlineData": {"mimeType": "image/jpeg", "data": "BAUG"}}
                    ]
                },
                "finishReason": "STOP"
            }]
        }"#;
        let resp: GenerateResponse = serde_json::from_str(json).unwrap();
        let image = extract_image(resp).unwrap();
        assert_eq!(image.bytes, vec![1, 2, 3]);
        assert_eq!(image.format, ImageFormat::Png);
    }

    #[test]
    fn extract_uses_first_candidate_only() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{}]}},
                {"content": {"parts": [
                    {"inlineData": {"mimeType": "image/png", "data": "AQID"}}
                ]}}
            ]
        }"#;
        let resp: GenerateResponse = serde_json::from_str(json).unwrap();
        // The second candidate has an image, but only the first counts.
        assert!(matches!(
            extract_image(resp),
            Err(GenError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn extract_fails_without_candidates() {
        let resp: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            extract_image(resp),
            Err(GenError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn extract_reports_prompt_feedback_block() {
        let json = r#"{
            "candidates": [],
            "promptFeedback": {
                "blockReason": "SAFETY",
                "blockReasonMessage": "Prompt was blocked"
            }
        }"#;
        let resp: GenerateResponse = serde_json::from_str(json).unwrap();
        match extract_image(resp) {
            Err(GenError::ContentBlocked(msg)) => assert_eq!(msg, "Prompt was blocked"),
            other => panic!("expected ContentBlocked, got {other:?}"),
        }
    }

    #[test]
    fn extract_reports_safety_finish_reason() {
        let json = r#"{
            "candidates": [{"finishReason": "IMAGE_SAFETY"}]
        }"#;
        let resp: GenerateResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(extract_image(resp), Err(GenError::ContentBlocked(_))));
    }

    #[test]
    fn extract_rejects_bad_base64() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"inlineData": {"mimeType": "image/png", "data": "!!!"}}]
                }
            }]
        }"#;
        let resp: GenerateResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(extract_image(resp), Err(GenError::Decode(_))));
    }

    #[test]
    fn unknown_response_mime_defaults_to_png() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"inlineData": {"mimeType": "image/tiff", "data": "AQID"}}]
                }
            }]
        }"#;
        let resp: GenerateResponse = serde_json::from_str(json).unwrap();
        let image = extract_image(resp).unwrap();
        assert_eq!(image.format, ImageFormat::Png);
    }
}
