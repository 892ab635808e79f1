//! HTTP client for the Gemini generation endpoint.
//!
//! One outbound request per user action, a single awaited response, and
//! no retries. Works natively and on `wasm32-unknown-unknown`, where
//! reqwest is backed by the browser fetch API.

use crate::brief::{CameraAngle, promo_brief, shot_brief};
use crate::error::{GenError, Result, sanitize_message};
use crate::format::ImageFormat;
use crate::wire::{GenerateRequest, GenerateResponse, extract_image};

/// Model used for both the studio re-shoot and the text overlay.
const MODEL: &str = "gemini-2.5-flash-image-preview";

/// API base for the `generateContent` endpoint.
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// An image returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Raw image bytes.
    pub bytes: Vec<u8>,
    /// Format declared by the response.
    pub format: ImageFormat,
}

/// Builder for [`StudioClient`].
#[derive(Debug, Clone, Default)]
pub struct StudioClientBuilder {
    api_key: Option<String>,
    model: Option<String>,
}

impl StudioClientBuilder {
    /// Create a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key. Falls back to the `GEMINI_API_KEY` env var.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the model identifier.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Build the client, resolving the API key.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Auth`] when no key was provided and the
    /// `GEMINI_API_KEY` env var is unset (always the case in a browser
    /// build, where the key must be passed explicitly).
    pub fn build(self) -> Result<StudioClient> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .ok_or_else(|| GenError::Auth("GEMINI_API_KEY not set and no API key provided".into()))?;

        Ok(StudioClient {
            client: reqwest::Client::new(),
            api_key,
            model: self.model.unwrap_or_else(|| MODEL.to_owned()),
        })
    }
}

/// Client for the studio re-shoot and text-overlay operations.
#[derive(Debug, Clone)]
pub struct StudioClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl StudioClient {
    /// Create a [`StudioClientBuilder`].
    #[must_use]
    pub fn builder() -> StudioClientBuilder {
        StudioClientBuilder::new()
    }

    /// Request a studio re-shoot of `image` at the given camera angle
    /// and style.
    ///
    /// # Errors
    ///
    /// Any [`GenError`]; see [`Self::generate`] for the mapping.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; fetch futures are !Send
    pub async fn enhance(
        &self,
        image: &[u8],
        angle: CameraAngle,
        style: &str,
    ) -> Result<GeneratedImage> {
        self.generate(image, &shot_brief(angle, style)).await
    }

    /// Request a promotional-text overlay on a studio shot.
    ///
    /// # Errors
    ///
    /// Any [`GenError`]; see [`Self::generate`] for the mapping.
    #[allow(clippy::future_not_send)]
    pub async fn add_text(
        &self,
        image: &[u8],
        headline: &str,
        details: &str,
        style: &str,
    ) -> Result<GeneratedImage> {
        self.generate(image, &promo_brief(headline, details, style))
            .await
    }

    /// Send one `generateContent` request and extract the image part.
    ///
    /// The payload MIME type is detected from magic bytes, defaulting
    /// to PNG for unrecognized data (the service tolerates this).
    #[allow(clippy::future_not_send)]
    async fn generate(&self, image: &[u8], brief: &str) -> Result<GeneratedImage> {
        let mime_type = ImageFormat::from_magic_bytes(image)
            .unwrap_or_default()
            .mime_type();

        let url = format!("{API_BASE}/{}:generateContent", self.model);
        let body = GenerateRequest::new(image, mime_type, brief);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = parse_status_error(status.as_u16(), &text);
            tracing::warn!(status = status.as_u16(), "generation request failed: {err}");
            return Err(err);
        }

        let parsed: GenerateResponse = response.json().await?;
        let image = extract_image(parsed)?;
        Ok(GeneratedImage {
            bytes: image.bytes,
            format: image.format,
        })
    }
}

/// Map a non-success HTTP status and body to a [`GenError`].
fn parse_status_error(status: u16, text: &str) -> GenError {
    let message = sanitize_message(text);
    match status {
        401 | 403 => GenError::Auth(message),
        _ => {
            let lower = message.to_lowercase();
            if lower.contains("safety")
                || lower.contains("blocked")
                || lower.contains("prohibited")
            {
                GenError::ContentBlocked(message)
            } else {
                GenError::Api { status, message }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn builder_with_explicit_key() {
        let client = StudioClient::builder().api_key("test-key").build();
        assert!(client.is_ok());
    }

    #[test]
    fn builder_default_model() {
        let client = StudioClient::builder().api_key("k").build().unwrap();
        assert_eq!(client.model, MODEL);
    }

    #[test]
    fn builder_model_override() {
        let client = StudioClient::builder()
            .api_key("k")
            .model("some-other-model")
            .build()
            .unwrap();
        assert_eq!(client.model, "some-other-model");
    }

    #[test]
    fn status_401_maps_to_auth() {
        assert!(matches!(
            parse_status_error(401, "bad key"),
            GenError::Auth(_)
        ));
        assert!(matches!(parse_status_error(403, ""), GenError::Auth(_)));
    }

    #[test]
    fn safety_body_maps_to_content_blocked() {
        let err = parse_status_error(400, "request violates SAFETY policy");
        assert!(matches!(err, GenError::ContentBlocked(_)));
    }

    #[test]
    fn other_statuses_map_to_api() {
        match parse_status_error(429, "quota exceeded") {
            GenError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }
}
