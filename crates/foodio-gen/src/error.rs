//! Error taxonomy for the generation service.

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, GenError>;

/// Errors that can occur while requesting a generated image.
///
/// All variants are terminal for the triggering action -- the service
/// layer performs no retries.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// Missing or rejected API key.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The API returned a non-success status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The prompt or generated output was blocked by a safety filter.
    #[error("content blocked: {0}")]
    ContentBlocked(String),

    /// The response was well-formed but unusable (no candidates, no
    /// inline image part).
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// The inline image payload was not valid base64.
    #[error("base64 decode failed: {0}")]
    Decode(String),

    /// Network or protocol failure from the HTTP client.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Maximum length of an error message lifted from a response body.
const MAX_MESSAGE_LEN: usize = 300;

/// Trim and truncate a raw error body so it is safe to log and carry
/// around in an error variant.
#[must_use]
pub fn sanitize_message(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return "no error detail provided".to_owned();
    }
    let mut out: String = text.chars().take(MAX_MESSAGE_LEN).collect();
    if out.len() < text.len() {
        out.push('…');
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_trims_whitespace() {
        assert_eq!(sanitize_message("  oops \n"), "oops");
    }

    #[test]
    fn sanitize_empty_is_placeholder() {
        assert_eq!(sanitize_message("   "), "no error detail provided");
    }

    #[test]
    fn sanitize_truncates_long_bodies() {
        let long = "x".repeat(1000);
        let out = sanitize_message(&long);
        assert!(out.chars().count() <= MAX_MESSAGE_LEN + 1);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn short_messages_pass_through() {
        assert_eq!(sanitize_message("quota exceeded"), "quota exceeded");
    }
}
