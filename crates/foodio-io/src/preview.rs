//! Data-URI previews for in-memory image payloads.
//!
//! The original bytes are kept alongside the derived URI so the same
//! payload can be displayed (`<img src>`), sent to the generation
//! service, and downloaded without re-decoding anything.

use base64::Engine as _;
use foodio_gen::ImageFormat;

/// Build a `data:` URI for raw image bytes.
#[must_use]
pub fn data_uri(bytes: &[u8], mime_type: &str) -> String {
    format!(
        "data:{mime_type};base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// An image held in memory: raw bytes, detected format, and a derived
/// `data:` URI for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    /// Raw image bytes.
    pub bytes: Vec<u8>,
    /// Detected or declared format.
    pub format: ImageFormat,
    /// `data:` URI suitable for an `<img src>` attribute.
    pub uri: String,
}

impl ImagePayload {
    /// Wrap raw bytes, deriving the display URI.
    #[must_use]
    pub fn new(bytes: Vec<u8>, format: ImageFormat) -> Self {
        let uri = data_uri(&bytes, format.mime_type());
        Self { bytes, format, uri }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_has_mime_and_payload() {
        let uri = data_uri(&[1, 2, 3], "image/png");
        assert_eq!(uri, "data:image/png;base64,AQID");
    }

    #[test]
    fn data_uri_round_trips_bytes() {
        // The preview must be a decoding of the exact uploaded bytes.
        let bytes: Vec<u8> = (0..=255).collect();
        let uri = data_uri(&bytes, "image/jpeg");

        let payload = uri.split_once(";base64,").unwrap().1;
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .unwrap();
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn payload_uri_matches_format_mime() {
        let payload = ImagePayload::new(vec![9, 9], ImageFormat::WebP);
        assert!(payload.uri.starts_with("data:image/webp;base64,"));
        assert_eq!(payload.bytes, vec![9, 9]);
    }
}
