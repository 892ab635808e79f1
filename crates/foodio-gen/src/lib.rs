//! foodio-gen: Generation service layer for foodio.
//!
//! Turns an uploaded food photo plus a camera angle and style prompt
//! into the natural-language "shot brief" sent to the Gemini
//! `generateContent` endpoint, and parses the inline image payload out
//! of the response. A second operation overlays promotional text on an
//! already-generated studio shot.
//!
//! This crate is target-agnostic: the wire types and brief construction
//! are pure, and the client works both natively and on
//! `wasm32-unknown-unknown` (reqwest is fetch-backed there). All
//! browser interaction lives in `foodio-io`.

pub mod brief;
pub mod client;
pub mod error;
pub mod format;
pub mod wire;

pub use brief::{CameraAngle, promo_brief, shot_brief};
pub use client::{GeneratedImage, StudioClient, StudioClientBuilder};
pub use error::{GenError, Result};
pub use format::ImageFormat;
