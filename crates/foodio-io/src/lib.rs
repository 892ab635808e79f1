//! foodio-io: Browser I/O and Dioxus component library.
//!
//! Handles file uploads, data-URI previews, Blob downloads, the
//! before/after compare slider, and the per-action request-state type
//! used by the foodio web application.

pub mod components;
pub mod download;
pub mod flow;
pub mod preview;

pub use components::{CompareSlider, FileUpload, ResultDisplay};
pub use flow::ActionState;
pub use preview::ImagePayload;
