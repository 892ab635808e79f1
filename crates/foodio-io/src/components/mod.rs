//! Reusable Dioxus components for the foodio application.

mod compare;
mod display;
mod upload;

pub use compare::CompareSlider;
pub use display::ResultDisplay;
pub use upload::FileUpload;
