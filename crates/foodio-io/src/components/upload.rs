//! File upload component with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use foodio_gen::ImageFormat;

use crate::preview;

/// Allowed file extensions for photo uploads.
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Check whether a filename has an allowed image extension.
fn has_allowed_extension(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        ALLOWED_EXTENSIONS
            .iter()
            .any(|a| a.eq_ignore_ascii_case(ext))
    })
}

/// Props for the [`FileUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    /// Called with the raw file bytes and filename after a successful upload.
    pub on_upload: EventHandler<(Vec<u8>, String)>,
}

/// A drag-and-drop zone with a file picker.
///
/// Accepts PNG, JPEG, and WebP photos. When a file is selected (via the
/// picker or drag-and-drop), validates the extension, reads the bytes,
/// verifies the magic bytes actually match an image format, shows an
/// inline preview, and fires `on_upload` with `(bytes, filename)`.
///
/// Rejected files (wrong extension, non-image content, read failure)
/// surface an inline message and leave the previous preview and the
/// parent's state untouched.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut preview_uri = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);

    // Validate, read, and forward the first file from a list.
    //
    // Shared by the file-picker (`handle_files`) and drag-and-drop
    // (`handle_drop`) paths so the validation/read/callback logic
    // lives in one place. Captures only `Copy` handles so both paths
    // can own it.
    let on_upload = props.on_upload;
    let process_files = move |files: Vec<FileData>| async move {
        if let Some(file) = files.first() {
            let name = file.name();
            if !has_allowed_extension(&name) {
                error.set(Some(format!(
                    "Please upload a valid image file (PNG, JPG, WEBP): {name}"
                )));
                return;
            }
            match file.read_bytes().await {
                Ok(bytes) => {
                    let bytes = bytes.to_vec();
                    let Some(format) = ImageFormat::from_magic_bytes(&bytes) else {
                        error.set(Some(format!("Not a valid image file: {name}")));
                        return;
                    };
                    preview_uri.set(Some(preview::data_uri(&bytes, format.mime_type())));
                    error.set(None);
                    on_upload.call((bytes, name));
                }
                Err(e) => {
                    error.set(Some(format!("Failed to read file: {e}")));
                }
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let zone_class = if dragging() {
        "upload-zone dragging"
    } else {
        "upload-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            if let Some(ref err) = error() {
                p { class: "upload-error", "{err}" }
            }

            if let Some(ref uri) = preview_uri() {
                img {
                    src: "{uri}",
                    class: "upload-preview",
                    alt: "Uploaded food photo",
                }
            } else {
                div { class: "upload-prompt",
                    // Upload arrow
                    svg {
                        xmlns: "http://www.w3.org/2000/svg",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "1.5",
                        class: "upload-icon",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            d: "M3 16.5v2.25A2.25 2.25 0 0 0 5.25 21h13.5A2.25 2.25 0 0 0 21 18.75V16.5m-13.5-9L12 3m0 0 4.5 4.5M12 3v13.5",
                        }
                    }
                    p { class: "upload-title", "Drop a food photo here" }
                    p { class: "upload-hint", "PNG, JPG, or WEBP" }
                }
            }

            label { class: "upload-button",
                input {
                    r#type: "file",
                    accept: ".png,.jpg,.jpeg,.webp",
                    class: "hidden",
                    onchange: handle_files,
                }
                if preview_uri().is_some() { "Choose a Different Photo" } else { "Choose File" }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allowed_extensions() {
        for name in ["soup.png", "plate.JPG", "noodles.jpeg", "cake.WebP"] {
            assert!(has_allowed_extension(name), "{name} should be accepted");
        }
    }

    #[test]
    fn rejects_other_extensions() {
        for name in ["menu.pdf", "clip.mp4", "photo.gif", "photo.bmp", "noext"] {
            assert!(!has_allowed_extension(name), "{name} should be rejected");
        }
    }

    #[test]
    fn extension_check_uses_last_dot() {
        assert!(has_allowed_extension("dinner.backup.png"));
        assert!(!has_allowed_extension("dinner.png.exe"));
    }
}
