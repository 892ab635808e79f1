use std::rc::Rc;

use dioxus::prelude::*;
use foodio_gen::{CameraAngle, GeneratedImage, ImageFormat, StudioClient};
use foodio_io::{ActionState, FileUpload, ImagePayload, ResultDisplay};

/// Style presets appended to the free-text style prompt.
const STYLE_PRESETS: &[(&str, &str)] = &[
    (
        "✨ Cinematic",
        "Cinematic lighting, dramatic shadows, professional food photography",
    ),
    (
        "🌲 Rustic",
        "On a rustic wooden table, with natural lighting from a window, earthy tones",
    ),
    (
        "☀️ Bright & Airy",
        "Bright and airy style, minimalist, clean background, soft light",
    ),
    (
        "🌙 Dark & Moody",
        "Dark and moody atmosphere, deep shadows, rich colors, elegant",
    ),
    (
        "🌿 Fresh & Natural",
        "Vibrant, fresh and natural setting, with green herbs and fresh ingredients around, daylight",
    ),
    (
        "❤️ Homemade Look",
        "Warm, cozy, homemade look, on a kitchen counter with a checkered napkin, comfortable feeling",
    ),
];

/// Text-style presets appended to the promo style prompt.
const TEXT_STYLE_PRESETS: &[(&str, &str)] = &[
    (
        "Minimalist White",
        "Simple, clean, modern sans-serif font in white. Place it elegantly.",
    ),
    (
        "Bold & Punchy",
        "Thick, bold, impactful font. Use bright colors like yellow or red, possibly with a subtle dark outline to make it pop. Great for sales.",
    ),
    (
        "Elegant Script",
        "A beautiful, flowing script font. Looks handwritten and classy. Good for premium products.",
    ),
];

/// Generic user-facing failure messages. The underlying error detail is
/// logged for diagnostics but never shown.
const GENERATE_FAILED: &str =
    "Failed to generate image. Please check your connection or try a different image.";
const ADD_TEXT_FAILED: &str = "Failed to add text to the image. Please try again.";

fn main() {
    dioxus::launch(app);
}

/// Build the generation client.
///
/// In a browser build the key must be baked in at compile time via
/// `GEMINI_API_KEY`; the builder's runtime env fallback only applies to
/// native targets.
fn build_client() -> foodio_gen::Result<StudioClient> {
    let mut builder = StudioClient::builder();
    if let Some(key) = option_env!("GEMINI_API_KEY") {
        builder = builder.api_key(key);
    }
    builder.build()
}

/// Append a preset onto an existing prompt, comma-separated.
fn append_preset(current: &str, preset: &str) -> String {
    if current.is_empty() {
        preset.to_owned()
    } else {
        format!("{current}, {preset}")
    }
}

/// Transition both actions for a new studio request: the studio action
/// becomes pending and any prior text overlay is invalidated, so a
/// fresh studio shot is never displayed alongside a stale overlay.
fn begin_studio_request<T>(studio: &mut ActionState<T>, overlay: &mut ActionState<T>) {
    *studio = ActionState::Pending;
    *overlay = ActionState::Idle;
}

/// Path data for the camera-angle preset glyphs: an eye for eye-level,
/// a tilted-camera sketch for 45-degree, a top-down pyramid for flat
/// lay.
fn angle_icon_path(angle: CameraAngle) -> &'static str {
    match angle {
        CameraAngle::EyeLevel => {
            "M2.036 12.322a1.012 1.012 0 0 1 0-.639C3.423 7.51 7.36 4.5 12 4.5c4.638 0 \
             8.573 3.007 9.963 7.178.07.207.07.431 0 .639C20.577 16.49 16.64 19.5 12 \
             19.5c-4.638 0-8.573-3.007-9.963-7.178Z M15 12a3 3 0 1 1-6 0 3 3 0 0 1 6 0Z"
        }
        CameraAngle::FortyFiveDegree => {
            "M15.042 21.672 13.684 16.6m0 0-2.51 2.225.569-9.47 5.227 7.917-3.286-.672ZM21 \
             12h-1.382m-2.022-4.477L18.618 6.5m-2.152-.732-1.04-1.732M7.94 16.668 12 \
             14.56m0 0L15.125 8.25m-4.707 0L6.375 6.5m6.156-3.243-2.1-1.818M3.697 \
             19.125l2.83-2.83"
        }
        CameraAngle::TopDown => {
            "M12 9v3.75m-9.303 3.376c-.866 1.5.217 3.374 1.948 3.374h14.71c1.73 0 \
             2.813-1.874 1.948-3.374L13.949 3.378c-.866-1.5-3.032-1.5-3.898 0L2.697 \
             16.126ZM12 15.75h.007v.008H12v-.008Z"
        }
    }
}

/// Glyph rendered above the label on a camera-angle preset button.
fn angle_icon(angle: CameraAngle) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            class: "angle-icon",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: angle_icon_path(angle),
            }
        }
    }
}

/// Root application component.
///
/// Manages the application state via Dioxus signals and wires together
/// the upload, camera-angle, style, result display, and promo-text
/// components. Each of the two external requests carries its own
/// [`ActionState`]; a later resolution simply overwrites an earlier one
/// (no cancellation).
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let mut original = use_signal(|| Option::<Rc<ImagePayload>>::None);
    let mut angle = use_signal(CameraAngle::default);
    let mut style_prompt = use_signal(String::new);
    let mut studio = use_signal(ActionState::<Rc<ImagePayload>>::default);
    let mut overlay = use_signal(ActionState::<Rc<ImagePayload>>::default);
    let mut promo_headline = use_signal(String::new);
    let mut promo_details = use_signal(String::new);
    let mut promo_style = use_signal(String::new);

    // --- File upload handler ---
    // A new upload replaces the photo wholesale and invalidates both
    // results and any stale error.
    let on_upload = move |(bytes, _name): (Vec<u8>, String)| {
        let format = ImageFormat::from_magic_bytes(&bytes).unwrap_or_default();
        original.set(Some(Rc::new(ImagePayload::new(bytes, format))));
        studio.set(ActionState::Idle);
        overlay.set(ActionState::Idle);
    };

    // --- Studio re-shoot flow ---
    let on_generate = move |_| {
        let Some(img) = original() else {
            studio.set(ActionState::Failed("Please upload an image first.".into()));
            return;
        };

        begin_studio_request(&mut studio.write(), &mut overlay.write());

        let angle = angle();
        let style = style_prompt();
        spawn(async move {
            let outcome: foodio_gen::Result<GeneratedImage> = async {
                let client = build_client()?;
                client.enhance(&img.bytes, angle, &style).await
            }
            .await;

            match outcome {
                Ok(GeneratedImage { bytes, format }) => {
                    studio.set(ActionState::Ready(Rc::new(ImagePayload::new(bytes, format))));
                }
                Err(e) => {
                    tracing::error!("studio generation failed: {e}");
                    studio.set(ActionState::Failed(GENERATE_FAILED.into()));
                }
            }
        });
    };

    // --- Text overlay flow ---
    let on_add_text = move |_| {
        let Some(img) = studio().ready().cloned() else {
            overlay.set(ActionState::Failed("Please generate an image first.".into()));
            return;
        };
        let headline = promo_headline();
        if headline.trim().is_empty() {
            overlay.set(ActionState::Failed(
                "Please enter a headline for the promotional text.".into(),
            ));
            return;
        }

        overlay.set(ActionState::Pending);

        let details = promo_details();
        let style = promo_style();
        spawn(async move {
            let outcome: foodio_gen::Result<GeneratedImage> = async {
                let client = build_client()?;
                client.add_text(&img.bytes, &headline, &details, &style).await
            }
            .await;

            match outcome {
                Ok(GeneratedImage { bytes, format }) => {
                    overlay.set(ActionState::Ready(Rc::new(ImagePayload::new(bytes, format))));
                }
                Err(e) => {
                    tracing::error!("text overlay failed: {e}");
                    // The studio result stays displayed unchanged.
                    overlay.set(ActionState::Failed(ADD_TEXT_FAILED.into()));
                }
            }
        });
    };

    // --- Derived view state ---
    let studio_state = studio();
    let overlay_state = overlay();
    let error_message = studio_state
        .error()
        .or_else(|| overlay_state.error())
        .map(str::to_owned);
    let generate_disabled = original().is_none() || studio_state.is_pending();
    let headline_empty = promo_headline().trim().is_empty();
    let add_text_disabled = overlay_state.is_pending() || headline_empty;
    let show_promo_form = studio_state.ready().is_some();

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/style.css") }

        div { class: "app",
            header { class: "app-header",
                h1 { class: "app-title", "Foodio" }
                p { class: "app-tagline",
                    "Turn phone snaps of your dishes into studio-quality promo shots"
                }
            }

            main { class: "panels",
                // Input panel
                div { class: "panel",
                    Step { number: 1, title: "Upload Your Food Photo",
                        FileUpload { on_upload: on_upload }
                    }

                    Step { number: 2, title: "Choose a Camera Angle",
                        div { class: "angle-grid",
                            for a in CameraAngle::ALL {
                                button {
                                    class: if angle() == a { "angle-button selected" } else { "angle-button" },
                                    onclick: move |_| angle.set(a),
                                    {angle_icon(a)}
                                    span { class: "angle-name", "{a.label()}" }
                                }
                            }
                        }
                    }

                    Step { number: 3, title: "Add a Creative Touch",
                        textarea {
                            class: "prompt-input",
                            value: "{style_prompt}",
                            placeholder: "e.g., 'Make it look like it's on a rustic wooden table' or 'Add cinematic lighting'",
                            aria_label: "Creative prompt for image generation",
                            oninput: move |evt| style_prompt.set(evt.value()),
                        }
                        p { class: "preset-hint", "Or start with a Style Idea:" }
                        div { class: "preset-row",
                            for (name, preset) in STYLE_PRESETS {
                                button {
                                    class: "preset-chip",
                                    onclick: move |_| {
                                        let next = append_preset(&style_prompt.peek(), preset);
                                        style_prompt.set(next);
                                    },
                                    "{name}"
                                }
                            }
                        }
                    }

                    button {
                        class: "btn btn-primary btn-generate",
                        disabled: generate_disabled,
                        onclick: on_generate,
                        if studio_state.is_pending() { "Generating..." } else { "Generate Studio Shot" }
                    }
                }

                // Output panel
                div { class: "panel",
                    h2 { class: "panel-title", "Result" }

                    ResultDisplay {
                        studio_pending: studio_state.is_pending(),
                        text_pending: overlay_state.is_pending(),
                        original: original(),
                        studio: studio_state.ready().cloned(),
                        final_shot: overlay_state.ready().cloned(),
                    }

                    if show_promo_form && !studio_state.is_pending() {
                        div { class: "promo-section",
                            Step { number: 4, title: "Add Promotional Text",
                                input {
                                    r#type: "text",
                                    class: "promo-input",
                                    value: "{promo_headline}",
                                    placeholder: "Headline (e.g., 'Bakso Special')",
                                    oninput: move |evt| promo_headline.set(evt.value()),
                                }
                                input {
                                    r#type: "text",
                                    class: "promo-input",
                                    value: "{promo_details}",
                                    placeholder: "Details (e.g., 'Isi 20 Pcs')",
                                    oninput: move |evt| promo_details.set(evt.value()),
                                }
                                textarea {
                                    class: "prompt-input",
                                    value: "{promo_style}",
                                    placeholder: "Describe the text style... e.g., 'Bold yellow text with a thin black outline at the top'",
                                    oninput: move |evt| promo_style.set(evt.value()),
                                }
                                p { class: "preset-hint", "Or start with a Text Style Idea:" }
                                div { class: "preset-row",
                                    for (name, preset) in TEXT_STYLE_PRESETS {
                                        button {
                                            class: "preset-chip",
                                            onclick: move |_| {
                                                let next = append_preset(&promo_style.peek(), preset);
                                                promo_style.set(next);
                                            },
                                            "{name}"
                                        }
                                    }
                                }
                                button {
                                    class: "btn btn-success btn-generate",
                                    disabled: add_text_disabled,
                                    onclick: on_add_text,
                                    if overlay_state.is_pending() { "Designing..." } else { "Add Text to Image" }
                                }
                            }
                        }
                    }

                    if let Some(ref err) = error_message {
                        div { class: "error-banner", role: "alert",
                            p { "{err}" }
                        }
                    }
                }
            }

            footer { class: "app-footer",
                p { "Powered by Gemini. Created by Foodio." }
            }
        }
    }
}

/// Props for the [`Step`] section wrapper.
#[derive(Props, Clone, PartialEq)]
struct StepProps {
    /// Step number shown in the badge.
    number: u8,
    /// Section heading.
    title: String,
    children: Element,
}

/// Numbered section wrapper used by both panels.
#[component]
fn Step(props: StepProps) -> Element {
    rsx! {
        section { class: "step",
            div { class: "step-header",
                span { class: "step-number", "{props.number}" }
                h2 { class: "step-title", "{props.title}" }
            }
            div { class: "step-body", {props.children} }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn append_preset_starts_clean() {
        assert_eq!(append_preset("", "Cinematic lighting"), "Cinematic lighting");
    }

    #[test]
    fn append_preset_joins_with_comma() {
        assert_eq!(
            append_preset("Dark and moody", "soft light"),
            "Dark and moody, soft light"
        );
    }

    #[test]
    fn new_studio_request_invalidates_prior_overlay() {
        let mut studio = ActionState::Ready("old-shot");
        let mut overlay = ActionState::Ready("old-promo");
        begin_studio_request(&mut studio, &mut overlay);
        assert!(studio.is_pending());
        assert_eq!(overlay, ActionState::Idle);
    }

    #[test]
    fn new_studio_request_clears_a_failed_overlay_too() {
        let mut studio = ActionState::<&str>::Idle;
        let mut overlay = ActionState::Failed("Failed to add text.".into());
        begin_studio_request(&mut studio, &mut overlay);
        assert!(studio.is_pending());
        assert!(overlay.error().is_none());
    }

    #[test]
    fn angle_glyphs_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for angle in CameraAngle::ALL {
            assert!(seen.insert(angle_icon_path(angle)));
        }
    }

    #[test]
    fn preset_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (name, _) in STYLE_PRESETS {
            assert!(seen.insert(name), "duplicate style preset: {name}");
        }
        for (name, _) in TEXT_STYLE_PRESETS {
            assert!(seen.insert(name), "duplicate text preset: {name}");
        }
    }
}
