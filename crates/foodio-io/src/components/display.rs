//! Result panel: loading skeleton, placeholder, comparison, downloads.
//!
//! Dispatches between three mutually exclusive views: a pulsing
//! skeleton with rotating status messages while a request is in flight,
//! a placeholder before any result exists, and the before/after
//! comparison once one does.

use std::rc::Rc;

use dioxus::prelude::*;

use super::compare::CompareSlider;
use crate::download;
use crate::preview::ImagePayload;

/// Status messages rotated while the studio re-shoot is in flight.
const IMAGE_LOADING_MESSAGES: &[&str] = &[
    "Preparing the digital studio...",
    "Sourcing the freshest pixels...",
    "Adjusting the virtual lighting...",
    "Adding a dash of AI magic...",
    "Developing the final shot...",
];

/// Status messages rotated while the text overlay is in flight.
const TEXT_LOADING_MESSAGES: &[&str] = &[
    "Hiring an AI graphic designer...",
    "Choosing the perfect typography...",
    "Finding the best text placement...",
    "Applying the design...",
    "Finalizing the promotional image...",
];

/// Interval between loading-message rotations.
const MESSAGE_ROTATION_MS: u32 = 2_500;

/// Fixed suggested filename for the studio shot download.
const STUDIO_FILENAME: &str = "foodio-shot.png";

/// Fixed suggested filename for the promotional shot download.
const PROMO_FILENAME: &str = "foodio-promo.png";

/// The before/after pair to compare, with overlay labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ComparePair<'a> {
    before: &'a str,
    after: &'a str,
    before_label: &'static str,
    after_label: &'static str,
}

/// Choose which two images to compare.
///
/// Once a final (text-overlaid) shot exists, it is compared against the
/// studio shot; otherwise the studio shot is compared against the
/// original upload. `None` means there is nothing to compare yet.
fn choose_pair<'a>(
    original: Option<&'a str>,
    studio: Option<&'a str>,
    final_shot: Option<&'a str>,
) -> Option<ComparePair<'a>> {
    if let Some(after) = final_shot {
        let before = studio?;
        return Some(ComparePair {
            before,
            after,
            before_label: "STUDIO SHOT",
            after_label: "WITH TEXT",
        });
    }
    let after = studio?;
    let before = original?;
    Some(ComparePair {
        before,
        after,
        before_label: "ORIGINAL",
        after_label: "STUDIO SHOT",
    })
}

/// Props for the [`ResultDisplay`] component.
#[derive(Props, Clone)]
pub struct ResultDisplayProps {
    /// Whether the studio re-shoot request is in flight.
    pub studio_pending: bool,
    /// Whether the text-overlay request is in flight.
    pub text_pending: bool,
    /// The uploaded photo, if any.
    pub original: Option<Rc<ImagePayload>>,
    /// The studio re-shoot result, if any.
    pub studio: Option<Rc<ImagePayload>>,
    /// The text-overlaid result, if any.
    pub final_shot: Option<Rc<ImagePayload>>,
}

impl PartialEq for ResultDisplayProps {
    fn eq(&self, other: &Self) -> bool {
        fn rc_eq(a: &Option<Rc<ImagePayload>>, b: &Option<Rc<ImagePayload>>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
        }
        self.studio_pending == other.studio_pending
            && self.text_pending == other.text_pending
            && rc_eq(&self.original, &other.original)
            && rc_eq(&self.studio, &other.studio)
            && rc_eq(&self.final_shot, &other.final_shot)
    }
}

/// Result panel for the generated images.
#[component]
pub fn ResultDisplay(props: ResultDisplayProps) -> Element {
    // Hook order must not depend on the view dispatched below.
    let mut download_error = use_signal(|| Option::<String>::None);

    if props.studio_pending || props.text_pending {
        return rsx! {
            LoadingSkeleton { text_mode: props.text_pending }
        };
    }

    let original = props.original.as_ref().map(|p| p.uri.as_str());
    let studio = props.studio.as_ref().map(|p| p.uri.as_str());
    let final_shot = props.final_shot.as_ref().map(|p| p.uri.as_str());

    let Some(pair) = choose_pair(original, studio, final_shot) else {
        return rsx! {
            Placeholder {}
        };
    };

    let studio_click = {
        let studio = props.studio.clone();
        move |_| {
            if let Some(ref img) = studio {
                match download::trigger_download(&img.bytes, STUDIO_FILENAME, img.format.mime_type())
                {
                    Ok(()) => download_error.set(None),
                    Err(e) => download_error.set(Some(format!("Download failed: {e}"))),
                }
            }
        }
    };

    let promo_click = {
        let final_shot = props.final_shot.clone();
        move |_| {
            if let Some(ref img) = final_shot {
                match download::trigger_download(&img.bytes, PROMO_FILENAME, img.format.mime_type())
                {
                    Ok(()) => download_error.set(None),
                    Err(e) => download_error.set(Some(format!("Download failed: {e}"))),
                }
            }
        }
    };

    let has_final = props.final_shot.is_some();

    rsx! {
        div { class: "result-stack",
            CompareSlider {
                before: pair.before.to_owned(),
                after: pair.after.to_owned(),
                before_label: pair.before_label.to_owned(),
                after_label: pair.after_label.to_owned(),
            }

            if let Some(ref err) = download_error() {
                p { class: "download-error", "{err}" }
            }

            div { class: "download-row",
                button {
                    class: "btn btn-secondary",
                    onclick: studio_click,
                    {download_icon()}
                    if has_final { "Studio Shot" } else { "Download Shot" }
                }
                if has_final {
                    button {
                        class: "btn btn-success",
                        onclick: promo_click,
                        {download_icon()}
                        "Promo (With Text)"
                    }
                }
            }
        }
    }
}

/// Props for the [`LoadingSkeleton`] component.
#[derive(Props, Clone, PartialEq)]
struct LoadingSkeletonProps {
    /// Show the text-overlay message set instead of the re-shoot set.
    text_mode: bool,
}

/// Pulsing placeholder with a rotating status message.
#[component]
fn LoadingSkeleton(props: LoadingSkeletonProps) -> Element {
    let mut tick = use_signal(|| 0usize);

    // Rotate the message on a fixed interval. The task is scoped to the
    // component and cancelled on unmount.
    use_future(move || async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(MESSAGE_ROTATION_MS).await;
            tick += 1;
        }
    });

    let messages = if props.text_mode {
        TEXT_LOADING_MESSAGES
    } else {
        IMAGE_LOADING_MESSAGES
    };
    let message = messages
        .get(tick() % messages.len())
        .copied()
        .unwrap_or_default();

    rsx! {
        div { class: "loading-skeleton",
            {sparkles_icon()}
            p { class: "loading-message", "{message}" }
        }
    }
}

/// Empty-state panel shown before any result exists.
#[component]
fn Placeholder() -> Element {
    rsx! {
        div { class: "result-placeholder",
            {brand_icon()}
            p { class: "placeholder-title", "Your masterpiece awaits" }
            p { class: "placeholder-hint", "The generated photo will appear here." }
        }
    }
}

/// Brand mark (a plated-dish sun) shown in the empty-state placeholder.
/// The loading skeleton uses the sparkles icon instead.
fn brand_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            class: "placeholder-icon placeholder-brand",
            circle { cx: "12", cy: "12", r: "10" }
            path { stroke_linecap: "round", d: "M15 9.5a4.5 4.5 0 0 1-2.062 3.876" }
            path { stroke_linecap: "round", d: "M14 15.5a4.47 4.47 0 0 1-2 1" }
            path { stroke_linecap: "round", d: "M10 16.5a4.5 4.5 0 0 1-1.938-8.624" }
            path { stroke_linecap: "round", d: "M12 2v2" }
            path { stroke_linecap: "round", d: "M12 20v2" }
            path { stroke_linecap: "round", d: "m4.93 4.93 1.41 1.41" }
            path { stroke_linecap: "round", d: "m17.66 17.66 1.41 1.41" }
            path { stroke_linecap: "round", d: "M2 12h2" }
            path { stroke_linecap: "round", d: "M20 12h2" }
            path { stroke_linecap: "round", d: "m4.93 19.07 1.41-1.41" }
            path { stroke_linecap: "round", d: "m17.66 6.34 1.41-1.41" }
            path { fill: "currentColor", d: "M12 12.5a1 1 0 1 0 0-2 1 1 0 0 0 0 2Z" }
            path { stroke_linecap: "round", d: "M12 12.5v-3" }
            path { stroke_linecap: "round", d: "M9.5 8a1 1 0 0 1-1-1V5" }
        }
    }
}

/// Small download-arrow icon used on the download buttons.
fn download_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            class: "btn-icon",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: "M3 16.5v2.25A2.25 2.25 0 0 0 5.25 21h13.5A2.25 2.25 0 0 0 21 18.75V16.5M16.5 12 12 16.5m0 0L7.5 12m4.5 4.5V3",
            }
        }
    }
}

/// Sparkles icon shown while a request is in flight.
fn sparkles_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            class: "placeholder-icon",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: "M9.813 15.904 9 18.75l-.813-2.846a4.5 4.5 0 0 0-3.09-3.09L2.25 12l2.846-.813a4.5 4.5 0 0 0 3.09-3.09L9 5.25l.813 2.846a4.5 4.5 0 0 0 3.09 3.09L15.75 12l-2.846.813a4.5 4.5 0 0 0-3.09 3.09ZM18.259 8.715 18 9.75l-.259-1.035a3.375 3.375 0 0 0-2.455-2.456L14.25 6l1.036-.259a3.375 3.375 0 0 0 2.455-2.456L18 2.25l.259 1.035a3.375 3.375 0 0 0 2.456 2.456L21.75 6l-1.035.259a3.375 3.375 0 0 0-2.456 2.456Z",
            }
        }
    }
}
