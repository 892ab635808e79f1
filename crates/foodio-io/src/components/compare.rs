//! Before/after image comparison slider.
//!
//! Renders two stacked images clipped at a draggable vertical boundary.
//! The region left of the boundary shows the "before" image, the region
//! right of it the "after" image. The boundary is a percentage of the
//! container width, clamped to [0, 100].
//!
//! Dragging arms on pointer-down; while armed, window-level
//! pointermove/pointerup/pointercancel listeners are held as RAII
//! [`EventListener`] guards and dropped on disarm and on component
//! teardown, so no global listener can outlive the widget. Pointer
//! events cover mouse and touch alike. No inertia, snapping, or
//! keyboard control.

use dioxus::prelude::*;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;

/// DOM id of the slider container, used to read its bounding box from
/// window-level pointer handlers. The app renders at most one slider.
const CONTAINER_ID: &str = "compare-slider";

/// Compute the boundary percentage for a pointer position.
///
/// `client_x` is the pointer's viewport X coordinate; `rect_left` and
/// `rect_width` come from the container's bounding box. The result is
/// clamped to [0, 100] regardless of pointer positions outside the
/// container. A degenerate (zero or negative width) container yields 0.
#[must_use]
pub fn boundary_percent(client_x: f64, rect_left: f64, rect_width: f64) -> f64 {
    if rect_width <= 0.0 {
        return 0.0;
    }
    ((client_x - rect_left) / rect_width * 100.0).clamp(0.0, 100.0)
}

/// Read the slider container's bounding box from the DOM.
fn container_rect() -> Option<web_sys::DomRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONTAINER_ID)?;
    Some(element.get_bounding_client_rect())
}

/// Props for the [`CompareSlider`] component.
#[derive(Props, Clone, PartialEq)]
pub struct CompareSliderProps {
    /// Image shown left of the boundary (`data:` or object URI).
    pub before: String,
    /// Image shown right of the boundary.
    pub after: String,
    /// Label overlaid on the before side.
    pub before_label: String,
    /// Label overlaid on the after side.
    pub after_label: String,
}

/// Drag-controlled before/after comparison of two same-content images.
#[component]
pub fn CompareSlider(props: CompareSliderProps) -> Element {
    let mut position = use_signal(|| 50.0f64);
    let mut dragging = use_signal(|| false);
    // RAII guards for the window-level listeners; emptying the Vec
    // removes the listeners.
    let mut listeners: Signal<Vec<EventListener>> = use_signal(Vec::new);

    // Reset the boundary when the compared pair changes (e.g. the text
    // overlay replaces the studio comparison). The guard makes this
    // render-time write converge on the second pass.
    let pair = (props.before.clone(), props.after.clone());
    let mut last_pair = use_signal(|| pair.clone());
    if *last_pair.peek() != pair {
        last_pair.set(pair);
        position.set(50.0);
        dragging.set(false);
    }

    // Acquire the global listeners while armed, release them on disarm.
    use_effect(move || {
        if dragging() {
            let Some(window) = web_sys::window() else {
                return;
            };

            let on_move = EventListener::new(&window, "pointermove", move |event| {
                let Some(event) = event.dyn_ref::<web_sys::PointerEvent>() else {
                    return;
                };
                if let Some(rect) = container_rect() {
                    position.set(boundary_percent(
                        f64::from(event.client_x()),
                        rect.left(),
                        rect.width(),
                    ));
                }
            });

            // Disarm via the signal; the effect re-runs and drops the
            // listeners outside of their own callbacks.
            let on_up = EventListener::new(&window, "pointerup", move |_| {
                dragging.set(false);
            });
            let on_cancel = EventListener::new(&window, "pointercancel", move |_| {
                dragging.set(false);
            });

            listeners.set(vec![on_move, on_up, on_cancel]);
        } else {
            listeners.write().clear();
        }
    });

    // Release on teardown even if a drag is still in progress.
    use_drop(move || {
        listeners.write().clear();
    });

    let pct = position();

    rsx! {
        div {
            id: CONTAINER_ID,
            class: "compare-container",
            onpointerdown: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },

            img {
                src: "{props.after}",
                class: "compare-image",
                alt: "{props.after_label}",
                draggable: "false",
            }

            // The before image sits on top, clipped to the left of the
            // boundary.
            div {
                class: "compare-clip",
                style: "clip-path: polygon(0 0, {pct}% 0, {pct}% 100%, 0 100%);",
                img {
                    src: "{props.before}",
                    class: "compare-image",
                    alt: "{props.before_label}",
                    draggable: "false",
                }
            }

            // Boundary line and grip.
            div {
                class: "compare-handle",
                style: "left: calc({pct}% - 1px);",
                div { class: "compare-grip",
                    svg {
                        xmlns: "http://www.w3.org/2000/svg",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        class: "compare-grip-icon",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            d: "M7.5 21 3 16.5m0 0L7.5 12M3 16.5h13.5m0-13.5L21 7.5m0 0L16.5 12M21 7.5H7.5",
                        }
                    }
                }
            }

            span { class: "compare-label compare-label-left", "{props.before_label}" }
            span { class: "compare-label compare-label-right", "{props.after_label}" }
        }
    }
}
