use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};
use yew::prelude::*;

/// Scroll distance over which the hero overlay reaches full dimming.
const DIM_DISTANCE: f64 = 500.0;
const MAX_DIM: f64 = 0.6;

/// Percentage of the scrollable page that lies above the viewport.
pub fn progress_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Last section whose top edge has passed `scroll_y + margin`.
/// `offsets` holds absolute document offsets in page order.
pub fn active_section<'a>(offsets: &[(&'a str, f64)], scroll_y: f64, margin: f64) -> Option<&'a str> {
    offsets
        .iter()
        .filter(|(_, top)| *top <= scroll_y + margin)
        .last()
        .map(|(id, _)| *id)
}

pub fn overlay_opacity(scroll_y: f64) -> f64 {
    (scroll_y / DIM_DISTANCE).clamp(0.0, 1.0) * MAX_DIM
}

/// Registers `handler` for a window event and returns the matching teardown.
pub fn listen_window(event: &'static str, handler: impl Fn(Event) + 'static) -> Box<dyn FnOnce()> {
    let Some(window) = web_sys::window() else {
        return Box::new(|| ());
    };
    let callback = Closure::<dyn Fn(Event)>::new(handler);
    if window
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .is_err()
    {
        log::debug!("could not subscribe to window {} events", event);
        return Box::new(|| ());
    }
    Box::new(move || {
        let _ = window.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
    })
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn page_progress(window: &Window) -> f64 {
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    progress_percent(window.scroll_y().unwrap_or(0.0), scroll_height, viewport)
}

fn section_offsets(window: &Window, ids: &[&'static str]) -> Vec<(&'static str, f64)> {
    let Some(document) = window.document() else {
        return Vec::new();
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    ids.iter()
        .filter_map(|id| {
            document
                .get_element_by_id(id)
                .map(|el| (*id, el.get_bounding_client_rect().top() + scroll_y))
        })
        .collect()
}

/// Current vertical scroll position, updated on every scroll event.
#[hook]
pub fn use_scroll_y() -> f64 {
    let y = use_state_eq(scroll_y);
    {
        let y = y.clone();
        use_effect_with_deps(
            move |_| {
                y.set(scroll_y());
                listen_window("scroll", move |_| y.set(scroll_y()))
            },
            (),
        );
    }
    *y
}

#[hook]
pub fn use_scroll_progress() -> f64 {
    let progress = use_state_eq(|| 0.0_f64);
    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    if let Some(window) = web_sys::window() {
                        progress.set(page_progress(&window));
                    }
                };
                update();
                listen_window("scroll", move |_| update())
            },
            (),
        );
    }
    *progress
}

/// Id of the section currently under the header, among `ids`.
#[hook]
pub fn use_active_section(ids: Vec<&'static str>, margin: f64) -> Option<&'static str> {
    let active = use_state_eq(|| None::<&'static str>);
    {
        let active = active.clone();
        use_effect_with_deps(
            move |(ids, margin)| {
                let ids = ids.clone();
                let margin = *margin;
                let update = move || {
                    if let Some(window) = web_sys::window() {
                        let offsets = section_offsets(&window, &ids);
                        let y = window.scroll_y().unwrap_or(0.0);
                        active.set(active_section(&offsets, y, margin));
                    }
                };
                update();
                listen_window("scroll", move |_| update())
            },
            (ids, margin),
        );
    }
    *active
}

pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("no section with id {}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Scroll to top only on initial mount.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}

pub fn location_hash() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    let id = hash.trim_start_matches('#');
    (!id.is_empty()).then(|| id.to_string())
}

/// After mount, brings the section named by the URL hash into view.
#[hook]
pub fn use_scroll_to_hash() {
    use_effect_with_deps(
        move |_| {
            if let Some(id) = location_hash() {
                spawn_local(async move {
                    // Let sections lay out first.
                    TimeoutFuture::new(100).await;
                    scroll_to_section(&id);
                });
            }
            || ()
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_proportional_to_scroll_position() {
        assert_eq!(progress_percent(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(500.0, 3000.0, 1000.0), 25.0);
        assert_eq!(progress_percent(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(progress_percent(2000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress_percent(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(2600.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn short_page_reports_no_progress() {
        assert_eq!(progress_percent(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(progress_percent(10.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn active_section_is_last_one_passed() {
        let offsets = [("story", 800.0), ("benefits", 1600.0), ("pricing", 3000.0)];
        assert_eq!(active_section(&offsets, 0.0, 100.0), None);
        assert_eq!(active_section(&offsets, 700.0, 100.0), Some("story"));
        assert_eq!(active_section(&offsets, 1599.0, 100.0), Some("benefits"));
        assert_eq!(active_section(&offsets, 9000.0, 100.0), Some("pricing"));
    }

    #[test]
    fn overlay_dims_up_to_a_cap() {
        assert_eq!(overlay_opacity(0.0), 0.0);
        assert!((overlay_opacity(250.0) - 0.3).abs() < 1e-9);
        assert!((overlay_opacity(5000.0) - 0.6).abs() < 1e-9);
    }
}
