use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Share of an element that has to be on screen before it counts as seen.
const VISIBLE_THRESHOLD: f64 = 0.15;

/// How many items of a list have been revealed so far.
#[derive(Clone, Debug, PartialEq)]
pub struct StagedReveal {
    pub shown: usize,
    pub total: usize,
}

pub enum RevealAction {
    Tick,
    Reset(usize),
}

impl StagedReveal {
    pub fn new(total: usize) -> Self {
        Self { shown: 0, total }
    }

    pub fn is_complete(&self) -> bool {
        self.shown >= self.total
    }
}

impl Reducible for StagedReveal {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RevealAction::Tick if self.is_complete() => self,
            RevealAction::Tick => Rc::new(StagedReveal {
                shown: self.shown + 1,
                total: self.total,
            }),
            RevealAction::Reset(total) => Rc::new(StagedReveal::new(total)),
        }
    }
}

/// Reveals `total` items one per `step_ms` once `active` turns true.
/// Returns the number of items that should currently be visible.
#[hook]
pub fn use_staged_reveal(total: usize, step_ms: u32, active: bool) -> usize {
    let state = use_reducer_eq(|| StagedReveal::new(total));

    {
        let state = state.clone();
        use_effect_with_deps(
            move |total| {
                if state.total != *total {
                    state.dispatch(RevealAction::Reset(*total));
                }
                || ()
            },
            total,
        );
    }

    {
        let state = state.clone();
        let complete = state.is_complete();
        use_effect_with_deps(
            move |(active, complete, step_ms)| {
                let interval = (*active && !*complete).then(|| {
                    Interval::new(*step_ms, move || state.dispatch(RevealAction::Tick))
                });
                move || drop(interval)
            },
            (active, complete, step_ms),
        );
    }

    state.shown
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe(
    element: &Element,
    once: bool,
    visible: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    visible.set(true);
                    if once {
                        observer.disconnect();
                    }
                } else if !once {
                    visible.set(false);
                }
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);
    Some((observer, callback))
}

/// Tracks whether the element behind `node` is in the viewport.
/// With `once` the first sighting latches and the observer is dropped.
#[hook]
pub fn use_in_view(node: NodeRef, once: bool) -> bool {
    let visible = use_state_eq(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, once)| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| observe(&element, *once, visible.clone()));
                if observer.is_none() {
                    log::debug!("intersection observer unavailable, showing content immediately");
                    visible.set(true);
                }
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (node, once),
        );
    }
    *visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_reveal_one_item_at_a_time() {
        let state = Rc::new(StagedReveal::new(3));
        let state = state.reduce(RevealAction::Tick);
        assert_eq!(state.shown, 1);
        let state = state.reduce(RevealAction::Tick);
        assert_eq!(state.shown, 2);
        assert!(!state.is_complete());
    }

    #[test]
    fn never_reveals_more_than_total() {
        let mut state = Rc::new(StagedReveal::new(2));
        for _ in 0..10 {
            state = state.reduce(RevealAction::Tick);
        }
        assert_eq!(state.shown, 2);
        assert!(state.is_complete());
    }

    #[test]
    fn reset_starts_over_with_new_total() {
        let state = Rc::new(StagedReveal::new(2))
            .reduce(RevealAction::Tick)
            .reduce(RevealAction::Reset(5));
        assert_eq!(*state, StagedReveal { shown: 0, total: 5 });
    }

    #[test]
    fn empty_list_is_complete_from_the_start() {
        assert!(StagedReveal::new(0).is_complete());
    }
}
