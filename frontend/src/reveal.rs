//! Scroll-triggered, one-way reveal of a section.

use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of the element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.2;

// Browsers may report a crossing ratio a hair under the threshold.
const CROSSING_SLACK: f64 = 0.01;

const BASE_TRANSITION_MS: u32 = 450;
const STAGGER_STEP_MS: u32 = 120;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one observed intersection ratio. Returns the (possibly
    /// unchanged) revealed flag; it never goes back to false.
    pub fn observe(&mut self, ratio: f64) -> bool {
        self.observe_entry(Sighting { ratio, is_intersecting: false })
    }

    /// Like `observe`, but an entry the browser flags as intersecting also
    /// counts when its ratio is within rounding of the threshold.
    pub fn observe_entry(&mut self, sighting: Sighting) -> bool {
        let crossed = sighting.ratio >= REVEAL_THRESHOLD
            || (sighting.is_intersecting && sighting.ratio >= REVEAL_THRESHOLD - CROSSING_SLACK);
        if crossed {
            self.revealed = true;
        }
        self.revealed
    }
}

/// One observer entry, reduced to what the reveal decision needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sighting {
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl Reducible for RevealState {
    type Action = Sighting;

    fn reduce(self: Rc<Self>, sighting: Sighting) -> Rc<Self> {
        let mut next = *self;
        if next.observe_entry(sighting) == self.revealed {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Transition duration for the `index`-th sibling, so the row fades in
/// one card after another.
pub fn stagger_duration_ms(index: usize) -> u32 {
    BASE_TRANSITION_MS + STAGGER_STEP_MS * index as u32
}

pub fn reveal_classes(revealed: bool) -> &'static str {
    if revealed {
        "reveal-item revealed"
    } else {
        "reveal-item"
    }
}

/// Owns a live IntersectionObserver; dropping it disconnects.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn attach(element: &Element, on_sighting: Callback<Sighting>) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let sighting = Sighting {
                    ratio: entry.intersection_ratio(),
                    is_intersecting: entry.is_intersecting(),
                };
                on_sighting.emit(sighting);
                if RevealState::default().observe_entry(sighting) {
                    // Revealed for good; nothing left to watch.
                    observer.disconnect();
                    break;
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Returns true once the referenced element has been at least
/// `REVEAL_THRESHOLD` visible.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let state = use_reducer(RevealState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let on_sighting = Callback::from(move |sighting: Sighting| dispatcher.dispatch(sighting));
                let observer = match node.cast::<Element>() {
                    Some(element) => match RevealObserver::attach(&element, on_sighting.clone()) {
                        Ok(observer) => Some(observer),
                        Err(e) => {
                            warn!("IntersectionObserver unavailable, revealing immediately: {:?}", e);
                            on_sighting.emit(Sighting { ratio: 1.0, is_intersecting: true });
                            None
                        }
                    },
                    None => None,
                };
                move || drop(observer)
            },
            node,
        );
    }

    state.is_revealed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!RevealState::default().is_revealed());
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let mut state = RevealState::default();
        for ratio in [0.0, 0.05, 0.19] {
            assert!(!state.observe(ratio));
        }
    }

    #[test]
    fn reveal_is_one_way() {
        let mut state = RevealState::default();
        assert!(!state.observe(0.1));
        assert!(state.observe(0.2));
        for ratio in [0.0, 0.1, 0.19, 0.0] {
            assert!(state.observe(ratio));
        }
        assert!(state.is_revealed());
    }

    #[test]
    fn reducer_keeps_same_state_when_nothing_changes() {
        let hidden = Rc::new(RevealState::default());
        let still_hidden = hidden.clone().reduce(Sighting { ratio: 0.1, is_intersecting: true });
        assert!(Rc::ptr_eq(&hidden, &still_hidden));

        let shown = still_hidden.reduce(Sighting { ratio: 0.6, is_intersecting: true });
        assert!(shown.is_revealed());
        let after = shown.clone().reduce(Sighting { ratio: 0.0, is_intersecting: false });
        assert!(Rc::ptr_eq(&shown, &after));
        assert!(after.is_revealed());
    }

    #[test]
    fn intersecting_entry_just_under_threshold_reveals() {
        let mut state = RevealState::default();
        assert!(!state.observe_entry(Sighting { ratio: 0.1995, is_intersecting: false }));
        assert!(state.observe_entry(Sighting { ratio: 0.1995, is_intersecting: true }));
        assert!(state.observe_entry(Sighting { ratio: 0.0, is_intersecting: false }));
    }

    #[test]
    fn barely_visible_entry_does_not_reveal() {
        let mut state = RevealState::default();
        assert!(!state.observe_entry(Sighting { ratio: 0.05, is_intersecting: true }));
    }

    #[test]
    fn stagger_grows_per_sibling() {
        let durations: Vec<u32> = (0..3).map(stagger_duration_ms).collect();
        assert_eq!(durations, vec![450, 570, 690]);
    }

    #[test]
    fn classes_follow_state() {
        assert_eq!(reveal_classes(false), "reveal-item");
        assert_eq!(reveal_classes(true), "reveal-item revealed");
    }
}
