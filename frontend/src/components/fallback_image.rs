use std::rc::Rc;

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

/// Something that reports whether an image finished loading.
pub trait ImageLoader {
    /// Whatever the caller has to hold on to (or wire up) to receive
    /// notifications.
    type Guard;

    fn watch(&self, on_outcome: Callback<LoadOutcome>) -> Self::Guard;
}

/// Handlers to put on the `<img>` itself as `onload`/`onerror`, so they are
/// in place before the browser can finish the request.
#[derive(Clone, PartialEq)]
pub struct ImgHandlers {
    pub on_load: Callback<()>,
    pub on_error: Callback<()>,
}

impl ImgHandlers {
    pub fn onload(&self) -> Callback<Event> {
        self.on_load.reform(|_: Event| ())
    }

    pub fn onerror(&self) -> Callback<Event> {
        self.on_error.reform(|_: Event| ())
    }
}

/// Loader backed by the element's own load/error events. Only a reported
/// `error` counts as a failure.
pub struct ImgEventLoader;

impl ImageLoader for ImgEventLoader {
    type Guard = ImgHandlers;

    fn watch(&self, on_outcome: Callback<LoadOutcome>) -> ImgHandlers {
        ImgHandlers {
            on_load: on_outcome.reform(|()| LoadOutcome::Loaded),
            on_error: on_outcome.reform(|()| LoadOutcome::Failed),
        }
    }
}

/// One-shot failure flag. Once an image failed it stays failed, even if a
/// later load event shows up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FallbackState {
    has_failed: bool,
}

impl FallbackState {
    pub fn has_failed(&self) -> bool {
        self.has_failed
    }

    pub fn record(&mut self, outcome: LoadOutcome) {
        if outcome == LoadOutcome::Failed {
            self.has_failed = true;
        }
    }

    pub fn shows_image(&self, has_src: bool) -> bool {
        has_src && !self.has_failed
    }
}

impl Reducible for FallbackState {
    type Action = LoadOutcome;

    fn reduce(self: Rc<Self>, outcome: LoadOutcome) -> Rc<Self> {
        let mut next = *self;
        next.record(outcome);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// First character of each whitespace-separated token.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect()
}

/// Failure flag for one image plus the handlers that feed it.
#[hook]
pub fn use_image_fallback() -> (bool, Rc<ImgHandlers>) {
    let state = use_reducer(FallbackState::default);
    let handlers = {
        let dispatcher = state.dispatcher();
        use_memo(
            move |_| ImgEventLoader.watch(Callback::from(move |outcome| dispatcher.dispatch(outcome))),
            (),
        )
    };

    (state.has_failed(), handlers)
}

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    #[prop_or_default]
    pub src: Option<AttrValue>,
    pub alt: AttrValue,
    pub fallback: AttrValue,
}

/// Round 56px avatar that falls back to an initials badge.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let (has_failed, handlers) = use_image_fallback();
    let state = FallbackState { has_failed };

    html! {
        <div class="avatar-badge">
            {
                match &props.src {
                    Some(src) if state.shows_image(true) => html! {
                        <img
                            src={src.clone()}
                            alt={props.alt.clone()}
                            width="56"
                            height="56"
                            onload={handlers.onload()}
                            onerror={handlers.onerror()}
                        />
                    },
                    _ => html! {
                        <span class="avatar-initials">{props.fallback.clone()}</span>
                    },
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LogoMarkProps {
    pub src: AttrValue,
    pub alt: AttrValue,
}

/// Header logo. A broken logo disappears; the brand name next to it stays.
#[function_component(LogoMark)]
pub fn logo_mark(props: &LogoMarkProps) -> Html {
    let (has_failed, handlers) = use_image_fallback();

    if has_failed {
        return html! {};
    }

    html! {
        <img
            class="logo-mark"
            src={props.src.clone()}
            alt={props.alt.clone()}
            width="34"
            height="34"
            onload={handlers.onload()}
            onerror={handlers.onerror()}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Loader whose outcome the test decides.
    #[derive(Default)]
    struct FakeLoader {
        listener: RefCell<Option<Callback<LoadOutcome>>>,
    }

    impl FakeLoader {
        fn finish(&self, outcome: LoadOutcome) {
            if let Some(cb) = self.listener.borrow().as_ref() {
                cb.emit(outcome);
            }
        }
    }

    impl ImageLoader for FakeLoader {
        type Guard = ();

        fn watch(&self, on_outcome: Callback<LoadOutcome>) {
            *self.listener.borrow_mut() = Some(on_outcome);
        }
    }

    fn watched(loader: &FakeLoader) -> Rc<RefCell<FallbackState>> {
        let state = Rc::new(RefCell::new(FallbackState::default()));
        let sink = state.clone();
        loader.watch(Callback::from(move |outcome| sink.borrow_mut().record(outcome)));
        state
    }

    #[test]
    fn initials_take_first_char_of_each_token() {
        assert_eq!(initials("Sarah K."), "SK");
        assert_eq!(initials("  Brian   M. "), "BM");
        assert_eq!(initials("Aisha"), "A");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn successful_load_keeps_image() {
        let loader = FakeLoader::default();
        let state = watched(&loader);
        loader.finish(LoadOutcome::Loaded);
        assert!(state.borrow().shows_image(true));
    }

    #[test]
    fn failure_switches_to_badge_for_good() {
        let loader = FakeLoader::default();
        let state = watched(&loader);

        loader.finish(LoadOutcome::Failed);
        assert!(state.borrow().has_failed());
        assert!(!state.borrow().shows_image(true));

        loader.finish(LoadOutcome::Loaded);
        loader.finish(LoadOutcome::Loaded);
        assert!(!state.borrow().shows_image(true));
    }

    #[test]
    fn only_a_reported_error_triggers_fallback() {
        let state = Rc::new(RefCell::new(FallbackState::default()));
        let handlers = {
            let sink = state.clone();
            ImgEventLoader.watch(Callback::from(move |outcome| sink.borrow_mut().record(outcome)))
        };

        // A cached image that loads before anything else happens.
        handlers.on_load.emit(());
        handlers.on_load.emit(());
        assert!(!state.borrow().has_failed());
        assert!(state.borrow().shows_image(true));

        handlers.on_error.emit(());
        assert!(state.borrow().has_failed());
        handlers.on_load.emit(());
        assert!(!state.borrow().shows_image(true));
    }

    #[test]
    fn missing_source_renders_badge() {
        assert!(!FallbackState::default().shows_image(false));
    }

    #[test]
    fn reducer_is_monotonic() {
        let fresh = Rc::new(FallbackState::default());
        let loaded = fresh.clone().reduce(LoadOutcome::Loaded);
        assert!(Rc::ptr_eq(&fresh, &loaded));

        let failed = loaded.reduce(LoadOutcome::Failed);
        assert!(failed.has_failed());
        let again = failed.clone().reduce(LoadOutcome::Loaded);
        assert!(Rc::ptr_eq(&failed, &again));
    }
}
