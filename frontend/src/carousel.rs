use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

pub const SLIDE_INTERVAL_MS: u32 = 8_000;

/// Position within a fixed-length slide sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideIndex {
    current: usize,
    len: usize,
}

impl SlideIndex {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn advance(self) -> Self {
        let current = if self.len == 0 {
            0
        } else {
            (self.current + 1) % self.len
        };
        Self { current, ..self }
    }

    /// Same position against a new sequence length, wrapped if it no
    /// longer fits.
    pub fn resize(self, len: usize) -> Self {
        let current = if len == 0 { 0 } else { self.current % len };
        Self { current, len }
    }
}

pub enum SlideAction {
    Advance,
    Resize(usize),
}

impl Reducible for SlideIndex {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: SlideAction) -> Rc<Self> {
        match action {
            SlideAction::Advance => Rc::new(self.advance()),
            SlideAction::Resize(len) if len == self.len => self,
            SlideAction::Resize(len) => Rc::new(self.resize(len)),
        }
    }
}

/// Source of periodic ticks. Dropping the returned handle stops the ticks.
pub trait Ticker {
    type Handle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser timer backed by `setInterval`.
pub struct IntervalTicker;

impl Ticker for IntervalTicker {
    type Handle = Interval;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, tick)
    }
}

pub fn start_rotation<T, F>(ticker: &T, period_ms: u32, advance: F) -> T::Handle
where
    T: Ticker,
    F: Fn() + 'static,
{
    ticker.every(period_ms, Box::new(move || advance()))
}

/// Current slide for a sequence of `len` slides, advancing every
/// `SLIDE_INTERVAL_MS`. The interval is cancelled when the component unmounts.
#[hook]
pub fn use_slide_index(len: usize) -> usize {
    let index = use_reducer(move || SlideIndex::new(len));

    {
        let dispatcher = index.dispatcher();
        use_effect_with_deps(
            move |len: &usize| {
                dispatcher.dispatch(SlideAction::Resize(*len));
                let interval = start_rotation(&IntervalTicker, SLIDE_INTERVAL_MS, move || {
                    dispatcher.dispatch(SlideAction::Advance)
                });
                move || drop(interval)
            },
            len,
        );
    }

    index.current()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct Timer {
        period_ms: u32,
        elapsed_ms: u32,
        tick: Box<dyn FnMut()>,
        alive: Rc<Cell<bool>>,
    }

    /// Deterministic clock; ticks only when `advance` is called.
    #[derive(Default)]
    struct ManualTicker {
        timers: RefCell<Vec<Timer>>,
    }

    struct ManualHandle {
        alive: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.alive.set(false);
        }
    }

    impl Ticker for ManualTicker {
        type Handle = ManualHandle;

        fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> ManualHandle {
            let alive = Rc::new(Cell::new(true));
            self.timers.borrow_mut().push(Timer {
                period_ms,
                elapsed_ms: 0,
                tick,
                alive: alive.clone(),
            });
            ManualHandle { alive }
        }
    }

    impl ManualTicker {
        fn advance(&self, ms: u32) {
            let mut timers = self.timers.borrow_mut();
            timers.retain(|t| t.alive.get());
            for timer in timers.iter_mut() {
                timer.elapsed_ms += ms;
                while timer.elapsed_ms >= timer.period_ms {
                    timer.elapsed_ms -= timer.period_ms;
                    (timer.tick)();
                }
            }
        }
    }

    fn rotating(ticker: &ManualTicker, len: usize) -> (Rc<Cell<SlideIndex>>, ManualHandle) {
        let state = Rc::new(Cell::new(SlideIndex::new(len)));
        let handle = {
            let state = state.clone();
            start_rotation(ticker, SLIDE_INTERVAL_MS, move || state.set(state.get().advance()))
        };
        (state, handle)
    }

    #[test]
    fn advance_wraps() {
        let mut index = SlideIndex::new(3);
        let mut seen = Vec::new();
        for _ in 0..4 {
            index = index.advance();
            seen.push(index.current());
        }
        assert_eq!(seen, vec![1, 2, 0, 1]);
    }

    #[test]
    fn single_slide_stays_put() {
        let index = SlideIndex::new(1).advance().advance();
        assert_eq!(index.current(), 0);
    }

    #[test]
    fn empty_sequence_does_not_panic() {
        assert_eq!(SlideIndex::new(0).advance().current(), 0);
    }

    #[test]
    fn reducer_advances() {
        let index = Rc::new(SlideIndex::new(2)).reduce(SlideAction::Advance);
        assert_eq!(index.current(), 1);
    }

    #[test]
    fn resize_wraps_with_the_new_length() {
        let index = Rc::new(SlideIndex::new(3))
            .reduce(SlideAction::Advance)
            .reduce(SlideAction::Advance);
        assert_eq!(index.current(), 2);

        let shrunk = index.reduce(SlideAction::Resize(2));
        assert_eq!(shrunk.current(), 0);
        let next = shrunk.reduce(SlideAction::Advance);
        assert_eq!(next.current(), 1);
        assert_eq!(next.reduce(SlideAction::Advance).current(), 0);
    }

    #[test]
    fn resize_to_same_length_keeps_state() {
        let index = Rc::new(SlideIndex::new(3)).reduce(SlideAction::Advance);
        let same = index.clone().reduce(SlideAction::Resize(3));
        assert!(Rc::ptr_eq(&index, &same));
    }

    #[test]
    fn ticks_on_interval() {
        let ticker = ManualTicker::default();
        let (state, _handle) = rotating(&ticker, 3);

        ticker.advance(7_999);
        assert_eq!(state.get().current(), 0);
        ticker.advance(1);
        assert_eq!(state.get().current(), 1);
        ticker.advance(16_000);
        assert_eq!(state.get().current(), 0);
    }

    #[test]
    fn no_ticks_after_teardown() {
        let ticker = ManualTicker::default();
        let (state, handle) = rotating(&ticker, 3);

        ticker.advance(SLIDE_INTERVAL_MS);
        assert_eq!(state.get().current(), 1);

        drop(handle);
        ticker.advance(SLIDE_INTERVAL_MS * 5);
        assert_eq!(state.get().current(), 1);
    }
}
