//! One-shot reveal tracking.
//!
//! A section starts hidden and becomes visible the first time it scrolls
//! far enough into the viewport. After that the section is unwatched and
//! no further samples are looked at.

/// Thresholds used across the page.
pub const SECTION_THRESHOLD: f64 = 0.12;
pub const GALLERY_THRESHOLD: f64 = 0.2;

// Browsers may report the crossing ratio slightly under the configured value.
const RATIO_TOLERANCE: f64 = 0.01;

/// Transition delay for the `index`-th card of a staggered group.
pub fn stagger_delay_secs(base: f64, step: f64, index: usize) -> f64 {
    base + step * index as f64
}

/// Something that can report when a node enters the viewport.
pub trait ViewportObserver {
    type Node;

    fn watch(&mut self, node: &Self::Node);
    fn unwatch(&mut self, node: &Self::Node);
    fn disconnect(&mut self);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityState {
    visible: bool,
}

impl VisibilityState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns true only on the false -> true transition.
    pub fn reveal(&mut self) -> bool {
        let changed = !self.visible;
        self.visible = true;
        changed
    }
}

/// A single intersection report for a watched node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

pub struct RevealTracker<O: ViewportObserver> {
    threshold: f64,
    state: VisibilityState,
    observer: Option<O>,
    node: Option<O::Node>,
}

impl<O: ViewportObserver> RevealTracker<O> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: VisibilityState::default(),
            observer: None,
            node: None,
        }
    }

    /// Tracker for contexts with nothing to observe against: visible from
    /// the start.
    pub fn without_viewport(threshold: f64) -> Self {
        let mut tracker = Self::new(threshold);
        tracker.state.reveal();
        tracker
    }

    pub fn observe(&mut self, mut observer: O, node: O::Node) {
        if self.state.is_visible() {
            return;
        }
        observer.watch(&node);
        self.observer = Some(observer);
        self.node = Some(node);
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn is_watching(&self) -> bool {
        self.node.is_some()
    }

    /// Feeds one sample. Returns true when this sample revealed the section.
    pub fn handle(&mut self, sample: IntersectionSample) -> bool {
        if self.state.is_visible() || !self.is_watching() {
            return false;
        }
        if !sample.is_intersecting || sample.ratio + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        self.stop_watching();
        self.state.reveal()
    }

    /// Releases the observer. Called when the owning section is torn down.
    pub fn teardown(&mut self) {
        self.stop_watching();
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
    }

    fn stop_watching(&mut self) {
        if let (Some(observer), Some(node)) = (self.observer.as_mut(), self.node.take()) {
            observer.unwatch(&node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, PartialEq)]
    enum Call {
        Watch(u32),
        Unwatch(u32),
        Disconnect,
    }

    struct FakeObserver {
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl ViewportObserver for FakeObserver {
        type Node = u32;

        fn watch(&mut self, node: &u32) {
            self.calls.borrow_mut().push(Call::Watch(*node));
        }

        fn unwatch(&mut self, node: &u32) {
            self.calls.borrow_mut().push(Call::Unwatch(*node));
        }

        fn disconnect(&mut self) {
            self.calls.borrow_mut().push(Call::Disconnect);
        }
    }

    fn tracker_with_log(threshold: f64) -> (RevealTracker<FakeObserver>, Rc<RefCell<Vec<Call>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut tracker = RevealTracker::new(threshold);
        tracker.observe(FakeObserver { calls: calls.clone() }, 7);
        (tracker, calls)
    }

    fn hit(ratio: f64) -> IntersectionSample {
        IntersectionSample { is_intersecting: true, ratio }
    }

    #[test]
    fn reveals_once_then_unwatches() {
        let (mut tracker, calls) = tracker_with_log(SECTION_THRESHOLD);
        assert!(!tracker.is_visible());
        assert!(tracker.handle(hit(0.5)));
        assert!(tracker.is_visible());
        assert!(!tracker.is_watching());
        assert!(!tracker.handle(hit(0.9)));
        assert!(!tracker.handle(IntersectionSample { is_intersecting: false, ratio: 0.0 }));
        assert!(tracker.is_visible());
        assert_eq!(*calls.borrow(), vec![Call::Watch(7), Call::Unwatch(7)]);
    }

    #[test]
    fn ignores_samples_below_threshold() {
        let (mut tracker, _) = tracker_with_log(0.3);
        assert!(!tracker.handle(hit(0.1)));
        assert!(!tracker.handle(IntersectionSample { is_intersecting: false, ratio: 0.5 }));
        assert!(!tracker.is_visible());
        assert!(tracker.handle(hit(0.295)));
    }

    #[test]
    fn teardown_releases_observer() {
        let (mut tracker, calls) = tracker_with_log(GALLERY_THRESHOLD);
        tracker.teardown();
        assert_eq!(*calls.borrow(), vec![Call::Watch(7), Call::Unwatch(7), Call::Disconnect]);
        assert!(!tracker.handle(hit(1.0)));
        assert!(!tracker.is_visible());
    }

    #[test]
    fn teardown_after_reveal_only_disconnects() {
        let (mut tracker, calls) = tracker_with_log(SECTION_THRESHOLD);
        tracker.handle(hit(1.0));
        tracker.teardown();
        assert_eq!(*calls.borrow(), vec![Call::Watch(7), Call::Unwatch(7), Call::Disconnect]);
    }

    #[test]
    fn no_viewport_means_visible() {
        let tracker: RevealTracker<FakeObserver> = RevealTracker::without_viewport(SECTION_THRESHOLD);
        assert!(tracker.is_visible());
        assert!(!tracker.is_watching());
    }

    #[test]
    fn stagger_grows_linearly() {
        assert_eq!(stagger_delay_secs(0.5, 0.1, 0), 0.5);
        assert!((stagger_delay_secs(0.5, 0.1, 3) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn visibility_state_is_monotonic() {
        let mut state = VisibilityState::default();
        assert!(state.reveal());
        assert!(!state.reveal());
        assert!(state.is_visible());
    }
}
