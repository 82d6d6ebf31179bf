//! Scroll-triggered reveal state.
//!
//! A [`RevealHandle`] tracks whether one on-screen region has entered the
//! viewport. Intersection notifications come from a host-supplied
//! [`IntersectionSource`]; the browser implementation lives in
//! `components::reveal`. The observation is held by a [`Subscription`] and
//! released when the handle is dropped.
//!
//! ```text
//!            intersecting
//!   Hidden ───────────────▶ Visible
//!      ▲                       │
//!      └───────────────────────┘
//!        left viewport (Repeat only)
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;

use super::error::AnimationParseError;
use crate::config::reveal::{DEFAULT_DELAY_MS, DEFAULT_DURATION_MS};

// =============================================================================
// State Machine
// =============================================================================

/// Visibility of a single region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    /// Not yet seen (initial)
    #[default]
    Hidden,
    /// Has intersected the viewport
    Visible,
}

/// Whether a revealed region hides again when it leaves the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealMode {
    /// Reveal on first intersection and stay visible (default)
    #[default]
    Once,
    /// Track every enter/exit so the animation replays on re-entry
    Repeat,
}

impl RevealState {
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }

    /// Apply one intersection notification.
    pub fn next(self, intersecting: bool, mode: RevealMode) -> Self {
        match (intersecting, mode) {
            (true, _) => Self::Visible,
            (false, RevealMode::Once) => self,
            (false, RevealMode::Repeat) => Self::Hidden,
        }
    }
}

// =============================================================================
// Host Interface
// =============================================================================

/// Callback receiving `true` when the region intersects the viewport by any
/// non-zero amount and `false` when it does not.
pub type IntersectionCallback = Box<dyn FnMut(bool)>;

/// Viewport-intersection primitive supplied by the host environment.
pub trait IntersectionSource {
    /// Handle to the observed region (a DOM element in the browser).
    type Region: ?Sized;

    /// Start observing `region`. Notifications stop once the returned
    /// subscription is dropped.
    fn subscribe(&self, region: &Self::Region, on_change: IntersectionCallback) -> Subscription;
}

/// Live observation. Dropping it runs the release action exactly once.
#[must_use = "dropping a Subscription stops the observation"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Subscription with nothing to release, for hosts that could not
    /// start an observation.
    pub fn detached() -> Self {
        Self { release: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Scoped reveal observation for one region.
#[derive(Debug)]
pub struct RevealHandle {
    state: Rc<Cell<RevealState>>,
    _subscription: Subscription,
}

impl RevealHandle {
    pub fn is_visible(&self) -> bool {
        self.state.get().is_visible()
    }
}

/// Observe `region` and track its reveal state.
#[allow(dead_code)]
pub fn observe<S>(source: &S, region: &S::Region, mode: RevealMode) -> RevealHandle
where
    S: IntersectionSource + ?Sized,
{
    observe_with(source, region, mode, |_| {})
}

/// Like [`observe`], additionally calling `on_change` with the new
/// visibility whenever the state actually changes.
pub fn observe_with<S, F>(source: &S, region: &S::Region, mode: RevealMode, mut on_change: F) -> RevealHandle
where
    S: IntersectionSource + ?Sized,
    F: FnMut(bool) + 'static,
{
    let state = Rc::new(Cell::new(RevealState::Hidden));
    let weak: Weak<Cell<RevealState>> = Rc::downgrade(&state);

    let subscription = source.subscribe(
        region,
        Box::new(move |intersecting| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let prev = state.get();
            let next = prev.next(intersecting, mode);
            if next != prev {
                state.set(next);
                on_change(next.is_visible());
            }
        }),
    );

    RevealHandle {
        state,
        _subscription: subscription,
    }
}

// =============================================================================
// Animation Variants
// =============================================================================

/// Entry animation applied by the reveal wrapper.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Animation {
    #[default]
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    Scale,
    Rotate,
}

impl Animation {
    pub const ALL: [Animation; 6] = [
        Self::FadeUp,
        Self::FadeDown,
        Self::FadeLeft,
        Self::FadeRight,
        Self::Scale,
        Self::Rotate,
    ];

    /// Kebab-case tag, e.g. `fade-up`.
    pub fn tag(self) -> &'static str {
        match self {
            Self::FadeUp => "fade-up",
            Self::FadeDown => "fade-down",
            Self::FadeLeft => "fade-left",
            Self::FadeRight => "fade-right",
            Self::Scale => "scale",
            Self::Rotate => "rotate",
        }
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Animation {
    type Err = AnimationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|animation| animation.tag() == s)
            .ok_or_else(|| AnimationParseError(s.to_string()))
    }
}

/// Delay and duration passed through to the animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTiming {
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl RevealTiming {
    pub fn new(delay_ms: u32, duration_ms: u32) -> Self {
        Self {
            delay_ms,
            duration_ms,
        }
    }

    /// Inline style declarations for the wrapper element.
    pub fn style(&self) -> String {
        format!(
            "animation-delay: {}ms; animation-duration: {}ms;",
            self.delay_ms, self.duration_ms
        )
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY_MS, DEFAULT_DURATION_MS)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// In-memory viewport that lets tests fire intersection events.
    #[derive(Default)]
    struct FakeViewport {
        slots: Rc<RefCell<Vec<Option<IntersectionCallback>>>>,
    }

    impl FakeViewport {
        /// Deliver an event to every live subscriber; returns how many got it.
        fn emit(&self, intersecting: bool) -> usize {
            let mut slots = self.slots.borrow_mut();
            let mut delivered = 0;
            for callback in slots.iter_mut().flatten() {
                callback(intersecting);
                delivered += 1;
            }
            delivered
        }

        fn live(&self) -> usize {
            self.slots.borrow().iter().filter(|s| s.is_some()).count()
        }
    }

    impl IntersectionSource for FakeViewport {
        type Region = str;

        fn subscribe(&self, _region: &str, on_change: IntersectionCallback) -> Subscription {
            let index = {
                let mut slots = self.slots.borrow_mut();
                slots.push(Some(on_change));
                slots.len() - 1
            };
            let slots = Rc::clone(&self.slots);
            Subscription::new(move || {
                slots.borrow_mut()[index] = None;
            })
        }
    }

    #[test]
    fn test_state_transitions() {
        use RevealMode::*;
        use RevealState::*;

        assert_eq!(Hidden.next(false, Once), Hidden);
        assert_eq!(Hidden.next(true, Once), Visible);
        assert_eq!(Visible.next(false, Once), Visible);
        assert_eq!(Visible.next(true, Once), Visible);

        assert_eq!(Hidden.next(false, Repeat), Hidden);
        assert_eq!(Hidden.next(true, Repeat), Visible);
        assert_eq!(Visible.next(false, Repeat), Hidden);
    }

    #[test]
    fn test_reveal_lifecycle() {
        let viewport = FakeViewport::default();
        let handle = observe(&viewport, "card", RevealMode::Once);

        // Freshly mounted, off-screen
        assert!(!handle.is_visible());
        viewport.emit(false);
        assert!(!handle.is_visible());

        viewport.emit(true);
        assert!(handle.is_visible());

        drop(handle);
        assert_eq!(viewport.live(), 0);
        assert_eq!(viewport.emit(true), 0);
    }

    #[test]
    fn test_once_mode_does_not_revert() {
        let viewport = FakeViewport::default();
        let handle = observe(&viewport, "card", RevealMode::Once);

        viewport.emit(true);
        viewport.emit(false);
        assert!(handle.is_visible());
    }

    #[test]
    fn test_repeat_mode_retriggers() {
        let viewport = FakeViewport::default();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        let handle = observe_with(&viewport, "card", RevealMode::Repeat, move |v| {
            sink.borrow_mut().push(v)
        });

        viewport.emit(true);
        viewport.emit(true);
        viewport.emit(false);
        viewport.emit(true);

        assert!(handle.is_visible());
        // Duplicate notifications are not reported as changes
        assert_eq!(*changes.borrow(), vec![true, false, true]);
    }

    #[test]
    fn test_handles_are_independent() {
        let first_viewport = FakeViewport::default();
        let second_viewport = FakeViewport::default();
        let first = observe(&first_viewport, "a", RevealMode::Once);
        let second = observe(&second_viewport, "b", RevealMode::Once);

        first_viewport.emit(true);
        assert!(first.is_visible());
        assert!(!second.is_visible());
    }

    #[test]
    fn test_unmount_before_any_notification() {
        let viewport = FakeViewport::default();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let handle = observe_with(&viewport, "card", RevealMode::Once, move |_| {
            counter.set(counter.get() + 1)
        });

        assert_eq!(viewport.live(), 1);
        drop(handle);
        assert_eq!(viewport.live(), 0);
        viewport.emit(true);
        assert_eq!(calls.get(), 0);
    }

    /// Reports every region as on-screen the moment it is subscribed.
    struct AlwaysVisible;

    impl IntersectionSource for AlwaysVisible {
        type Region = str;

        fn subscribe(&self, _region: &str, mut on_change: IntersectionCallback) -> Subscription {
            on_change(true);
            Subscription::detached()
        }
    }

    #[test]
    fn test_handle_reflects_notification_during_subscribe() {
        let reported = Rc::new(Cell::new(false));
        let sink = Rc::clone(&reported);
        let handle = observe_with(&AlwaysVisible, "hero", RevealMode::Once, move |v| sink.set(v));

        assert!(handle.is_visible());
        assert!(reported.get());
    }

    #[test]
    fn test_subscription_releases_once() {
        let released = Rc::new(Cell::new(0));
        let counter = Rc::clone(&released);
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));
        assert_eq!(released.get(), 0);
        drop(subscription);
        assert_eq!(released.get(), 1);

        drop(Subscription::detached());
    }

    #[test]
    fn test_animation_tags() {
        for animation in Animation::ALL {
            assert_eq!(animation.tag().parse::<Animation>(), Ok(animation));
            assert_eq!(animation.to_string(), animation.tag());
        }
        assert_eq!("rotate".parse::<Animation>(), Ok(Animation::Rotate));
        assert_eq!(
            "fade-sideways".parse::<Animation>(),
            Err(AnimationParseError("fade-sideways".to_string()))
        );
        assert_eq!(Animation::default(), Animation::FadeUp);
    }

    #[test]
    fn test_timing() {
        assert_eq!(RevealTiming::default(), RevealTiming::new(0, 600));
        assert_eq!(
            RevealTiming::new(150, 800).style(),
            "animation-delay: 150ms; animation-duration: 800ms;"
        );
    }
}
