use std::sync::Arc;

use glam::Vec2;
use log::{debug, info};
use parking_lot::RwLock;

use crate::breakpoint::{Breakpoint, DeviceClass};
use crate::gesture::{Swipe, TapGuard, TouchTracker};
use crate::layout::LayoutPlan;
use crate::scroll::{ParallaxSettings, ScrollFrame};
use crate::timer::Debounce;

/// Quiet period after the last resize event before the layout pass runs.
pub const RESIZE_DEBOUNCE_MS: f64 = 250.0;
/// Settle delay after an orientation change before dimensions are re-read.
pub const ORIENTATION_SETTLE_MS: f64 = 100.0;

/// Immutable per-event view of the viewport.
///
/// Recomputed on every resize and scroll notification and passed to the
/// handlers as a value; nothing reaches into shared mutable flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub width: f64,
    pub height: f64,
    pub device: DeviceClass,
    /// Last observed vertical scroll offset.
    pub scroll_top: f64,
}

impl ViewportState {
    pub fn capture(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            device: DeviceClass::classify(width),
            scroll_top: 0.0,
        }
    }
}

/// Result of a resize pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeOutcome {
    pub plan: LayoutPlan,
    /// Whether the device classification changed with this pass. Animation
    /// overrides are only applied on a change.
    pub breakpoint_changed: bool,
}

/// Thread-safe published snapshot of the current breakpoint.
///
/// External callers hold a clone of the feed and query it while the event
/// side keeps replacing the snapshot.
#[derive(Debug)]
pub struct BreakpointFeed {
    current: Arc<RwLock<Breakpoint>>,
}

impl BreakpointFeed {
    fn new(initial: Breakpoint) -> Self {
        Self {
            current: Arc::new(RwLock::new(initial)),
        }
    }

    /// Current breakpoint snapshot.
    pub fn current(&self) -> Breakpoint {
        *self.current.read()
    }

    fn publish(&self, breakpoint: Breakpoint) {
        *self.current.write() = breakpoint;
    }
}

impl Clone for BreakpointFeed {
    fn clone(&self) -> Self {
        Self {
            current: Arc::clone(&self.current),
        }
    }
}

/// Event-driven responsive state machine.
///
/// Owns the viewport state plus the timer and gesture bookkeeping; each
/// handler consumes event data and returns the presentation effects as a
/// value for the host layer to apply.
#[derive(Debug)]
pub struct ResponsiveTracker {
    state: ViewportState,
    parallax: ParallaxSettings,
    resize_debounce: Debounce,
    orientation_delay: Debounce,
    touch: TouchTracker,
    taps: TapGuard,
    last_swipe: Option<Swipe>,
    feed: BreakpointFeed,
}

impl ResponsiveTracker {
    /// Classifies the initial viewport and returns the tracker together with
    /// its first layout plan.
    pub fn new(width: f64, height: f64) -> (Self, LayoutPlan) {
        let state = ViewportState::capture(width, height);
        info!(
            "initial breakpoint: {} ({width}x{height})",
            state.device.label()
        );
        let tracker = Self {
            state,
            parallax: ParallaxSettings::default(),
            resize_debounce: Debounce::new(RESIZE_DEBOUNCE_MS),
            orientation_delay: Debounce::new(ORIENTATION_SETTLE_MS),
            touch: TouchTracker::new(),
            taps: TapGuard::new(),
            last_swipe: None,
            feed: BreakpointFeed::new(Breakpoint::capture(width, height)),
        };
        (tracker, LayoutPlan::for_viewport(width, height))
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Applies new viewport dimensions and recomputes the layout plan.
    pub fn resize(&mut self, width: f64, height: f64) -> ResizeOutcome {
        let previous = self.state.device;
        self.state = ViewportState {
            width,
            height,
            device: DeviceClass::classify(width),
            scroll_top: self.state.scroll_top,
        };
        self.feed.publish(Breakpoint::capture(width, height));
        let breakpoint_changed = self.state.device != previous;
        if breakpoint_changed {
            info!("breakpoint changed: {}", self.state.device.label());
        }
        ResizeOutcome {
            plan: LayoutPlan::for_viewport(width, height),
            breakpoint_changed,
        }
    }

    /// Folds a scroll notification into the state and returns the frame's
    /// presentation effects.
    pub fn scroll(&mut self, top: f64) -> ScrollFrame {
        let frame =
            ScrollFrame::compute(self.state.scroll_top, top, self.state.device, self.parallax);
        self.state.scroll_top = top;
        frame
    }

    pub fn touch_start(&mut self, point: Vec2) {
        self.touch.begin(point);
    }

    /// Feeds a touch movement; logs and retains the swipe signal if one
    /// fired.
    pub fn touch_move(&mut self, point: Vec2) -> Option<Swipe> {
        let swipe = self.touch.motion(point)?;
        debug!("swipe detected: {}", swipe.as_str());
        self.last_swipe = Some(swipe);
        Some(swipe)
    }

    /// Ends the in-flight touch; returns `true` when the default double-tap
    /// action should be suppressed.
    pub fn touch_end(&mut self, now_ms: f64) -> bool {
        self.touch.end();
        self.taps.touch_end(now_ms)
    }

    /// Most recent swipe signal, if any.
    pub fn last_swipe(&self) -> Option<Swipe> {
        self.last_swipe
    }

    /// Current breakpoint snapshot.
    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::capture(self.state.width, self.state.height)
    }

    /// Cloneable handle for querying the breakpoint from outside the event
    /// loop.
    pub fn feed(&self) -> BreakpointFeed {
        self.feed.clone()
    }

    /// Notes a raw resize notification; the layout pass runs once the
    /// debounce quiet period elapses.
    pub fn note_resize_event(&mut self, now_ms: f64) {
        self.resize_debounce.trigger(now_ms);
    }

    /// Notes an orientation change; dimensions are re-read after the settle
    /// delay.
    pub fn note_orientation_event(&mut self, now_ms: f64) {
        self.orientation_delay.trigger(now_ms);
    }

    /// Polls the pending deadlines. True when a debounced layout pass is due
    /// at `now_ms`.
    pub fn layout_pass_due(&mut self, now_ms: f64) -> bool {
        let resize = self.resize_debounce.ready(now_ms);
        let orientation = self.orientation_delay.ready(now_ms);
        resize || orientation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::ScrollDirection;

    #[test]
    fn resize_reports_breakpoint_transitions() {
        let (mut tracker, initial) = ResponsiveTracker::new(1440.0, 900.0);
        assert_eq!(initial.device, DeviceClass::Desktop);

        let outcome = tracker.resize(1024.0, 768.0);
        assert!(outcome.breakpoint_changed);
        assert_eq!(outcome.plan.device, DeviceClass::Tablet);

        // Same class again: no transition.
        let outcome = tracker.resize(900.0, 700.0);
        assert!(!outcome.breakpoint_changed);
    }

    #[test]
    fn scroll_tracks_direction_across_events() {
        let (mut tracker, _) = ResponsiveTracker::new(1440.0, 900.0);
        let frame = tracker.scroll(200.0);
        assert_eq!(frame.direction, ScrollDirection::Down);
        let frame = tracker.scroll(150.0);
        assert_eq!(frame.direction, ScrollDirection::Up);
        assert_eq!(tracker.state().scroll_top, 150.0);
    }

    #[test]
    fn scroll_effects_follow_the_current_classification() {
        let (mut tracker, _) = ResponsiveTracker::new(1440.0, 900.0);
        assert!(tracker.scroll(1000.0).background_offset.is_some());

        tracker.resize(375.0, 667.0);
        assert_eq!(tracker.scroll(1000.0).background_offset, None);
    }

    #[test]
    fn debounced_layout_pass_fires_after_quiet_period() {
        let (mut tracker, _) = ResponsiveTracker::new(1440.0, 900.0);
        tracker.note_resize_event(0.0);
        tracker.note_resize_event(100.0);
        assert!(!tracker.layout_pass_due(200.0));
        assert!(!tracker.layout_pass_due(349.0));
        assert!(tracker.layout_pass_due(350.0));
        assert!(!tracker.layout_pass_due(400.0));
    }

    #[test]
    fn orientation_change_settles_independently() {
        let (mut tracker, _) = ResponsiveTracker::new(1440.0, 900.0);
        tracker.note_orientation_event(0.0);
        assert!(!tracker.layout_pass_due(99.0));
        assert!(tracker.layout_pass_due(100.0));
    }

    #[test]
    fn touch_sequence_emits_and_retains_swipe() {
        let (mut tracker, _) = ResponsiveTracker::new(375.0, 667.0);
        tracker.touch_start(Vec2::new(200.0, 300.0));
        assert_eq!(
            tracker.touch_move(Vec2::new(120.0, 310.0)),
            Some(Swipe::Left)
        );
        assert!(!tracker.touch_end(1000.0));
        assert_eq!(tracker.last_swipe(), Some(Swipe::Left));

        // Second tap inside the window suppresses the default action.
        assert!(tracker.touch_end(1200.0));
    }

    #[test]
    fn feed_publishes_breakpoint_across_resizes() {
        let (mut tracker, _) = ResponsiveTracker::new(1440.0, 900.0);
        let feed = tracker.feed();
        assert!(feed.current().is_desktop);
        tracker.resize(500.0, 800.0);
        assert!(feed.current().is_mobile);
        assert_eq!(feed.current().width, 500.0);
    }
}
