use glam::Vec2;

/// Minimum horizontal travel in pixels before a touch movement counts as a
/// swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;
/// Window in milliseconds during which a second touch-end suppresses the
/// browser's default double-tap zoom.
pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;

/// Horizontal swipe signal. Emission is the whole contract; no presentation
/// change is attached to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
}

impl Swipe {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Tracks one in-flight touch and reports horizontal swipes.
#[derive(Debug, Default)]
pub struct TouchTracker {
    start: Option<Vec2>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the start coordinates of a touch.
    pub fn begin(&mut self, point: Vec2) {
        self.start = Some(point);
    }

    /// Feeds the latest touch position. Yields a swipe when the horizontal
    /// displacement exceeds the threshold and dominates the vertical travel.
    pub fn motion(&mut self, point: Vec2) -> Option<Swipe> {
        let start = self.start?;
        let delta = point - start;
        if delta.x.abs() > delta.y.abs() && delta.x.abs() > SWIPE_THRESHOLD {
            Some(if delta.x > 0.0 {
                Swipe::Right
            } else {
                Swipe::Left
            })
        } else {
            None
        }
    }

    /// Clears the tracked touch.
    pub fn end(&mut self) {
        self.start = None;
    }
}

/// Suppresses the default double-tap action: a second touch-end inside the
/// window is swallowed.
#[derive(Debug, Default)]
pub struct TapGuard {
    last_end_ms: Option<f64>,
}

impl TapGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a touch-end at `now_ms`; returns `true` when the default
    /// action should be suppressed.
    pub fn touch_end(&mut self, now_ms: f64) -> bool {
        let suppress = self
            .last_end_ms
            .is_some_and(|last| now_ms - last <= DOUBLE_TAP_WINDOW_MS);
        self.last_end_ms = Some(now_ms);
        suppress
    }
}
