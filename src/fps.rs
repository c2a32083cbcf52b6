//! Frame-rate sampling over the host's animation-frame callbacks.
//!
//! The sampler is clock-free: the caller feeds in a monotonic timestamp per
//! frame, so tests never depend on wall-clock delays.

/// Frames per second below which the page is considered to be struggling.
pub const LOW_FPS_THRESHOLD: u32 = 30;
/// Length of one sampling window in milliseconds.
pub const SAMPLE_WINDOW_MS: f64 = 1000.0;

/// One completed sampling window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FpsReading {
    pub fps: u32,
}

impl FpsReading {
    pub fn is_low(self) -> bool {
        self.fps < LOW_FPS_THRESHOLD
    }
}

/// Rolling frames-per-second estimator.
///
/// Call [`frame`](Self::frame) once per animation frame with the current
/// monotonic time; a reading is produced roughly once per second.
#[derive(Debug)]
pub struct FpsSampler {
    window_start_ms: f64,
    frames: u32,
    fps: u32,
}

impl FpsSampler {
    /// `now_ms` anchors the first sampling window.
    pub fn new(now_ms: f64) -> Self {
        Self {
            window_start_ms: now_ms,
            frames: 0,
            fps: 0,
        }
    }

    /// Records one frame; yields a reading once the sampling window has
    /// elapsed, resetting the counter and window start.
    pub fn frame(&mut self, now_ms: f64) -> Option<FpsReading> {
        self.frames += 1;
        let elapsed = now_ms - self.window_start_ms;
        if elapsed < SAMPLE_WINDOW_MS {
            return None;
        }
        self.fps = ((f64::from(self.frames) * 1000.0) / elapsed).round() as u32;
        self.frames = 0;
        self.window_start_ms = now_ms;
        Some(FpsReading { fps: self.fps })
    }

    /// Most recent estimate; zero until the first window completes.
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// Latched low-performance flag.
///
/// Set once a reading drops below the threshold; there is no hysteresis to
/// clear it again.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QualityState {
    low_performance: bool,
}

impl QualityState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a reading into the latch; returns `true` only for the reading
    /// that tripped it, so the caller can apply the flag exactly once.
    pub fn observe(&mut self, reading: FpsReading) -> bool {
        if self.low_performance || !reading.is_low() {
            return false;
        }
        self.low_performance = true;
        true
    }

    pub fn low_performance(&self) -> bool {
        self.low_performance
    }
}
