//! Responsive presentation runtime, rewritten in Rust.
//!
//! The crate separates the pure responsive state machine (breakpoint
//! classification, scroll effects, gesture detection, frame-rate sampling)
//! from platform integration so the core stays testable and easy to embed.
//! On `wasm32` the `web` module wires the tracker to the live DOM; the
//! native binary drives the same core headlessly.

pub mod app;
pub mod breakpoint;
pub mod device;
pub mod fps;
pub mod gesture;
pub mod layout;
pub mod scroll;
pub mod timer;
#[cfg(target_arch = "wasm32")]
pub mod wasm;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::{BreakpointFeed, ResizeOutcome, ResponsiveTracker, ViewportState};
pub use breakpoint::{mobile_scale, Breakpoint, DeviceClass};
pub use device::{DeviceInfo, Rect};
pub use fps::{FpsReading, FpsSampler, QualityState};
pub use gesture::{Swipe, TapGuard, TouchTracker};
pub use layout::{ClassOp, LayoutPlan, PageRegion};
pub use scroll::{ParallaxSettings, ScrollDirection, ScrollFrame};
pub use timer::Debounce;
