use crate::breakpoint::DeviceClass;

/// Vertical offset in pixels past which the nav logo gains the `scrolled`
/// class.
pub const SCROLLED_THRESHOLD: f64 = 100.0;

/// Direction of a scroll step relative to the previous offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    /// `Down` iff the new offset is strictly greater than the previous one.
    pub fn between(prev_top: f64, new_top: f64) -> Self {
        if new_top > prev_top {
            Self::Down
        } else {
            Self::Up
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// Speed multipliers for the two parallax layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxSettings {
    /// Fraction of the scroll distance applied to the background logo.
    pub background_speed: f64,
    /// Fraction of the scroll distance applied to the hero image.
    pub hero_speed: f64,
}

impl Default for ParallaxSettings {
    fn default() -> Self {
        Self {
            background_speed: 0.3,
            hero_speed: 0.15,
        }
    }
}

/// Effects of one scroll notification, derived from the previous and new
/// offsets plus the current classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    /// The new vertical offset.
    pub top: f64,
    pub direction: ScrollDirection,
    /// `translateY` offset in pixels for the background logo; `None` on
    /// mobile, where parallax is skipped entirely.
    pub background_offset: Option<f64>,
    /// `translateY` offset in pixels for the hero image; `None` on mobile.
    pub hero_offset: Option<f64>,
    /// Whether the nav logo should carry the `scrolled` class.
    pub scrolled: bool,
}

impl ScrollFrame {
    pub fn compute(
        prev_top: f64,
        top: f64,
        device: DeviceClass,
        parallax: ParallaxSettings,
    ) -> Self {
        let apply_parallax = !device.is_mobile();
        Self {
            top,
            direction: ScrollDirection::between(prev_top, top),
            background_offset: apply_parallax.then(|| top * parallax.background_speed),
            hero_offset: apply_parallax.then(|| top * parallax.hero_speed),
            scrolled: top > SCROLLED_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop_frame(prev: f64, top: f64) -> ScrollFrame {
        ScrollFrame::compute(prev, top, DeviceClass::Desktop, ParallaxSettings::default())
    }

    #[test]
    fn direction_follows_offset_delta() {
        assert_eq!(ScrollDirection::between(10.0, 50.0), ScrollDirection::Down);
        assert_eq!(ScrollDirection::between(50.0, 10.0), ScrollDirection::Up);
        // An unchanged offset reads as "up", matching the strict comparison.
        assert_eq!(ScrollDirection::between(50.0, 50.0), ScrollDirection::Up);
    }

    #[test]
    fn default_speeds_at_one_thousand_pixels() {
        let frame = desktop_frame(0.0, 1000.0);
        assert_eq!(frame.background_offset, Some(300.0));
        assert_eq!(frame.hero_offset, Some(150.0));
    }

    #[test]
    fn parallax_is_skipped_on_mobile() {
        let frame = ScrollFrame::compute(
            0.0,
            1000.0,
            DeviceClass::Mobile,
            ParallaxSettings::default(),
        );
        assert_eq!(frame.background_offset, None);
        assert_eq!(frame.hero_offset, None);
        // The scrolled marker still applies on mobile.
        assert!(frame.scrolled);
    }

    #[test]
    fn tablet_keeps_parallax() {
        let frame = ScrollFrame::compute(
            0.0,
            200.0,
            DeviceClass::Tablet,
            ParallaxSettings::default(),
        );
        assert_eq!(frame.background_offset, Some(60.0));
    }

    #[test]
    fn scrolled_marker_boundary() {
        assert!(!desktop_frame(0.0, 100.0).scrolled);
        assert!(desktop_frame(0.0, 101.0).scrolled);
        assert!(!desktop_frame(150.0, 99.0).scrolled);
    }
}
