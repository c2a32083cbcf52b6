use serde::{Deserialize, Serialize};

/// Width in CSS pixels at or below which a viewport is classified as mobile.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
/// Width in CSS pixels at or below which a viewport is classified as tablet.
pub const TABLET_MAX_WIDTH: f64 = 1200.0;
/// Narrowest width the layout is designed for; below this the page is scaled
/// down linearly instead of reflowed.
pub const MIN_LAYOUT_WIDTH: f64 = 320.0;

/// Device classification derived from viewport width.
///
/// The three classes partition the width axis: exactly one applies to any
/// viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    /// Classifies a viewport width against the fixed breakpoints.
    pub fn classify(width: f64) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            Self::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Lowercase name used for the container's `data-device` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }

    /// Human-readable name used in logs and reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mobile => "Mobile",
            Self::Tablet => "Tablet",
            Self::Desktop => "Desktop",
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }

    pub fn is_tablet(self) -> bool {
        self == Self::Tablet
    }

    pub fn is_desktop(self) -> bool {
        self == Self::Desktop
    }
}

/// Snapshot answering the public breakpoint query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    #[serde(rename = "type")]
    pub device: DeviceClass,
    pub width: f64,
    pub height: f64,
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
}

impl Breakpoint {
    /// Captures the breakpoint for the given viewport dimensions.
    pub fn capture(width: f64, height: f64) -> Self {
        let device = DeviceClass::classify(width);
        Self {
            device,
            width,
            height,
            is_mobile: device.is_mobile(),
            is_tablet: device.is_tablet(),
            is_desktop: device.is_desktop(),
        }
    }
}

/// Scale factor applied below the minimum layout width.
///
/// Returns `None` at or above the minimum so the corresponding custom
/// property is removed rather than pinned to 1.
pub fn mobile_scale(width: f64) -> Option<f64> {
    if width < MIN_LAYOUT_WIDTH {
        Some(width / MIN_LAYOUT_WIDTH)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_partitions_the_width_axis() {
        assert_eq!(DeviceClass::classify(0.0), DeviceClass::Mobile);
        assert_eq!(DeviceClass::classify(768.0), DeviceClass::Mobile);
        assert_eq!(DeviceClass::classify(768.5), DeviceClass::Tablet);
        assert_eq!(DeviceClass::classify(1200.0), DeviceClass::Tablet);
        assert_eq!(DeviceClass::classify(1200.5), DeviceClass::Desktop);
        assert_eq!(DeviceClass::classify(2560.0), DeviceClass::Desktop);
    }

    #[test]
    fn breakpoint_flags_are_exclusive_and_exhaustive() {
        for width in [200.0, 768.0, 769.0, 1200.0, 1201.0, 3840.0] {
            let bp = Breakpoint::capture(width, 800.0);
            let set = [bp.is_mobile, bp.is_tablet, bp.is_desktop]
                .iter()
                .filter(|flag| **flag)
                .count();
            assert_eq!(set, 1, "width {width} must map to exactly one class");
        }
    }

    #[test]
    fn classification_is_stable_for_unchanged_width() {
        let first = Breakpoint::capture(1024.0, 768.0);
        let second = Breakpoint::capture(1024.0, 768.0);
        assert_eq!(first, second);
    }

    #[test]
    fn scale_factor_only_below_minimum_width() {
        assert_eq!(mobile_scale(320.0), None);
        assert_eq!(mobile_scale(480.0), None);
        assert_eq!(mobile_scale(300.0), Some(300.0 / 320.0));
        assert_eq!(mobile_scale(160.0), Some(0.5));
    }

    #[test]
    fn breakpoint_serializes_with_page_facing_names() {
        let json = serde_json::to_string(&Breakpoint::capture(375.0, 667.0)).unwrap();
        assert!(json.contains("\"type\":\"Mobile\""));
        assert!(json.contains("\"isMobile\":true"));
        assert!(json.contains("\"isDesktop\":false"));
    }
}
