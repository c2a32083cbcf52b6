use serde::{Deserialize, Serialize};

/// Static snapshot of the host environment's capabilities.
///
/// A pure read with no side effects; the web layer fills it from the
/// browser, the native harness synthesizes one for reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub user_agent: String,
    pub platform: String,
    pub screen_width: f64,
    pub screen_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub device_pixel_ratio: f64,
    pub touch_support: bool,
    /// Free-form orientation label (`portrait-primary`, ...); `unknown` when
    /// the platform does not report one.
    pub orientation: String,
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self {
            user_agent: String::new(),
            platform: String::new(),
            screen_width: 0.0,
            screen_height: 0.0,
            viewport_width: 0.0,
            viewport_height: 0.0,
            device_pixel_ratio: 1.0,
            touch_support: false,
            orientation: "unknown".to_string(),
        }
    }
}

/// Axis-aligned rectangle in viewport coordinates, as reported by a bounding
/// client rect.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    /// True when the rectangle lies entirely inside a viewport of the given
    /// dimensions.
    pub fn fully_visible_in(&self, viewport_width: f64, viewport_height: f64) -> bool {
        self.top >= 0.0
            && self.left >= 0.0
            && self.bottom <= viewport_height
            && self.right <= viewport_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_report_unknown_orientation_and_unit_ratio() {
        let info = DeviceInfo::default();
        assert_eq!(info.orientation, "unknown");
        assert_eq!(info.device_pixel_ratio, 1.0);
        assert!(!info.touch_support);
    }

    #[test]
    fn device_info_serializes_with_page_facing_names() {
        let json = serde_json::to_string(&DeviceInfo::default()).unwrap();
        assert!(json.contains("\"devicePixelRatio\":1.0"));
        assert!(json.contains("\"touchSupport\":false"));
    }

    #[test]
    fn rect_containment_in_viewport() {
        let rect = Rect {
            top: 10.0,
            left: 10.0,
            bottom: 500.0,
            right: 300.0,
        };
        assert!(rect.fully_visible_in(1024.0, 768.0));
        // Clipped below the fold.
        assert!(!rect.fully_visible_in(1024.0, 400.0));
        // Partially above the viewport.
        let above = Rect {
            top: -1.0,
            ..rect
        };
        assert!(!above.fully_visible_in(1024.0, 768.0));
    }
}
