use crate::breakpoint::{mobile_scale, DeviceClass};

/// Inline `animation-duration` applied to fade/slide elements on mobile.
pub const MOBILE_ANIMATION_DURATION: &str = "0.4s";

/// Page regions the layout pass may touch. Each maps to one configurable
/// selector; a missing element skips the adjustment silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRegion {
    Container,
    HeroImage,
    Badge,
}

impl PageRegion {
    /// Name used in logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::HeroImage => "hero image",
            Self::Badge => "badge",
        }
    }
}

/// One class-list mutation on a page region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassOp {
    pub region: PageRegion,
    pub class: &'static str,
    pub add: bool,
}

impl ClassOp {
    const fn add(region: PageRegion, class: &'static str) -> Self {
        Self {
            region,
            class,
            add: true,
        }
    }

    const fn remove(region: PageRegion, class: &'static str) -> Self {
        Self {
            region,
            class,
            add: false,
        }
    }
}

/// The complete set of presentation adjustments implied by one viewport
/// snapshot.
///
/// Computed as a pure value so the web layer can apply it and tests can
/// assert on it without a DOM. Recomputing the plan for an unchanged
/// viewport yields an identical value, so applying it is free of churn.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub device: DeviceClass,
    /// Value for the container's `data-device` attribute.
    pub device_attr: &'static str,
    /// Class mutations for the hero image and badge.
    pub class_ops: Vec<ClassOp>,
    /// `--mobile-scale` custom property; `None` removes the property.
    pub mobile_scale: Option<f64>,
    /// `--vh` custom property in pixels (1% of the true viewport height,
    /// compensating for mobile browser chrome).
    pub viewport_unit_px: f64,
    /// `animation-duration` override for fade/slide elements; `None` clears
    /// any earlier override. Only applied when the breakpoint changed.
    pub animation_duration: Option<&'static str>,
}

impl LayoutPlan {
    /// Derives the plan for a viewport of the given dimensions.
    pub fn for_viewport(width: f64, height: f64) -> Self {
        let device = DeviceClass::classify(width);
        Self {
            device,
            device_attr: device.as_str(),
            class_ops: class_ops_for(device),
            mobile_scale: mobile_scale(width),
            viewport_unit_px: height * 0.01,
            animation_duration: device.is_mobile().then_some(MOBILE_ANIMATION_DURATION),
        }
    }
}

fn class_ops_for(device: DeviceClass) -> Vec<ClassOp> {
    use PageRegion::{Badge, HeroImage};
    match device {
        DeviceClass::Mobile => vec![
            ClassOp::add(HeroImage, "mobile-optimized"),
            ClassOp::add(Badge, "mobile-badge"),
        ],
        DeviceClass::Tablet => vec![
            ClassOp::remove(HeroImage, "mobile-optimized"),
            ClassOp::remove(Badge, "mobile-badge"),
            ClassOp::add(HeroImage, "tablet-optimized"),
        ],
        // The desktop pass only undoes the hero image markers.
        DeviceClass::Desktop => vec![
            ClassOp::remove(HeroImage, "mobile-optimized"),
            ClassOp::remove(HeroImage, "tablet-optimized"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ops(plan: &LayoutPlan) -> Vec<(PageRegion, &'static str, bool)> {
        plan.class_ops
            .iter()
            .map(|op| (op.region, op.class, op.add))
            .collect()
    }

    #[test]
    fn mobile_plan_marks_hero_and_badge() {
        let plan = LayoutPlan::for_viewport(375.0, 667.0);
        assert_eq!(plan.device_attr, "mobile");
        assert!(ops(&plan).contains(&(PageRegion::HeroImage, "mobile-optimized", true)));
        assert!(ops(&plan).contains(&(PageRegion::Badge, "mobile-badge", true)));
        assert_eq!(plan.animation_duration, Some(MOBILE_ANIMATION_DURATION));
    }

    #[test]
    fn tablet_plan_swaps_mobile_markers_for_tablet() {
        let plan = LayoutPlan::for_viewport(1024.0, 768.0);
        assert_eq!(plan.device_attr, "tablet");
        assert!(ops(&plan).contains(&(PageRegion::HeroImage, "mobile-optimized", false)));
        assert!(ops(&plan).contains(&(PageRegion::Badge, "mobile-badge", false)));
        assert!(ops(&plan).contains(&(PageRegion::HeroImage, "tablet-optimized", true)));
        assert_eq!(plan.animation_duration, None);
    }

    #[test]
    fn desktop_plan_clears_hero_markers() {
        let plan = LayoutPlan::for_viewport(1440.0, 900.0);
        assert_eq!(plan.device_attr, "desktop");
        assert_eq!(
            ops(&plan),
            vec![
                (PageRegion::HeroImage, "mobile-optimized", false),
                (PageRegion::HeroImage, "tablet-optimized", false),
            ]
        );
    }

    #[test]
    fn plan_is_idempotent_for_unchanged_viewport() {
        let first = LayoutPlan::for_viewport(800.0, 600.0);
        let second = LayoutPlan::for_viewport(800.0, 600.0);
        assert_eq!(first, second);
    }

    #[test]
    fn viewport_unit_tracks_height() {
        let plan = LayoutPlan::for_viewport(375.0, 667.0);
        assert!((plan.viewport_unit_px - 6.67).abs() < 1e-9);
    }

    #[test]
    fn undersized_viewport_carries_scale_factor() {
        let plan = LayoutPlan::for_viewport(300.0, 500.0);
        assert_eq!(plan.mobile_scale, Some(0.9375));
        let plan = LayoutPlan::for_viewport(320.0, 500.0);
        assert_eq!(plan.mobile_scale, None);
    }
}
