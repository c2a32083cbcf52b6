#![cfg(target_arch = "wasm32")]

//! DOM integration: event wiring and application of plan values.
//!
//! Every element lookup tolerates absence; a missing element simply skips
//! the corresponding adjustment.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use glam::Vec2;
use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, OrientationType, TouchEvent, Window,
};

use crate::app::ResponsiveTracker;
use crate::breakpoint::Breakpoint;
use crate::device::DeviceInfo;
use crate::fps::{FpsSampler, QualityState};
use crate::layout::{LayoutPlan, PageRegion};
use crate::scroll::ScrollFrame;

/// CSS selectors for the page regions the runtime touches.
#[derive(Debug, Clone)]
pub struct PageSelectors {
    pub container: String,
    pub hero_image: String,
    pub badge: String,
    /// Nav logo that gains the `scrolled` class past the threshold.
    pub nav_logo: String,
    /// Decorative background logo moved by the slower parallax layer.
    pub background_logo: String,
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            container: ".container".to_string(),
            hero_image: ".hero-image".to_string(),
            badge: ".badge".to_string(),
            nav_logo: ".relume-logo".to_string(),
            background_logo: ".figma-logo-background".to_string(),
        }
    }
}

/// Keeps the self-rescheduling frame closure alive for as long as the loop
/// may fire.
type FrameHandle = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Wires a [`ResponsiveTracker`] to the live page.
pub struct ResponsiveApp {
    window: Window,
    document: Document,
    selectors: PageSelectors,
    tracker: ResponsiveTracker,
    fps: FpsSampler,
    quality: QualityState,
    listeners: Vec<EventListener>,
    image_listeners: Vec<EventListener>,
    frame: Option<FrameHandle>,
    running: bool,
}

/// Attaches the runtime to the current document and applies the initial
/// layout pass.
pub fn attach(selectors: PageSelectors) -> Result<Rc<RefCell<ResponsiveApp>>> {
    let window = web_sys::window().ok_or_else(|| anyhow!("window not available"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("document not available"))?;

    let (width, height) = viewport_size(&window);
    let (tracker, plan) = ResponsiveTracker::new(width, height);
    let now = now_ms(&window);

    let mut app = ResponsiveApp {
        window,
        document,
        selectors,
        tracker,
        fps: FpsSampler::new(now),
        quality: QualityState::new(),
        listeners: Vec::new(),
        image_listeners: Vec::new(),
        frame: None,
        running: false,
    };

    app.apply_layout(&plan, false);
    app.enable_smooth_scroll();
    log::info!("device info: {:?}", app.device_info());

    let app = Rc::new(RefCell::new(app));
    wire_listeners(&app);
    Ok(app)
}

/// Launches the frame loop driving the FPS sampler and the pending debounce
/// deadlines. Idempotent while running; [`ResponsiveApp::stop`] cancels it.
pub fn start(app: &Rc<RefCell<ResponsiveApp>>) -> Result<()> {
    {
        let mut state = app.borrow_mut();
        if state.running {
            return Ok(());
        }
        state.running = true;
    }

    let window = app.borrow().window.clone();
    let handle: FrameHandle = Rc::new(RefCell::new(None));
    let app_tick = Rc::clone(app);
    let handle_next = Rc::clone(&handle);

    *handle.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !app_tick.borrow().running {
            return;
        }
        app_tick.borrow_mut().tick();
        let window = app_tick.borrow().window.clone();
        if let Some(closure) = handle_next.borrow().as_ref() {
            if let Err(err) = request_frame(&window, closure) {
                log::error!("failed to reschedule frame loop: {err:?}");
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(closure) = handle.borrow().as_ref() {
        request_frame(&window, closure)?;
    }
    app.borrow_mut().frame = Some(handle);
    Ok(())
}

fn request_frame(window: &Window, closure: &Closure<dyn FnMut()>) -> Result<()> {
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .map(|_| ())
        .map_err(|err| anyhow!("requestAnimationFrame failed: {err:?}"))
}

fn wire_listeners(app: &Rc<RefCell<ResponsiveApp>>) {
    let window = app.borrow().window.clone();
    let document = app.borrow().document.clone();
    let mut listeners = Vec::new();

    {
        let app = Rc::clone(app);
        listeners.push(EventListener::new(&window, "resize", move |_| {
            let mut state = app.borrow_mut();
            let now = state.now();
            state.tracker.note_resize_event(now);
        }));
    }

    {
        let app = Rc::clone(app);
        listeners.push(EventListener::new(&window, "orientationchange", move |_| {
            let mut state = app.borrow_mut();
            let now = state.now();
            state.tracker.note_orientation_event(now);
        }));
    }

    {
        let app = Rc::clone(app);
        listeners.push(EventListener::new(&window, "scroll", move |_| {
            let mut state = app.borrow_mut();
            let top = state.scroll_top();
            let frame = state.tracker.scroll(top);
            state.apply_scroll_frame(&frame);
        }));
    }

    {
        let app = Rc::clone(app);
        listeners.push(EventListener::new(&document, "visibilitychange", move |_| {
            let state = app.borrow();
            state.set_paused(state.document.hidden());
        }));
    }

    if touch_supported(&window) {
        {
            let app = Rc::clone(app);
            listeners.push(EventListener::new(&document, "touchstart", move |event| {
                let Some(point) = first_touch_point(event) else {
                    return;
                };
                app.borrow_mut().tracker.touch_start(point);
            }));
        }

        {
            let app = Rc::clone(app);
            listeners.push(EventListener::new(&document, "touchmove", move |event| {
                let Some(point) = first_touch_point(event) else {
                    return;
                };
                app.borrow_mut().tracker.touch_move(point);
            }));
        }

        {
            // Needs an active listener so the default double-tap zoom can be
            // cancelled.
            let app = Rc::clone(app);
            let options = EventListenerOptions::enable_prevent_default();
            listeners.push(EventListener::new_with_options(
                &document,
                "touchend",
                options,
                move |event| {
                    let mut state = app.borrow_mut();
                    let now = state.now();
                    if state.tracker.touch_end(now) {
                        event.prevent_default();
                    }
                },
            ));
        }
    }

    app.borrow_mut().listeners = listeners;
}

impl ResponsiveApp {
    /// Stops the frame loop. Listeners stay attached; dropping the app
    /// detaches them.
    pub fn stop(&mut self) {
        self.running = false;
        self.frame = None;
    }

    /// Current breakpoint snapshot.
    pub fn breakpoint(&self) -> Breakpoint {
        self.tracker.breakpoint()
    }

    /// Environment capability snapshot read from the browser.
    pub fn device_info(&self) -> DeviceInfo {
        let navigator = self.window.navigator();
        let (viewport_width, viewport_height) = viewport_size(&self.window);
        let (screen_width, screen_height) = self
            .window
            .screen()
            .ok()
            .map(|screen| {
                (
                    screen.width().unwrap_or(0) as f64,
                    screen.height().unwrap_or(0) as f64,
                )
            })
            .unwrap_or((0.0, 0.0));
        DeviceInfo {
            user_agent: navigator.user_agent().unwrap_or_default(),
            platform: navigator.platform().unwrap_or_default(),
            screen_width,
            screen_height,
            viewport_width,
            viewport_height,
            device_pixel_ratio: self.window.device_pixel_ratio(),
            touch_support: touch_supported(&self.window),
            orientation: orientation_label(&self.window),
        }
    }

    /// One animation-frame step: runs any due layout pass and samples the
    /// frame rate.
    fn tick(&mut self) {
        let now = self.now();
        if self.tracker.layout_pass_due(now) {
            let (width, height) = viewport_size(&self.window);
            let outcome = self.tracker.resize(width, height);
            self.apply_layout(&outcome.plan, outcome.breakpoint_changed);
        }
        if let Some(reading) = self.fps.frame(now) {
            if self.quality.observe(reading) {
                log::warn!(
                    "sustained low frame rate ({} fps); simplifying animations",
                    reading.fps
                );
                self.add_body_class("low-performance");
            }
        }
    }

    fn apply_layout(&mut self, plan: &LayoutPlan, breakpoint_changed: bool) {
        if let Some(container) = self.query(&self.selectors.container) {
            let _ = container.set_attribute("data-device", plan.device_attr);
        }

        for op in &plan.class_ops {
            let Some(element) = self.region(op.region) else {
                continue;
            };
            let list = element.class_list();
            if op.add {
                let _ = list.add_1(op.class);
            } else {
                let _ = list.remove_1(op.class);
            }
        }

        if let Some(body) = self.document.body() {
            let style = body.style();
            match plan.mobile_scale {
                Some(scale) => {
                    let _ = style.set_property("--mobile-scale", &scale.to_string());
                }
                None => {
                    let _ = style.remove_property("--mobile-scale");
                }
            }
        }

        if let Some(root) = self.root_element() {
            let _ = root
                .style()
                .set_property("--vh", &format!("{}px", plan.viewport_unit_px));
        }

        if breakpoint_changed {
            self.apply_animation_overrides(plan.animation_duration);
        }

        self.optimize_images();
    }

    fn apply_animation_overrides(&self, duration: Option<&str>) {
        let Ok(nodes) = self
            .document
            .query_selector_all("[class*=\"fade\"], [class*=\"slide\"]")
        else {
            return;
        };
        for index in 0..nodes.length() {
            let Some(element) = nodes
                .get(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            let style = element.style();
            match duration {
                Some(value) => {
                    let _ = style.set_property("animation-duration", value);
                }
                None => {
                    let _ = style.remove_property("animation-duration");
                }
            }
        }
    }

    fn apply_scroll_frame(&self, frame: &ScrollFrame) {
        if let Some(offset) = frame.background_offset {
            if let Some(element) = self.query_html(&self.selectors.background_logo) {
                // The centering prefix is part of the element's resting
                // transform and must survive the parallax write.
                let _ = element.style().set_property(
                    "transform",
                    &format!("translate(-50%, -50%) translateX(12%) translateY({offset}px)"),
                );
            }
        }
        if let Some(offset) = frame.hero_offset {
            if let Some(element) = self.query_html(&self.selectors.hero_image) {
                let _ = element
                    .style()
                    .set_property("transform", &format!("translateY({offset}px)"));
            }
        }
        if let Some(logo) = self.query(&self.selectors.nav_logo) {
            let list = logo.class_list();
            if frame.scrolled {
                let _ = list.add_1("scrolled");
            } else {
                let _ = list.remove_1("scrolled");
            }
        }
    }

    /// Marks every image for lazy loading and tags it `loaded` once its data
    /// is in (immediately for already-complete images).
    fn optimize_images(&mut self) {
        let Ok(nodes) = self.document.query_selector_all("img") else {
            return;
        };
        self.image_listeners.clear();
        for index in 0..nodes.length() {
            let Some(image) = nodes
                .get(index)
                .and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
            else {
                continue;
            };
            image.set_loading("lazy");
            if image.complete() {
                let _ = image.class_list().add_1("loaded");
            } else {
                let target = image.clone();
                self.image_listeners
                    .push(EventListener::once(&image, "load", move |_| {
                        let _ = target.class_list().add_1("loaded");
                    }));
            }
        }
    }

    fn set_paused(&self, hidden: bool) {
        let Some(body) = self.document.body() else {
            return;
        };
        let list = body.class_list();
        if hidden {
            let _ = list.add_1("paused");
        } else {
            let _ = list.remove_1("paused");
        }
    }

    fn add_body_class(&self, class: &str) {
        if let Some(body) = self.document.body() {
            let _ = body.class_list().add_1(class);
        }
    }

    fn enable_smooth_scroll(&self) {
        if let Some(root) = self.root_element() {
            let _ = root.style().set_property("scroll-behavior", "smooth");
        }
    }

    fn region(&self, region: PageRegion) -> Option<Element> {
        let selector = match region {
            PageRegion::Container => &self.selectors.container,
            PageRegion::HeroImage => &self.selectors.hero_image,
            PageRegion::Badge => &self.selectors.badge,
        };
        self.query(selector)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_html(&self, selector: &str) -> Option<HtmlElement> {
        self.query(selector)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    }

    fn root_element(&self) -> Option<HtmlElement> {
        self.document
            .document_element()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    }

    fn scroll_top(&self) -> f64 {
        self.window.page_y_offset().unwrap_or_else(|_| {
            self.document
                .document_element()
                .map(|element| f64::from(element.scroll_top()))
                .unwrap_or(0.0)
        })
    }

    fn now(&self) -> f64 {
        now_ms(&self.window)
    }
}

impl Drop for ResponsiveApp {
    fn drop(&mut self) {
        self.running = false;
        self.listeners.clear();
        self.image_listeners.clear();
    }
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

fn now_ms(window: &Window) -> f64 {
    window
        .performance()
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

fn touch_supported(window: &Window) -> bool {
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("ontouchstart")).unwrap_or(false)
}

fn first_touch_point(event: &web_sys::Event) -> Option<Vec2> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let touch = event.touches().get(0)?;
    Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
}

fn orientation_label(window: &Window) -> String {
    let Ok(screen) = window.screen() else {
        return "unknown".to_string();
    };
    match screen.orientation().type_() {
        Ok(kind) => orientation_type_str(kind).to_string(),
        Err(_) => "unknown".to_string(),
    }
}

fn orientation_type_str(kind: OrientationType) -> &'static str {
    match kind {
        OrientationType::PortraitPrimary => "portrait-primary",
        OrientationType::PortraitSecondary => "portrait-secondary",
        OrientationType::LandscapePrimary => "landscape-primary",
        OrientationType::LandscapeSecondary => "landscape-secondary",
        _ => "unknown",
    }
}
