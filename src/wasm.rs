#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::web::{self, PageSelectors, ResponsiveApp};

#[wasm_bindgen(start)]
pub fn bootstrap() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Page-level entry point exported to JavaScript.
#[wasm_bindgen]
pub struct WasmApp {
    inner: Rc<RefCell<ResponsiveApp>>,
}

#[wasm_bindgen]
impl WasmApp {
    /// Wires the runtime to the current document using the default page
    /// selectors and applies the initial layout pass.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmApp, JsValue> {
        let inner = web::attach(PageSelectors::default())
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(Self { inner })
    }

    /// Starts the frame loop (FPS sampling and debounced layout passes).
    pub fn start(&self) -> Result<(), JsValue> {
        web::start(&self.inner).map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Cancels the frame loop. Event listeners stay attached until the app
    /// is dropped.
    pub fn stop(&self) {
        self.inner.borrow_mut().stop();
    }

    /// Current breakpoint snapshot as a JSON string.
    pub fn breakpoint(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.borrow().breakpoint())
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Environment capability snapshot as a JSON string.
    #[wasm_bindgen(js_name = deviceInfo)]
    pub fn device_info(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.borrow().device_info())
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}
