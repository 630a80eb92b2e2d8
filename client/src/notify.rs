use wasm_bindgen::JsValue;
use web_sys::Window;

/// User-facing failure reporting plus console diagnostics.
pub trait Notifier {
    /// Blocking, modal notification.
    fn alert(&self, message: &str);
    fn diagnose(&self, detail: &str);
    /// Verbose log, only emitted in debug mode.
    fn trace(&self, message: &str);
}

pub struct BrowserNotifier {
    window: Window,
    debug: bool,
}

impl BrowserNotifier {
    pub fn new(window: Window, debug: bool) -> Self {
        Self { window, debug }
    }

    pub fn diagnose_value(&self, label: &str, value: &JsValue) {
        web_sys::console::error_2(&JsValue::from_str(label), value);
    }
}

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        if self.window.alert_with_message(message).is_err() {
            web_sys::console::error_1(&format!("alert failed: {message}").into());
        }
    }

    fn diagnose(&self, detail: &str) {
        web_sys::console::error_1(&detail.into());
    }

    fn trace(&self, message: &str) {
        if self.debug {
            web_sys::console::log_1(&message.into());
        }
    }
}
