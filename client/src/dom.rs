use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlImageElement,
    HtmlSelectElement,
};

pub fn query<T: JsCast>(document: &Document, selector: &str) -> Result<T, JsValue> {
    let element = document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {selector}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {selector}")))
}

/// The elements the page markup has to provide.
pub struct Page {
    pub output: HtmlElement,
    pub graphic: HtmlImageElement,
    pub plot: Element,
    pub form: HtmlFormElement,
    pub run_button: HtmlButtonElement,
    pub image_select: HtmlSelectElement,
}

impl Page {
    pub fn locate(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            output: query(document, ".code-output")?,
            graphic: query(document, ".graphic")?,
            plot: query(document, ".plot")?,
            form: query(document, "form")?,
            run_button: query(document, "button")?,
            image_select: query(document, "select")?,
        })
    }
}

pub fn set_busy(button: &HtmlButtonElement, busy: bool) {
    let value = if busy { "true" } else { "false" };
    let _ = button.set_attribute("aria-busy", value);
}
