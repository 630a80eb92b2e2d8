use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event};

use crate::bridge::{complete, Completion};
use crate::config::ClientConfig;
use crate::dom::{set_busy, Page};
use crate::editor::{Editor, EditorSettings};
use crate::net::{build_form_data, send_run, RunError};
use crate::notify::{BrowserNotifier, Notifier};
use crate::render::PlotSurface;
use crate::state::ViewModel;

const EDITOR_ID: &str = "editor";

fn document_ready_state(document: &Document) -> Option<String> {
    Reflect::get(document.as_ref(), &JsValue::from_str("readyState"))
        .ok()?
        .as_string()
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let started = Rc::new(Cell::new(false));

    if document_ready_state(&document).as_deref() == Some("complete") {
        started.set(true);
        return start_app();
    }

    let onload_started = started.clone();
    let onload = Closure::<dyn FnMut(Event)>::new(move |_| {
        if onload_started.replace(true) {
            return;
        }
        if let Err(err) = start_app() {
            web_sys::console::error_1(&err);
        }
    });
    window.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())?;
    onload.forget();

    Ok(())
}

fn start_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;

    let config = Rc::new(ClientConfig::from_window(&window));
    let notifier = Rc::new(BrowserNotifier::new(window.clone(), config.debug));
    notifier.trace(&format!(
        "ballplot starting endpoint={} timeout_ms={}",
        config.endpoint, config.timeout_ms
    ));

    let page = Page::locate(&document)?;
    let editor = Editor::attach(EDITOR_ID, &EditorSettings::default())?;

    let view = Rc::new(RefCell::new(ViewModel::new(&page.image_select.value())));
    let surface = Rc::new(RefCell::new(PlotSurface::new(
        document.clone(),
        page.plot.clone(),
        page.graphic.clone(),
        &config.marker_src,
    )));
    let in_flight = Rc::new(Cell::new(0u32));

    {
        let view = view.clone();
        let config = config.clone();
        let notifier = notifier.clone();
        let select = page.image_select.clone();
        let graphic = page.graphic.clone();
        let onchange = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut view = view.borrow_mut();
            view.select_image(&select.value());
            let src = view.image_src(&config.image_extension);
            notifier.trace(&format!("image selected src={src}"));
            graphic.set_src(&src);
        });
        page.image_select
            .add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
        onchange.forget();
    }

    {
        let select = page.image_select.clone();
        let form = page.form.clone();
        let button = page.run_button.clone();
        let output = page.output.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();

            let (seq, code_input) = {
                let mut view = view.borrow_mut();
                view.select_image(&select.value());
                (view.begin_submission(), view.code_input(&editor.value()))
            };
            let body = match build_form_data(&form, &code_input) {
                Ok(body) => body,
                Err(err) => {
                    notifier.diagnose_value("Could not build the request form", &err);
                    notifier.alert(&RunError::Network.to_string());
                    return;
                }
            };
            notifier.trace(&format!("run #{seq} POST {}", config.endpoint));

            in_flight.set(in_flight.get() + 1);
            set_busy(&button, true);

            let config = config.clone();
            let notifier = notifier.clone();
            let view = view.clone();
            let surface = surface.clone();
            let in_flight = in_flight.clone();
            let button = button.clone();
            let mut output = output.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let exchange = send_run(&config.endpoint, &body, config.timeout_ms).await;

                in_flight.set(in_flight.get().saturating_sub(1));
                if in_flight.get() == 0 {
                    set_busy(&button, false);
                }

                let exchange = match exchange {
                    Ok(exchange) => exchange,
                    Err(err) => {
                        notifier.diagnose_value(&format!("run #{seq} could not be sent"), &err);
                        notifier.alert(&RunError::Network.to_string());
                        return;
                    }
                };
                let completion = complete(
                    seq,
                    &exchange.transport,
                    &mut view.borrow_mut(),
                    &mut *surface.borrow_mut(),
                    &mut output,
                    &*notifier,
                );
                match completion {
                    Ok(Completion::Failed(_)) => {
                        notifier
                            .diagnose_value(&format!("run #{seq} request"), exchange.request.as_ref());
                    }
                    Ok(Completion::Rendered(_)) => {}
                    Err(err) => {
                        notifier.diagnose_value(&format!("run #{seq} render failed"), &err);
                    }
                }
            });
        });
        page.run_button
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    Ok(())
}
