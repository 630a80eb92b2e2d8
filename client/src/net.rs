use std::cell::RefCell;

use js_sys::{Function, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, HtmlFormElement, ProgressEvent, XmlHttpRequest};

use ballplot_shared::{RunResponse, CODE_INPUT_FIELD};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RunError {
    #[error("Server returned status {0}! See console for details.")]
    Status(u16),
    #[error("Request resulted in an error. See console for details.")]
    Network,
    #[error("Request resulted in a timeout. See console for details.")]
    Timeout,
    #[error("Server response could not be read ({0}). See console for details.")]
    Decode(String),
}

/// How a single request ended, before its body is interpreted.
#[derive(Clone, Debug, PartialEq)]
pub enum Transport {
    Loaded { status: u16, body: String },
    Failed,
    TimedOut,
}

pub struct Exchange {
    pub transport: Transport,
    pub request: XmlHttpRequest,
}

pub fn classify(status: u16, body: &str) -> Result<RunResponse, RunError> {
    if status != 200 {
        return Err(RunError::Status(status));
    }
    serde_json::from_str(body).map_err(|error| RunError::Decode(error.to_string()))
}

pub fn settle(transport: &Transport) -> Result<RunResponse, RunError> {
    match transport {
        Transport::Loaded { status, body } => classify(*status, body),
        Transport::Failed => Err(RunError::Network),
        Transport::TimedOut => Err(RunError::Timeout),
    }
}

pub fn build_form_data(form: &HtmlFormElement, code_input: &str) -> Result<FormData, JsValue> {
    let data = FormData::new_with_form(form)?;
    data.append_with_str(CODE_INPUT_FIELD, code_input)?;
    Ok(data)
}

const OUTCOMES: [&str; 3] = ["load", "error", "timeout"];

/// Posts `body` and resolves once the request loads, fails or times out.
/// There is no way to abort it.
pub async fn send_run(
    endpoint: &str,
    body: &FormData,
    timeout_ms: u32,
) -> Result<Exchange, JsValue> {
    let request = XmlHttpRequest::new()?;
    let listeners = RefCell::new(Vec::with_capacity(OUTCOMES.len()));
    let done = Promise::new(&mut |resolve: Function, _reject: Function| {
        for outcome in OUTCOMES {
            let resolve = resolve.clone();
            let listener = Closure::<dyn FnMut(ProgressEvent)>::new(move |_| {
                let _ = resolve.call1(&JsValue::NULL, &JsValue::from_str(outcome));
            });
            listeners.borrow_mut().push((outcome, listener));
        }
    });
    for (outcome, listener) in listeners.borrow().iter() {
        request.add_event_listener_with_callback(outcome, listener.as_ref().unchecked_ref())?;
    }

    request.open("POST", endpoint)?;
    request.set_timeout(timeout_ms);
    request.send_with_opt_form_data(Some(body))?;

    let outcome = JsFuture::from(done).await?;

    for (outcome, listener) in listeners.borrow().iter() {
        let _ = request
            .remove_event_listener_with_callback(outcome, listener.as_ref().unchecked_ref());
    }

    let transport = match outcome.as_string().as_deref() {
        Some("load") => Transport::Loaded {
            status: request.status()?,
            body: request.response_text()?.unwrap_or_default(),
        },
        Some("timeout") => Transport::TimedOut,
        _ => Transport::Failed,
    };
    Ok(Exchange { transport, request })
}
