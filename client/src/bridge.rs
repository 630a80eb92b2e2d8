use wasm_bindgen::JsValue;

use crate::net::{settle, RunError, Transport};
use crate::notify::Notifier;
use crate::render::{present, MarkerSurface, OutputSink, RenderReport};
use crate::state::ViewModel;

#[derive(Debug, PartialEq)]
pub enum Completion {
    Rendered(RenderReport),
    Failed(RunError),
}

/// Finishes one submission: a good response replaces the view and is rendered,
/// anything else is alerted once and leaves the page as it was.
pub fn complete(
    seq: u32,
    transport: &Transport,
    view: &mut ViewModel,
    surface: &mut impl MarkerSurface,
    output: &mut impl OutputSink,
    notifier: &impl Notifier,
) -> Result<Completion, JsValue> {
    match settle(transport) {
        Ok(response) => {
            view.apply_response(response);
            let report = present(view, surface, output, notifier)?;
            notifier.trace(&format!(
                "run #{seq}: placed {} marker(s), rejected {}, {} on screen",
                report.placed,
                report.rejected,
                surface.marker_count()
            ));
            Ok(Completion::Rendered(report))
        }
        Err(error) => {
            notifier.alert(&error.to_string());
            notifier.diagnose(&format!("run #{seq} failed: {error:?}"));
            Ok(Completion::Failed(error))
        }
    }
}
