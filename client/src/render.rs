use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use ballplot_shared::Ball;

use crate::geometry::{map_ball, ImageMetrics, Offset};
use crate::notify::Notifier;
use crate::state::ViewModel;

pub const MARKER_CLASS: &str = "cursor";

/// Where markers live: a container holding the reference image.
pub trait MarkerSurface {
    fn image_metrics(&self) -> ImageMetrics;
    fn marker_count(&self) -> usize;
    fn clear_markers(&mut self) -> Result<(), JsValue>;
    /// Inserts a marker right before the reference image, positioned at `offset`.
    fn add_marker(&mut self, offset: Offset) -> Result<(), JsValue>;
}

pub trait OutputSink {
    fn show_output(&mut self, text: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderReport {
    pub placed: usize,
    pub rejected: usize,
}

pub struct PlotSurface {
    document: Document,
    plot: Element,
    graphic: HtmlImageElement,
    marker_src: String,
}

impl PlotSurface {
    pub fn new(
        document: Document,
        plot: Element,
        graphic: HtmlImageElement,
        marker_src: &str,
    ) -> Self {
        Self {
            document,
            plot,
            graphic,
            marker_src: marker_src.to_string(),
        }
    }

    fn marker_selector() -> String {
        format!(".{MARKER_CLASS}")
    }
}

impl MarkerSurface for PlotSurface {
    fn image_metrics(&self) -> ImageMetrics {
        ImageMetrics {
            natural_width: self.graphic.natural_width() as f64,
            natural_height: self.graphic.natural_height() as f64,
            display_width: self.graphic.width() as f64,
            display_height: self.graphic.height() as f64,
        }
    }

    fn marker_count(&self) -> usize {
        self.document
            .query_selector_all(&Self::marker_selector())
            .map(|nodes| nodes.length() as usize)
            .unwrap_or(0)
    }

    fn clear_markers(&mut self) -> Result<(), JsValue> {
        let markers = self.document.query_selector_all(&Self::marker_selector())?;
        for index in 0..markers.length() {
            let Some(marker) = markers.item(index) else {
                continue;
            };
            if let Some(parent) = marker.parent_node() {
                parent.remove_child(&marker)?;
            }
        }
        Ok(())
    }

    fn add_marker(&mut self, offset: Offset) -> Result<(), JsValue> {
        let marker: HtmlElement = self.document.create_element("img")?.dyn_into()?;
        marker.set_class_name(MARKER_CLASS);
        marker.set_attribute("src", &self.marker_src)?;
        let style = marker.style();
        style.set_property("top", &offset.top_px())?;
        style.set_property("left", &offset.left_px())?;
        self.plot.insert_before(&marker, Some(self.graphic.as_ref()))?;
        Ok(())
    }
}

impl OutputSink for HtmlElement {
    fn show_output(&mut self, text: &str) {
        self.set_inner_text(text);
    }
}

pub fn clear_all(surface: &mut impl MarkerSurface) -> Result<(), JsValue> {
    surface.clear_markers()
}

/// Places one marker per in-bounds ball, in order. Out-of-bounds balls are
/// alerted and get no marker.
pub fn render_all(
    surface: &mut impl MarkerSurface,
    balls: &[Ball],
    notifier: &impl Notifier,
) -> Result<RenderReport, JsValue> {
    let mut report = RenderReport::default();
    for ball in balls {
        let metrics = surface.image_metrics();
        match map_ball(*ball, &metrics) {
            Ok(offset) => {
                notifier.trace(&format!(
                    "Scaled cursor offset: y={}, x={}",
                    offset.top, offset.left
                ));
                surface.add_marker(offset)?;
                report.placed += 1;
            }
            Err(error) => {
                notifier.alert(&error.to_string());
                report.rejected += 1;
            }
        }
    }
    Ok(report)
}

pub fn present(
    view: &ViewModel,
    surface: &mut impl MarkerSurface,
    output: &mut impl OutputSink,
    notifier: &impl Notifier,
) -> Result<RenderReport, JsValue> {
    clear_all(surface)?;
    output.show_output(&view.stdout);
    render_all(surface, &view.balls, notifier)
}
