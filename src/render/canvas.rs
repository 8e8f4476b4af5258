//! Canvas Surface
//!
//! [`Surface`] backed by an HTML5 canvas 2D context.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use super::doughnut::Surface;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a canvas, or `None` when no 2D context is available
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    /// Every usable canvas below `root`, in document order
    pub fn collect(root: &Element) -> Vec<Self> {
        let Ok(nodes) = root.query_selector_all("canvas") else {
            return Vec::new();
        };

        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlCanvasElement>().ok())
            .filter_map(Self::new)
            .collect()
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_ring_segment(
        &mut self,
        center: (f64, f64),
        outer: f64,
        inner: f64,
        start: f64,
        end: f64,
        color: &str,
    ) {
        let (cx, cy) = center;
        self.ctx.begin_path();
        let _ = self.ctx.arc(cx, cy, outer, start, end);
        let _ = self.ctx.arc_with_anticlockwise(cx, cy, inner, end, start, true);
        self.ctx.close_path();
        self.ctx.set_fill_style(&color.into());
        self.ctx.fill();
    }

    fn fill_centered_text(&mut self, text: &str, at: (f64, f64), font: &str, color: &str) {
        self.ctx.save();
        self.ctx.set_font(font);
        self.ctx.set_fill_style(&color.into());
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        let _ = self.ctx.fill_text(text, at.0, at.1);
        self.ctx.restore();
    }
}
