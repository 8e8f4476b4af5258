//! Doughnut Chart
//!
//! Two-segment radial chart (value, remainder) with the percentage drawn in
//! the middle.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Value segment color
pub const VALUE_COLOR: &str = "#00C5D6";
/// Remainder segment color
pub const REMAINDER_COLOR: &str = "#1F1D2B";
/// Inner radius as a fraction of the outer radius
pub const CUTOUT: f64 = 0.9;
/// Center label font
pub const LABEL_FONT: &str = "bold 16px Poppins";

/// Something a chart can draw on
pub trait Surface {
    /// Drawable width and height in pixels
    fn size(&self) -> (f64, f64);

    fn clear(&mut self);

    /// Fill the ring between `inner` and `outer` radii from `start` to `end`
    /// (radians, clockwise)
    fn fill_ring_segment(
        &mut self,
        center: (f64, f64),
        outer: f64,
        inner: f64,
        start: f64,
        end: f64,
        color: &str,
    );

    /// Draw text centered on `at`
    fn fill_centered_text(&mut self, text: &str, at: (f64, f64), font: &str, color: &str);
}

/// One arc of the doughnut
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub value: u8,
    pub start: f64,
    pub end: f64,
    pub color: &'static str,
}

/// Value and remainder arcs, starting at 12 o'clock
pub fn segments(percentage: u8) -> [Segment; 2] {
    let value = percentage.min(100);
    let start = -FRAC_PI_2;
    let split = start + TAU * f64::from(value) / 100.0;

    [
        Segment {
            value,
            start,
            end: split,
            color: VALUE_COLOR,
        },
        Segment {
            value: 100 - value,
            start: split,
            end: start + TAU,
            color: REMAINDER_COLOR,
        },
    ]
}

/// A rendered chart that owns its surface until destroyed
#[derive(Debug)]
pub struct DoughnutChart<S: Surface> {
    surface: S,
    percentage: u8,
    label: String,
}

impl<S: Surface> DoughnutChart<S> {
    /// Draw a new chart on `surface`
    pub fn create(surface: S, percentage: u8, label: impl Into<String>) -> Self {
        let mut chart = Self {
            surface,
            percentage: percentage.min(100),
            label: label.into(),
        };
        chart.draw();
        chart
    }

    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn center_text(&self) -> String {
        format!("{}%", self.percentage)
    }

    fn draw(&mut self) {
        let (width, height) = self.surface.size();
        let center = (width / 2.0, height / 2.0);
        let outer = width.min(height) / 2.0;
        let inner = outer * CUTOUT;

        self.surface.clear();

        for segment in segments(self.percentage) {
            if segment.value == 0 {
                continue;
            }
            self.surface
                .fill_ring_segment(center, outer, inner, segment.start, segment.end, segment.color);
        }

        let text = self.center_text();
        self.surface
            .fill_centered_text(&text, center, LABEL_FONT, VALUE_COLOR);
    }

    /// Clear the surface and hand it back
    pub fn destroy(mut self) -> S {
        self.surface.clear();
        self.surface
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::Surface;

    /// Drawing call captured by [`RecordingSurface`]
    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Clear,
        Segment { color: String, start: f64, end: f64 },
        Text(String),
    }

    /// Surface that records draw calls into a shared log
    #[derive(Debug, Clone, Default)]
    pub struct RecordingSurface {
        pub ops: Rc<RefCell<Vec<Op>>>,
    }

    impl RecordingSurface {
        pub fn ops(&self) -> Vec<Op> {
            self.ops.borrow().clone()
        }

        pub fn clears(&self) -> usize {
            self.ops.borrow().iter().filter(|op| **op == Op::Clear).count()
        }

        pub fn last_text(&self) -> Option<String> {
            self.ops.borrow().iter().rev().find_map(|op| match op {
                Op::Text(text) => Some(text.clone()),
                _ => None,
            })
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (f64, f64) {
            (200.0, 200.0)
        }

        fn clear(&mut self) {
            self.ops.borrow_mut().push(Op::Clear);
        }

        fn fill_ring_segment(
            &mut self,
            _center: (f64, f64),
            _outer: f64,
            _inner: f64,
            start: f64,
            end: f64,
            color: &str,
        ) {
            self.ops.borrow_mut().push(Op::Segment {
                color: color.to_string(),
                start,
                end,
            });
        }

        fn fill_centered_text(&mut self, text: &str, _at: (f64, f64), _font: &str, _color: &str) {
            self.ops.borrow_mut().push(Op::Text(text.to_string()));
        }
    }
}
