//! Chart Rendering
//!
//! Doughnut charts and the lifecycle that keeps one live chart per canvas.

pub mod canvas;
pub mod chart_set;
pub mod doughnut;

pub use canvas::CanvasSurface;
pub use chart_set::ChartSet;
pub use doughnut::{segments, DoughnutChart, Segment, Surface};
