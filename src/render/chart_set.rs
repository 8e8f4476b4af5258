//! Chart Set
//!
//! Owns every live doughnut chart of a view. A rebuild always destroys the
//! previous charts before creating new ones, so no surface ever carries two
//! overlapping renders.

use super::doughnut::{DoughnutChart, Surface};
use crate::stats::ChartPercentage;

/// Live charts for one view
#[derive(Debug)]
pub struct ChartSet<S: Surface> {
    charts: Vec<DoughnutChart<S>>,
}

impl<S: Surface> Default for ChartSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> ChartSet<S> {
    pub fn new() -> Self {
        Self { charts: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    pub fn charts(&self) -> &[DoughnutChart<S>] {
        &self.charts
    }

    /// Destroy every live chart
    pub fn destroy_all(&mut self) {
        for chart in self.charts.drain(..) {
            chart.destroy();
        }
    }

    /// Replace the live charts with one chart per (surface, stat) pair.
    ///
    /// Returns the number of charts created. Missing surfaces or data are
    /// logged and leave the set empty.
    pub fn rebuild(&mut self, surfaces: Vec<S>, stats: &[ChartPercentage]) -> usize {
        self.destroy_all();

        if surfaces.is_empty() {
            tracing::warn!("No chart canvases available");
            return 0;
        }
        if stats.is_empty() {
            tracing::warn!("No chart stats available");
            return 0;
        }

        for (index, surface) in surfaces.into_iter().enumerate() {
            match stats.get(index) {
                Some(stat) => {
                    self.charts
                        .push(DoughnutChart::create(surface, stat.value, stat.label.clone()));
                }
                None => tracing::warn!(index, "Missing stat for chart canvas"),
            }
        }

        tracing::debug!(charts = self.charts.len(), "Rebuilt doughnut charts");
        self.charts.len()
    }
}

impl<S: Surface> Drop for ChartSet<S> {
    fn drop(&mut self) {
        self.destroy_all();
    }
}
