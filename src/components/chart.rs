//! Chart Component
//!
//! Grid of doughnut charts, one canvas per capacity stat.

use leptos::*;

use crate::render::{CanvasSurface, ChartSet};
use crate::stats::ChartPercentage;

/// Canvas edge length in pixels
const CANVAS_SIZE: u32 = 160;

/// Doughnut chart grid component
#[component]
pub fn ChartGrid(
    /// Percentages to render, one chart each
    #[prop(into)]
    stats: Signal<Vec<ChartPercentage>>,
) -> impl IntoView {
    let container_ref = create_node_ref::<html::Div>();
    let charts = store_value(ChartSet::<CanvasSurface>::new());

    // Rebuild all charts whenever the stats change. Deferred a frame so the
    // canvases for the new stats are in the DOM first.
    create_effect(move |_| {
        let stats = stats.get();
        request_animation_frame(move || {
            let surfaces = container_ref
                .get_untracked()
                .map(|container| CanvasSurface::collect(&container))
                .unwrap_or_default();
            charts.try_update_value(|set| set.rebuild(surfaces, &stats));
        });
    });

    on_cleanup(move || {
        charts.try_update_value(|set| set.destroy_all());
    });

    view! {
        <div node_ref=container_ref class="grid grid-cols-2 md:grid-cols-4 gap-4">
            {move || {
                stats.get()
                    .into_iter()
                    .map(|stat| view! {
                        <div class="bg-gray-800 rounded-xl p-4 flex flex-col items-center">
                            <canvas
                                width=CANVAS_SIZE
                                height=CANVAS_SIZE
                                class="w-40 h-40"
                                aria-label=format!("{}: {}%", stat.label, stat.value)
                            />
                            <span class="mt-3 text-sm text-gray-300">{stat.label}</span>
                        </div>
                    })
                    .collect_view()
            }}
        </div>
    }
}
