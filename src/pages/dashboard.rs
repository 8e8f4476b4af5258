//! Dashboard Page
//!
//! Capacity doughnuts, count tiles and the embedded shift table.

use leptos::*;

use crate::api::or_empty;
use crate::components::{ChartGrid, CountCard, Loading};
use crate::pages::AfternoonShift;
use crate::state::models::CountStat;
use crate::state::use_global_state;
use crate::stats::{self, ChartPercentage};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_global_state();

    let chart_stats = create_rw_signal(Vec::<ChartPercentage>::new());
    // `None` until the count fetch settles, either way
    let count_stats = create_rw_signal(None::<Vec<CountStat>>);

    // Independent fetches; either may fail without affecting the other
    let service = state.service();
    spawn_local(async move {
        match service.chart_stats().await {
            Ok(data) => {
                let percentages = stats::aggregate(&data);
                tracing::debug!(charts = percentages.len(), "Loaded chart stats");
                chart_stats.set(percentages);
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching chart stats");
            }
        }
    });

    let service = state.service();
    spawn_local(async move {
        let counts = or_empty(service.count_stats().await, "count stats");
        count_stats.set(Some(counts));
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Fleet capacity and shift activity at a glance"</p>
            </div>

            // Count tiles
            <section>
                <h2 class="text-lg font-semibold mb-4">"Overview"</h2>
                {move || match count_stats.get() {
                    Some(counts) => view! {
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            {counts
                                .into_iter()
                                .map(|stat| view! { <CountCard stat=stat /> })
                                .collect_view()}
                        </div>
                    }.into_view(),
                    None => view! { <Loading /> }.into_view(),
                }}
            </section>

            // Capacity doughnuts
            <section>
                <h2 class="text-lg font-semibold mb-4">"Capacity"</h2>
                <ChartGrid stats=chart_stats />
            </section>

            <AfternoonShift show_toolbar=false with_border=true />
        </div>
    }
}
