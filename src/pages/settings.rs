//! Settings Page
//!
//! API base and log level, persisted to local storage.

use leptos::*;

use crate::api::{FleetService, RestClient};
use crate::config::DashboardConfig;
use crate::state::use_global_state;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure the fleet dashboard"</p>
            </div>

            <ConnectionSettings />
        </div>
    }
}

/// Connection and logging settings
#[component]
fn ConnectionSettings() -> impl IntoView {
    let state = use_global_state();
    let config = state.config;

    let (api_base, set_api_base) = create_signal(config.with_untracked(|c| c.api_base.clone()));
    let (log_level, set_log_level) = create_signal(config.with_untracked(|c| c.log_level.clone()));
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);
    let (save_status, set_save_status) = create_signal(None::<String>);

    let draft = move || {
        DashboardConfig {
            api_base: api_base.get_untracked(),
            log_level: log_level.get_untracked(),
        }
        .normalized()
    };

    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        let service = FleetService::new(RestClient::new(draft().api_base));
        spawn_local(async move {
            match service.chart_stats().await {
                Ok(_) => {
                    tracing::info!(base = %service.client().base(), "Connection test succeeded");
                    set_test_result.set(Some(true));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Connection test failed");
                    set_test_result.set(Some(false));
                }
            }
            set_testing.set(false);
        });
    };

    let save = move |_| {
        let updated = draft();
        match updated.save() {
            Ok(()) => {
                tracing::info!(api_base = %updated.api_base, log_level = %updated.log_level, "Saved settings");
                set_api_base.set(updated.api_base.clone());
                set_log_level.set(updated.log_level.clone());
                config.set(updated);
                set_save_status.set(Some("Saved. Log level changes apply after reload.".to_string()));
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save settings");
                set_save_status.set(Some(format!("Save failed: {}", e)));
            }
        }
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <div class="space-y-4">
                // API base
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Fleet API URL"</label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            prop:value=move || api_base.get()
                            on:input=move |ev| set_api_base.set(event_target_value(&ev))
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=test_connection
                            disabled=move || testing.get()
                            class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if testing.get() { "Testing..." } else { "Test" }}
                        </button>
                    </div>
                </div>

                // Log level
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Log level"</label>
                    <input
                        type="text"
                        placeholder="info"
                        prop:value=move || log_level.get()
                        on:input=move |ev| set_log_level.set(event_target_value(&ev))
                        class="w-full max-w-xs bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Connection status
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400">"Status:"</span>
                    {move || {
                        match test_result.get() {
                            Some(true) => view! {
                                <span class="text-green-400">"✓ Connected"</span>
                            }.into_view(),
                            Some(false) => view! {
                                <span class="text-red-400">"✕ Failed"</span>
                            }.into_view(),
                            None => view! {
                                <span class="text-gray-400">"Not tested"</span>
                            }.into_view(),
                        }
                    }}
                </div>

                <div class="flex items-center justify-between">
                    <span class="text-sm text-gray-400">{move || save_status.get().unwrap_or_default()}</span>
                    <button
                        on:click=save
                        class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                               rounded-lg font-medium transition-colors"
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </section>
    }
}
