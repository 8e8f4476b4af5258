//! Fleet Dashboard
//!
//! Client-side rendered Leptos application compiled to WebAssembly. It talks
//! to the fleet REST API over HTTP.

use fleet_dashboard::{logging, App, DashboardConfig};
use leptos::*;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let (config, load_error) = DashboardConfig::load();
    logging::init(&config.log_level);

    if let Some(e) = load_error {
        tracing::warn!(error = %e, "Using default config");
    }
    tracing::info!(api_base = %config.api_base, "Starting fleet dashboard");

    // Mount the app to the document body
    mount_to_body(move || view! { <App config=config /> });
}
