//! Global Application State
//!
//! Reactive state shared across pages using Leptos signals. Page data
//! (charts, vehicles, users) lives in page-local signals; only cross-cutting
//! concerns are kept here.

use leptos::*;

use crate::api::{FleetService, RestClient};
use crate::config::DashboardConfig;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Active configuration (API base, log level)
    pub config: RwSignal<DashboardConfig>,
    /// Sidebar collapsed flag, shared process-wide and never persisted
    pub sidebar_collapsed: RwSignal<bool>,
}

/// Provide global state to the component tree
pub fn provide_global_state(config: DashboardConfig) {
    let state = GlobalState {
        config: create_rw_signal(config),
        sidebar_collapsed: create_rw_signal(false),
    };

    provide_context(state);
}

/// Fetch the global state from context
pub fn use_global_state() -> GlobalState {
    expect_context::<GlobalState>()
}

impl GlobalState {
    /// Build a data service against the currently configured API base
    pub fn service(&self) -> FleetService {
        let base = self.config.with_untracked(|c| c.api_base.clone());
        FleetService::new(RestClient::new(base))
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_collapsed.update(|collapsed| *collapsed = !*collapsed);
    }
}
