//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Sidebar;
use crate::config::DashboardConfig;
use crate::menu::{ADD_USER_ROUTE, AFTERNOON_SHIFT_ROUTE, DASHBOARD_ROUTE, SETTINGS_ROUTE};
use crate::pages::{AddUser, AfternoonShift, Dashboard, Settings};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    // Provide global state to all components
    provide_global_state(config);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex">
                <Sidebar />

                // Main content area
                <main class="flex-1 px-6 py-8 overflow-x-hidden">
                    <Routes>
                        <Route path="/" view=|| view! { <Redirect path=DASHBOARD_ROUTE /> } />
                        <Route path=DASHBOARD_ROUTE view=Dashboard />
                        <Route path=AFTERNOON_SHIFT_ROUTE view=|| view! { <AfternoonShift /> } />
                        <Route path=ADD_USER_ROUTE view=AddUser />
                        <Route path=SETTINGS_ROUTE view=Settings />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=DASHBOARD_ROUTE
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
