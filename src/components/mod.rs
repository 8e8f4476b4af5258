//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod count_card;
pub mod loading;
pub mod sidebar;

pub use chart::ChartGrid;
pub use count_card::CountCard;
pub use loading::Loading;
pub use sidebar::Sidebar;
