//! # Fleet Dashboard
//!
//! Browser dashboard for fleet operations, built with Leptos (WASM).
//!
//! ## Modules
//!
//! - [`stats`]: Capacity percentages for the doughnut charts
//! - [`render`]: Doughnut chart drawing over a pluggable surface
//! - [`filter`]: Keystroke search over the afternoon-shift table
//! - [`form`]: Add-user form state machine and validation
//! - [`menu`]: Sidebar tree and active-route matching
//! - [`api`]: REST client and fleet resources
//!
//! Everything outside `app`, `components` and `pages` is plain Rust and
//! can be tested without a browser.

pub mod api;
pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod export;
pub mod filter;
pub mod form;
pub mod logging;
pub mod menu;
pub mod pages;
pub mod render;
pub mod state;
pub mod stats;

pub use app::App;
pub use config::{ConfigError, DashboardConfig};
