//! Pages
//!
//! Top-level page components for each route.

pub mod add_user;
pub mod afternoon_shift;
pub mod dashboard;
pub mod settings;

pub use add_user::AddUser;
pub use afternoon_shift::AfternoonShift;
pub use dashboard::Dashboard;
pub use settings::Settings;
