//! State Management
//!
//! Global application state and the domain records it carries.

pub mod global;
pub mod models;

pub use global::{provide_global_state, use_global_state, GlobalState};
pub use models::{
    Action, AfternoonShiftVehicle, ChartStat, CountStat, Department, Role, UserRecord,
};
