//! REST API Layer
//!
//! Generic JSON client plus the fleet resources built on it.

pub mod client;
pub mod error;
pub mod service;

pub use client::RestClient;
pub use error::{ApiError, ApiResult};
pub use service::{load_user_form_data, or_empty, FleetService, UserApi, UserFormData};
