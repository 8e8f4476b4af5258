//! API Error Types
//!
//! Transport failures surfaced by the REST client. Callers log these and keep
//! whatever state they already had.

use thiserror::Error;

/// REST client error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Request body could not be built
    #[error("Request build error: {0}")]
    Request(String),

    /// Backend answered with a non-2xx status
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body did not decode
    #[error("Parse error: {0}")]
    Parse(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
