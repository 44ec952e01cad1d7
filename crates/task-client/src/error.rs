//! Client Errors

use thiserror::Error;

/// Failure of a single backend call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401 from the backend; the stored session is no longer valid
    #[error("unauthorized")]
    Unauthorized,
    /// Any other non-2xx response
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape
    #[error("decode error: {0}")]
    Decode(String),
    #[error("encode error: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
