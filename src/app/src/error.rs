//! Error taxonomy for requests issued by the core.
//!
//! Every variant is shown to the operator the same way: as an error notification
//! carrying the `Display` text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a request against the device API, or of a client-side check
/// performed before a request would have been sent.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum RequestError {
    /// The request never reached the device or no response came back.
    #[error("{0}")]
    NetworkFailure(String),

    /// The device answered with a non-2xx status.
    #[error("{message}")]
    ServerError { status: u16, message: String },

    /// Rejected on the client before submission, e.g. a missing form field.
    #[error("{0}")]
    ValidationFailure(String),
}

impl RequestError {
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            message: message.into(),
        }
    }
}

pub type RequestResult<T> = Result<T, RequestError>;
