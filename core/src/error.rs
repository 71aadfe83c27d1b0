//! Error taxonomy for the account façade.
//!
//! # Design
//! Each variant knows the status code and JSON body it is surfaced with.
//! `BackendReportedFailure` is a transparent relay: it carries the backend's
//! own status and (re-indented) body bytes and nothing is interpreted. Every other
//! variant is reported as an `ErrorEnvelope` holding the diagnostic text.

use crate::http::StatusClass;
use crate::types::ErrorEnvelope;

/// Status used when the backend could not be reached at all.
pub const UNREACHABLE_STATUS: u16 = 502;

/// Errors produced while translating a call to or from the backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The inbound body does not parse into the public request shape.
    #[error("{0}")]
    MalformedInput(String),

    /// The backend could not be reached (connect failure, timeout).
    #[error("{0}")]
    BackendUnreachable(String),

    /// The backend answered 2xx with a body that does not match its contract.
    #[error("{0}")]
    BackendContractViolation(String),

    /// The backend answered with a non-2xx status.
    #[error("backend returned HTTP {status}")]
    BackendReportedFailure { status: u16, body: Vec<u8> },

    /// An outbound payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    /// Status code the caller sees for this error.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::MalformedInput(_) => 400,
            ApiError::BackendUnreachable(_) => UNREACHABLE_STATUS,
            ApiError::BackendContractViolation(_) | ApiError::SerializationError(_) => 500,
            ApiError::BackendReportedFailure { status, .. } => *status,
        }
    }

    pub fn status_class(&self) -> StatusClass {
        match self {
            ApiError::BackendUnreachable(_) => StatusClass::Unreachable,
            _ => StatusClass::Failure,
        }
    }

    /// Body the caller sees for this error.
    pub fn body(&self) -> Vec<u8> {
        match self {
            ApiError::BackendReportedFailure { body, .. } => body.clone(),
            other => {
                let envelope = ErrorEnvelope {
                    error_message: other.to_string(),
                };
                serde_json::to_vec(&envelope)
                    .unwrap_or_else(|_| br#"{"error_message":"internal error"}"#.to_vec())
            }
        }
    }
}

/// Re-indent a backend body with two spaces when it is valid JSON; otherwise
/// return it untouched. Key order and number literals survive because
/// serde_json is built with `preserve_order` and `arbitrary_precision`.
pub fn pretty_body(raw: &[u8]) -> Vec<u8> {
    match serde_json::from_slice::<serde_json::Value>(raw) {
        Ok(value) => serde_json::to_vec_pretty(&value).unwrap_or_else(|_| raw.to_vec()),
        Err(_) => raw.to_vec(),
    }
}
