//! Rendering of core errors and JSON bodies as axum responses.

use account_core::{ApiError, StatusClass};
use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::warn;

/// Handler error: a core `ApiError` rendered as an axum response.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct FacadeError(#[from] pub ApiError);

impl IntoResponse for FacadeError {
    fn into_response(self) -> Response {
        let FacadeError(err) = self;
        match err.status_class() {
            StatusClass::Unreachable => warn!(error = %err, "backend unreachable"),
            _ => warn!(status = err.status(), error = %err, "call failed"),
        }
        json_response(err.status(), err.body())
    }
}

/// Build a JSON response. Status codes axum cannot represent become 502.
pub fn json_response(status: u16, body: impl Into<Body>) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, [(header::CONTENT_TYPE, "application/json")], body.into()).into_response()
}
