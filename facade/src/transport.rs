//! Executes core `HttpRequest`s against the backend.
//!
//! # Design
//! `Backend` is the seam between the handlers and the network. `UreqBackend`
//! is the production implementation: a blocking ureq agent with a global
//! timeout. The response body is read to the end inside `execute`, so the
//! connection goes back to the agent's pool on every exit path. The body is
//! kept as bytes; whether it must be UTF-8 JSON is decided by the core. Any
//! failure before a complete response is read becomes
//! `ApiError::BackendUnreachable`.

use std::time::Duration;

use account_core::{ApiError, HttpMethod, HttpRequest, HttpResponse};
use tracing::debug;

/// One blocking backend round trip.
pub trait Backend: Send + Sync + 'static {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct UreqBackend {
    agent: ureq::Agent,
}

impl UreqBackend {
    pub fn new(timeout: Duration) -> Self {
        // Non-2xx statuses are data here; the core decides what they mean.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

fn with_headers<B>(mut builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Backend for UreqBackend {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), url = %request.path, "calling backend");

        let sent = match (request.method, request.body) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(&request.path), &request.headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(&request.path), &request.headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&request.path), &request.headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(self.agent.post(&request.path), &request.headers).send_empty(),
        };
        let mut response = sent.map_err(|e| ApiError::BackendUnreachable(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| ApiError::BackendUnreachable(e.to_string()))?;

        debug!(status, bytes = body.len(), "backend responded");
        Ok(HttpResponse { status, body })
    }
}
