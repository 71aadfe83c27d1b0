//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network; the façade executes the actual I/O and reports
//! a transport failure as `ApiError::BackendUnreachable` instead of a
//! response, so there is never a status code to read from an absent reply.

/// HTTP method for a backend request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Outcome class of a backend round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// The backend answered with a 2xx status.
    Success,
    /// The backend answered with any other status.
    Failure,
    /// No response was received at all (connect error, timeout).
    Unreachable,
}

/// A backend request described as plain data.
///
/// Built by `AccountClient::build_*` methods. The caller is responsible for
/// executing this request against the network and returning the corresponding
/// `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A backend response described as plain data, with the body fully read.
/// The body is kept as raw bytes so non-UTF-8 error bodies can be relayed.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn status_class(&self) -> StatusClass {
        if (200..300).contains(&self.status) {
            StatusClass::Success
        } else {
            StatusClass::Failure
        }
    }
}
