//! Request and response translation core for the account façade.
//!
//! # Overview
//! Builds backend `HttpRequest` values from public calls and turns backend
//! `HttpResponse` values into public replies, without touching the network
//! (host-does-IO pattern). The façade executes the round-trip in between.
//!
//! # Design
//! - `AccountClient` is stateless: it holds only `base_url`, so it is safe to
//!   share across concurrent calls.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O boundary
//!   is explicit.
//! - Public and backend schemas are distinct types joined only by the
//!   translators.
//! - Non-2xx backend responses are relayed verbatim through
//!   `ApiError::BackendReportedFailure`.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{AccountClient, Reply, DEFAULT_VERSION};
pub use error::{ApiError, UNREACHABLE_STATUS};
pub use http::{HttpMethod, HttpRequest, HttpResponse, StatusClass};
pub use types::{
    AccountAttributes, AccountData, BackendEnvelope, CreateAccountRequest, CreateAccountResult,
    DeleteAccountResult, ErrorEnvelope, FetchAccountResult, Links, UserDefinedDatum,
};
