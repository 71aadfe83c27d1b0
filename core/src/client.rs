//! Stateless request and response translators for the account backend.
//!
//! # Design
//! `AccountClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that turns a public
//! call into an `HttpRequest` for the backend and a `parse_*` method that turns
//! the backend's `HttpResponse` into a public `Reply`. The caller executes the
//! actual HTTP round-trip in between.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{pretty_body, ApiError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, StatusClass};
use crate::types::{
    AccountData, BackendEnvelope, CreateAccountRequest, CreateAccountResult,
    DeleteAccountResult, FetchAccountResult, ACCOUNT_TYPE,
};

/// Version sent on delete when the caller does not supply one.
pub const DEFAULT_VERSION: &str = "0";

/// Everything outside the RFC 3986 unreserved set is escaped.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Encode an account identifier as exactly one path segment.
fn encode_segment(segment: &str) -> String {
    match segment {
        "." => "%2E".to_string(),
        ".." => "%2E%2E".to_string(),
        _ => utf8_percent_encode(segment, UNRESERVED).to_string(),
    }
}

/// A translated public response: outward status plus typed body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply<T> {
    pub status: u16,
    pub body: T,
}

impl<T: Serialize> Reply<T> {
    /// Serialize the body, keeping the status.
    pub fn into_json(self) -> Result<(u16, String), ApiError> {
        let body =
            serde_json::to_string(&self.body).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok((self.status, body))
    }
}

/// Synchronous, stateless translator between the public account API and the
/// backend account API.
#[derive(Debug, Clone)]
pub struct AccountClient {
    base_url: String,
}

impl AccountClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Parse an inbound create body into the public request shape.
    pub fn decode_create_request(&self, body: &[u8]) -> Result<CreateAccountRequest, ApiError> {
        serde_json::from_slice(body).map_err(|e| ApiError::MalformedInput(e.to_string()))
    }

    pub fn build_fetch_account(&self, account_id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{}", self.base_url, encode_segment(account_id)),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Build the backend create request under a freshly generated identifier.
    pub fn build_create_account(&self, input: &CreateAccountRequest) -> Result<HttpRequest, ApiError> {
        self.build_create_account_with_id(input, Uuid::new_v4())
    }

    pub fn build_create_account_with_id(
        &self,
        input: &CreateAccountRequest,
        id: Uuid,
    ) -> Result<HttpRequest, ApiError> {
        let envelope = BackendEnvelope {
            data: AccountData {
                id: id.hyphenated().to_string(),
                kind: ACCOUNT_TYPE.to_string(),
                organisation_id: input.organisation_id.clone(),
                attributes: input.attributes.clone(),
                ..Default::default()
            },
            links: None,
        };
        let body = serde_json::to_string(&envelope).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.base_url.clone(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Build the backend delete request. A missing or empty version becomes
    /// `DEFAULT_VERSION`.
    pub fn build_delete_account(&self, account_id: &str, version: Option<&str>) -> HttpRequest {
        let version = version.filter(|v| !v.is_empty()).unwrap_or(DEFAULT_VERSION);
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!(
                "{}/{}?version={}",
                self.base_url,
                encode_segment(account_id),
                utf8_percent_encode(version, UNRESERVED)
            ),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_fetch_account(&self, response: HttpResponse) -> Result<Reply<FetchAccountResult>, ApiError> {
        let status = check_status(&response)?;
        let envelope = parse_envelope(&response.body)?;
        Ok(Reply {
            status,
            body: FetchAccountResult {
                created_on: envelope.data.created_on,
                attributes: envelope.data.attributes,
            },
        })
    }

    pub fn parse_create_account(&self, response: HttpResponse) -> Result<Reply<CreateAccountResult>, ApiError> {
        let status = check_status(&response)?;
        let envelope = parse_envelope(&response.body)?;
        Ok(Reply {
            status,
            body: CreateAccountResult {
                account_id: envelope.data.id,
                created_on: envelope.data.created_on,
                attributes: envelope.data.attributes,
            },
        })
    }

    /// The backend body is ignored on success; the outward status is always 200.
    pub fn parse_delete_account(
        &self,
        account_id: &str,
        response: HttpResponse,
    ) -> Result<Reply<DeleteAccountResult>, ApiError> {
        check_status(&response)?;
        Ok(Reply {
            status: 200,
            body: DeleteAccountResult {
                message: format!("Account ID {account_id} removed with success"),
                success: true,
            },
        })
    }
}

/// Pass 2xx statuses through; relay anything else with the backend's body.
fn check_status(response: &HttpResponse) -> Result<u16, ApiError> {
    match response.status_class() {
        StatusClass::Success => Ok(response.status),
        _ => Err(ApiError::BackendReportedFailure {
            status: response.status,
            body: pretty_body(&response.body),
        }),
    }
}

fn parse_envelope(body: &[u8]) -> Result<BackendEnvelope, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::BackendContractViolation(e.to_string()))
}
