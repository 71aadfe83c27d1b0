//! Method-based routing for the single account resource path.

use account_core::ErrorEnvelope;
use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::Method,
    response::{IntoResponse, Response},
};

use crate::error::json_response;
use crate::handlers::{self, AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Create,
    Delete,
}

impl Operation {
    pub fn for_method(method: &Method) -> Option<Self> {
        match method.as_str() {
            "GET" => Some(Operation::Fetch),
            "PUT" => Some(Operation::Create),
            "DELETE" => Some(Operation::Delete),
            _ => None,
        }
    }
}

/// Query parameters of the account path. Repeated keys keep their first
/// value; unknown keys are ignored.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AccountQuery {
    pub account_id: Option<String>,
    pub version: Option<String>,
}

impl AccountQuery {
    pub fn parse(raw: &str) -> Self {
        let mut query = Self::default();
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            let slot = match key.as_ref() {
                "account_id" => &mut query.account_id,
                "version" => &mut query.version,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        query
    }
}

pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    RawQuery(raw): RawQuery,
    body: Bytes,
) -> Response {
    let query = AccountQuery::parse(raw.as_deref().unwrap_or_default());
    let account_id = query.account_id.as_deref().unwrap_or_default();
    let result = match Operation::for_method(&method) {
        Some(Operation::Fetch) => handlers::fetch(&state, account_id).await,
        Some(Operation::Create) => handlers::create(&state, &body).await,
        Some(Operation::Delete) => handlers::delete(&state, account_id, query.version.as_deref()).await,
        None => return not_found(),
    };
    result.unwrap_or_else(IntoResponse::into_response)
}

fn not_found() -> Response {
    let body = serde_json::to_string(&ErrorEnvelope {
        error_message: "404 page not found".to_string(),
    })
    .unwrap_or_default();
    json_response(404, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods_map_to_operations() {
        assert_eq!(Operation::for_method(&Method::GET), Some(Operation::Fetch));
        assert_eq!(Operation::for_method(&Method::PUT), Some(Operation::Create));
        assert_eq!(Operation::for_method(&Method::DELETE), Some(Operation::Delete));
    }

    #[test]
    fn repeated_keys_keep_first_value() {
        let query = AccountQuery::parse("account_id=abc&account_id=def&version=2&version=3");
        assert_eq!(query.account_id.as_deref(), Some("abc"));
        assert_eq!(query.version.as_deref(), Some("2"));
    }

    #[test]
    fn query_values_are_decoded() {
        let query = AccountQuery::parse("account_id=..%2F..%2Fother%3Fversion%3D7%23&extra=1");
        assert_eq!(query.account_id.as_deref(), Some("../../other?version=7#"));
        assert_eq!(query.version, None);
        assert_eq!(AccountQuery::parse(""), AccountQuery::default());
    }

    #[test]
    fn other_methods_are_unrouted() {
        for method in [Method::POST, Method::PATCH, Method::HEAD, Method::OPTIONS] {
            assert_eq!(Operation::for_method(&method), None, "{method}");
        }
    }
}
