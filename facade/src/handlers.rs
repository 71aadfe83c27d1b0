//! One backend round trip per call: parse inbound, invoke backend, translate
//! outbound. No retries; the first failure is returned to the caller.

use std::sync::Arc;

use account_core::{AccountClient, ApiError, HttpRequest, HttpResponse};
use axum::response::Response;
use tracing::info;

use crate::error::{json_response, FacadeError};
use crate::transport::Backend;

/// Shared, read-only state for every call.
#[derive(Clone)]
pub struct AppState {
    pub client: AccountClient,
    pub backend: Arc<dyn Backend>,
}

impl AppState {
    pub fn new(client: AccountClient, backend: Arc<dyn Backend>) -> Self {
        Self { client, backend }
    }
}

/// Run the blocking backend call off the async workers.
async fn invoke(state: &AppState, request: HttpRequest) -> Result<HttpResponse, ApiError> {
    let backend = Arc::clone(&state.backend);
    tokio::task::spawn_blocking(move || backend.execute(request))
        .await
        .map_err(|e| ApiError::BackendUnreachable(e.to_string()))?
}

pub async fn fetch(state: &AppState, account_id: &str) -> Result<Response, FacadeError> {
    let request = state.client.build_fetch_account(account_id);
    let response = invoke(state, request).await?;
    let (status, body) = state.client.parse_fetch_account(response)?.into_json()?;
    info!(account_id, status, "account fetched");
    Ok(json_response(status, body))
}

pub async fn create(state: &AppState, body: &[u8]) -> Result<Response, FacadeError> {
    let input = state.client.decode_create_request(body)?;
    let request = state.client.build_create_account(&input)?;
    let response = invoke(state, request).await?;
    let reply = state.client.parse_create_account(response)?;
    let account_id = reply.body.account_id.clone();
    let (status, body) = reply.into_json()?;
    info!(account_id = %account_id, status, "account created");
    Ok(json_response(status, body))
}

pub async fn delete(state: &AppState, account_id: &str, version: Option<&str>) -> Result<Response, FacadeError> {
    let request = state.client.build_delete_account(account_id, version);
    let response = invoke(state, request).await?;
    let (status, body) = state.client.parse_delete_account(account_id, response)?.into_json()?;
    info!(account_id, status, "account deleted");
    Ok(json_response(status, body))
}
