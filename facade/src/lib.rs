//! Public account API in front of the backend account service.
//!
//! # Overview
//! A single resource path, `/accounts`, dispatched by method to fetch
//! (`GET`), create (`PUT`) or delete (`DELETE`). Each call is translated by
//! `account_core` into a backend request, executed through a `Backend`, and
//! the backend's reply is translated back. Backend failures are relayed with
//! their own status code and body.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod transport;

use std::sync::Arc;

use account_core::AccountClient;
use axum::{routing::any, Router};
use tokio::net::TcpListener;

pub use config::{ConfigError, FacadeConfig};
pub use error::FacadeError;
pub use handlers::AppState;
pub use transport::{Backend, UreqBackend};

pub const ACCOUNTS_ROUTE: &str = "/accounts";

pub fn app(state: AppState) -> Router {
    Router::new()
        .route(ACCOUNTS_ROUTE, any(dispatch::dispatch))
        .with_state(state)
}

/// Build the production state: ureq transport with the configured timeout.
pub fn state_from_config(config: &FacadeConfig) -> AppState {
    AppState::new(
        AccountClient::new(&config.backend_url),
        Arc::new(UreqBackend::new(config.backend_timeout)),
    )
}

pub async fn run(listener: TcpListener, config: &FacadeConfig) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state_from_config(config))).await
}
