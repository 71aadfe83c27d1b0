use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const ACCOUNTS_PATH: &str = "/v1/organisation/accounts";

const MAX_NAME_LEN: usize = 140;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Vec<String>>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub organisation_id: Uuid,
    pub attributes: Attributes,
    pub created_on: DateTime<Utc>,
    pub modified_on: DateTime<Utc>,
    pub version: u64,
}

#[derive(Deserialize)]
pub struct NewAccount {
    pub data: NewAccountData,
}

#[derive(Default, Deserialize)]
pub struct NewAccountData {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub organisation_id: String,
    #[serde(default)]
    pub attributes: Attributes,
}

#[derive(Deserialize)]
pub struct DeleteParams {
    pub version: Option<String>,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Account>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route(ACCOUNTS_PATH, post(create_account))
        .route(&format!("{ACCOUNTS_PATH}/{{id}}"), get(fetch_account).delete(delete_account))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error_message": message.into() }))).into_response()
}

fn envelope(account: &Account) -> Value {
    json!({
        "data": account,
        "links": { "self": format!("{ACCOUNTS_PATH}/{}", account.id) },
    })
}

/// Collect every validation failure for a create payload, in field order.
pub fn validate(data: &NewAccountData) -> Vec<String> {
    let mut failures = Vec::new();
    if Uuid::parse_str(&data.id).is_err() {
        failures.push(format!("id in body must be of type uuid: {:?}", data.id));
    }
    if Uuid::parse_str(&data.organisation_id).is_err() {
        failures.push(format!(
            "organisation_id in body must be of type uuid: {:?}",
            data.organisation_id
        ));
    }
    if data.kind != "accounts" {
        failures.push("type in body should be one of [accounts]".to_string());
    }
    match data.attributes.country.as_deref() {
        None | Some("") => failures.push("country in body is required".to_string()),
        Some(country) => {
            if country.len() != 2 || !country.chars().all(|c| c.is_ascii_uppercase()) {
                failures.push("country in body should match '^[A-Z]{2}$'".to_string());
            }
        }
    }
    match data.attributes.name.as_deref() {
        None | Some([]) => failures.push("name in body is required".to_string()),
        Some(names) => {
            for (i, name) in names.iter().enumerate() {
                if name.chars().count() > MAX_NAME_LEN {
                    failures.push(format!("name.{i} in body should be at most {MAX_NAME_LEN} chars long"));
                }
            }
        }
    }
    failures
}

async fn create_account(State(db): State<Db>, body: Bytes) -> Response {
    let input: NewAccount = match serde_json::from_slice(&body) {
        Ok(input) => input,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    let failures = validate(&input.data);
    if !failures.is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            format!("validation failure list:\n{}", failures.join("\n")),
        );
    }

    // Both parse after validation.
    let (Ok(id), Ok(organisation_id)) = (
        Uuid::parse_str(&input.data.id),
        Uuid::parse_str(&input.data.organisation_id),
    ) else {
        return error_response(StatusCode::BAD_REQUEST, "invalid identifier");
    };

    let mut accounts = db.write().await;
    if accounts.contains_key(&id) {
        return error_response(
            StatusCode::CONFLICT,
            "Account cannot be created as it violates a duplicate constraint",
        );
    }

    let now = Utc::now();
    let account = Account {
        id,
        kind: input.data.kind,
        organisation_id,
        attributes: input.data.attributes,
        created_on: now,
        modified_on: now,
        version: 0,
    };
    let body = envelope(&account);
    accounts.insert(id, account);
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn fetch_account(State(db): State<Db>, Path(id): Path<String>) -> Response {
    let Ok(uuid) = Uuid::parse_str(&id) else {
        return error_response(StatusCode::BAD_REQUEST, format!("id is not a valid uuid: {id:?}"));
    };
    let accounts = db.read().await;
    match accounts.get(&uuid) {
        Some(account) => (StatusCode::OK, Json(envelope(account))).into_response(),
        None => error_response(StatusCode::NOT_FOUND, format!("record {id} does not exist")),
    }
}

async fn delete_account(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(params): Query<DeleteParams>,
) -> Response {
    let Ok(uuid) = Uuid::parse_str(&id) else {
        return error_response(StatusCode::BAD_REQUEST, format!("id is not a valid uuid: {id:?}"));
    };
    let Some(Ok(version)) = params.version.as_deref().map(str::parse::<u64>) else {
        return error_response(StatusCode::BAD_REQUEST, "invalid version number");
    };

    let mut accounts = db.write().await;
    let current = accounts.get(&uuid).map(|account| account.version);
    match current {
        None => StatusCode::NOT_FOUND.into_response(),
        Some(stored) if stored != version => error_response(StatusCode::CONFLICT, "invalid version"),
        Some(_) => {
            accounts.remove(&uuid);
            StatusCode::NO_CONTENT.into_response()
        }
    }
}
