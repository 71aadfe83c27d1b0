use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use serde_json::Value;
use tower::ServiceExt;

const ACCOUNT_ID: &str = "ad27e265-9605-4b4b-a0e5-3003ea9cc4dc";
const ORG_ID: &str = "84385b9c-176d-11ed-861d-0242ac120002";

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder().method(method).uri(uri).body(String::new()).unwrap()
}

fn create_body(id: &str) -> String {
    format!(
        r#"{{"data":{{"id":"{id}","type":"accounts","organisation_id":"{ORG_ID}","attributes":{{"country":"GB","name":["Acme"],"bic":"NWBKGB22"}}}}}}"#
    )
}

// --- create ---

#[tokio::test]
async fn create_account_returns_201_envelope() {
    let resp = app()
        .oneshot(json_request("POST", "/v1/organisation/accounts", &create_body(ACCOUNT_ID)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = body_json(resp).await;
    assert_eq!(json["data"]["id"], ACCOUNT_ID);
    assert_eq!(json["data"]["type"], "accounts");
    assert_eq!(json["data"]["version"], 0);
    assert_eq!(json["data"]["attributes"]["bic"], "NWBKGB22");
    assert!(json["data"]["created_on"].is_string());
    assert_eq!(
        json["links"]["self"],
        format!("/v1/organisation/accounts/{ACCOUNT_ID}")
    );
}

#[tokio::test]
async fn create_account_missing_country_returns_400() {
    let body = format!(
        r#"{{"data":{{"id":"{ACCOUNT_ID}","type":"accounts","organisation_id":"{ORG_ID}","attributes":{{"name":["Acme"]}}}}}}"#
    );
    let resp = app()
        .oneshot(json_request("POST", "/v1/organisation/accounts", &body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert!(json["error_message"]
        .as_str()
        .unwrap()
        .contains("country in body is required"));
}

#[tokio::test]
async fn create_account_malformed_json_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/v1/organisation/accounts", "{not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert!(json["error_message"].is_string());
}

// --- fetch ---

#[tokio::test]
async fn fetch_account_not_found() {
    let resp = app()
        .oneshot(empty_request("GET", &format!("/v1/organisation/accounts/{ACCOUNT_ID}")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json = body_json(resp).await;
    assert_eq!(
        json["error_message"],
        format!("record {ACCOUNT_ID} does not exist")
    );
}

#[tokio::test]
async fn fetch_account_bad_uuid_returns_400() {
    let resp = app()
        .oneshot(empty_request("GET", "/v1/organisation/accounts/not-a-uuid"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- delete ---

#[tokio::test]
async fn delete_account_not_found_has_empty_body() {
    let resp = app()
        .oneshot(empty_request(
            "DELETE",
            &format!("/v1/organisation/accounts/{ACCOUNT_ID}?version=0"),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn delete_account_bad_version_returns_400() {
    let resp = app()
        .oneshot(empty_request(
            "DELETE",
            &format!("/v1/organisation/accounts/{ACCOUNT_ID}?version=abc"),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- full lifecycle ---

#[tokio::test]
async fn account_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/v1/organisation/accounts", &create_body(ACCOUNT_ID)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    // duplicate create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/v1/organisation/accounts", &create_body(ACCOUNT_ID)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let json = body_json(resp).await;
    assert_eq!(
        json["error_message"],
        "Account cannot be created as it violates a duplicate constraint"
    );

    // fetch
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/v1/organisation/accounts/{ACCOUNT_ID}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["data"]["organisation_id"], ORG_ID);
    assert_eq!(json["data"]["attributes"]["name"][0], "Acme");

    // delete with stale version
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request(
            "DELETE",
            &format!("/v1/organisation/accounts/{ACCOUNT_ID}?version=1"),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request(
            "DELETE",
            &format!("/v1/organisation/accounts/{ACCOUNT_ID}?version=0"),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    // fetch after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/v1/organisation/accounts/{ACCOUNT_ID}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
