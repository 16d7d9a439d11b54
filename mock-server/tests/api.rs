use std::collections::HashMap;

use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, fixtures, Catalog};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- known catalogs ---

#[tokio::test]
async fn serves_every_default_catalog() {
    for (name, body) in fixtures::ALL {
        let resp = app()
            .oneshot(get(&format!("/catalog/{name}")))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK, "{name}");
        let served = body_bytes(resp).await;
        assert_eq!(served, body.as_bytes(), "{name}: body served verbatim");
    }
}

#[tokio::test]
async fn catalog_is_json() {
    let resp = app().oneshot(get("/catalog/spell-types")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let catalog: Catalog = body_json(resp).await;
    assert_eq!(catalog.total_values, 2);
    assert_eq!(catalog.data, vec!["Arcane", "Trap"]);
}

// --- unknown catalogs ---

#[tokio::test]
async fn unknown_catalog_returns_error_object() {
    let resp = app().oneshot(get("/catalog/flavor-words")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let err: serde_json::Value = body_json(resp).await;
    assert_eq!(err["object"], "error");
    assert_eq!(err["code"], "not_found");
    assert_eq!(err["status"], 404);
}

#[tokio::test]
async fn unrouted_path_is_404() {
    let resp = app().oneshot(get("/cards/random")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- custom fixtures ---

#[tokio::test]
async fn custom_fixtures_replace_defaults() {
    let mut catalogs = HashMap::new();
    catalogs.insert(
        "powers".to_string(),
        Catalog::new("powers", &["*", "1+*"]).to_body(),
    );

    let resp = app_with(catalogs.clone())
        .oneshot(get("/catalog/powers"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let catalog: Catalog = body_json(resp).await;
    assert_eq!(catalog, Catalog::new("powers", &["*", "1+*"]));

    let resp = app_with(catalogs)
        .oneshot(get("/catalog/card-names"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_fixture_is_served_as_is() {
    let mut catalogs = HashMap::new();
    catalogs.insert("loyalties".to_string(), "{\"data\": [".to_string());

    let resp = app_with(catalogs)
        .oneshot(get("/catalog/loyalties"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, "{\"data\": [".as_bytes());
}
