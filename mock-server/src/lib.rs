pub mod fixtures;

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub object: String,
    pub uri: String,
    pub total_values: u64,
    pub data: Vec<String>,
}

impl Catalog {
    /// A well-formed catalog for `name` whose count matches its data.
    pub fn new(name: &str, data: &[&str]) -> Self {
        Self {
            object: "catalog".to_string(),
            uri: format!("https://api.scryfall.com/catalog/{name}"),
            total_values: data.len() as u64,
            data: data.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Strings and integers always serialize, so failure here is a bug in
    /// the fixture type itself.
    pub fn to_body(&self) -> String {
        serde_json::to_string(self).expect("catalog fixture serializes to JSON")
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorObject {
    pub object: String,
    pub code: String,
    pub status: u16,
    pub details: String,
}

impl ErrorObject {
    fn not_found(name: &str) -> Self {
        Self {
            object: "error".to_string(),
            code: "not_found".to_string(),
            status: 404,
            details: format!("No catalog named '{name}' exists."),
        }
    }
}

/// Raw response bodies keyed by catalog name. Bodies are served verbatim, so
/// a test can register malformed JSON.
pub type Catalogs = Arc<HashMap<String, String>>;

pub fn default_catalogs() -> HashMap<String, String> {
    fixtures::ALL
        .iter()
        .map(|(name, body)| (name.to_string(), body.to_string()))
        .collect()
}

pub fn app() -> Router {
    app_with(default_catalogs())
}

pub fn app_with(catalogs: HashMap<String, String>) -> Router {
    Router::new()
        .route("/catalog/{name}", get(get_catalog))
        .with_state(Arc::new(catalogs))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(
    listener: TcpListener,
    catalogs: HashMap<String, String>,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(catalogs)).await
}

async fn get_catalog(State(catalogs): State<Catalogs>, Path(name): Path<String>) -> Response {
    match catalogs.get(&name) {
        Some(body) => ([(header::CONTENT_TYPE, "application/json")], body.clone()).into_response(),
        None => {
            tracing::debug!(%name, "unknown catalog requested");
            (StatusCode::NOT_FOUND, Json(ErrorObject::not_found(&name))).into_response()
        }
    }
}
