use axum::{
    routing::get,
    Json,
    Router,
};
use chrono::Datelike;
use serde_json::{json, Value};
use zehvraat_catalog::FormOptions;
use zehvraat_shared::{dataset, DatasetSummary};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/v1/options", get(list_options))
        .route("/v1/dataset/summary", get(dataset_summary))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /v1/options
/// Every selectable value on the jewelry and car forms
async fn list_options() -> Json<FormOptions> {
    Json(FormOptions::for_year(chrono::Utc::now().year()))
}

/// GET /v1/dataset/summary
async fn dataset_summary() -> Json<DatasetSummary> {
    Json(dataset::summary())
}
