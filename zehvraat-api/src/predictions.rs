use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json,
    Router,
};
use chrono::Datelike;
use zehvraat_shared::{PredictionMethod, PredictionResult};

use crate::{
    error::AppError,
    state::AppState,
    validation::{CarForm, JewelryForm},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/predictions/jewelry", post(predict_jewelry))
        .route("/v1/predictions/jewelry/model", post(predict_jewelry_with_model))
        .route("/v1/predictions/car", post(predict_car))
}

async fn simulate_latency(state: &AppState) {
    if !state.simulated_latency.is_zero() {
        tokio::time::sleep(state.simulated_latency).await;
    }
}

/// POST /v1/predictions/jewelry
/// Classic formula over material, weight and design
async fn predict_jewelry(
    State(state): State<AppState>,
    form: Result<Json<JewelryForm>, JsonRejection>,
) -> Result<Json<PredictionResult>, AppError> {
    let Json(form) = form?;
    let input = form.validate()?;
    simulate_latency(&state).await;

    let price = state.pricing.quote_jewelry(&input, &mut rand::thread_rng());
    tracing::info!(material = %input.material, weight = input.weight_grams, design = %input.design, price, "Jewelry prediction");

    Ok(Json(PredictionResult::new(price, PredictionMethod::Classic)))
}

/// POST /v1/predictions/jewelry/model
/// Fixed-weight network, loaded on first use
async fn predict_jewelry_with_model(
    State(state): State<AppState>,
    form: Result<Json<JewelryForm>, JsonRejection>,
) -> Result<Json<PredictionResult>, AppError> {
    let Json(form) = form?;
    let input = form.validate()?;

    let price = state.predictor.predict(&input).await?;
    tracing::info!(material = %input.material, weight = input.weight_grams, design = %input.design, price, "Model jewelry prediction");

    Ok(Json(PredictionResult::new(price, PredictionMethod::Model)))
}

/// POST /v1/predictions/car
async fn predict_car(
    State(state): State<AppState>,
    form: Result<Json<CarForm>, JsonRejection>,
) -> Result<Json<PredictionResult>, AppError> {
    let Json(form) = form?;
    let input = form.validate(chrono::Utc::now().year())?;
    simulate_latency(&state).await;

    let price = state.pricing.quote_car(&input, &mut rand::thread_rng());
    tracing::info!(brand = %input.brand, model = %input.model, year = input.year, price, "Car prediction");

    Ok(Json(PredictionResult::new(price, PredictionMethod::Classic)))
}
