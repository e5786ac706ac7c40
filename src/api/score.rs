//! Scoring API Endpoints
//!
//! Endpoints:
//!   GET  /        -> in-browser scoring form
//!   GET  /health  -> health check
//!   POST /score   -> score a wallet payload
//!   GET  /samples -> ratings for the fixed sample wallets
//!
//! The engine is read-only after startup; handlers share it through an `Arc`
//! with no locking.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::api::web;
use crate::rating::{build_sample_wallets, RatingReport, WalletRatingEngine, WalletSnapshot};

/// API state for scoring endpoints
#[derive(Clone)]
pub struct ScoreApiState {
    pub engine: Arc<WalletRatingEngine>,
}

// Response types

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub address: String,
    pub chain: String,
    pub report: RatingReport,
}

#[derive(Debug, Serialize)]
pub struct SampleRating {
    pub wallet: WalletSnapshot,
    pub report: RatingReport,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Endpoints

/// GET /health - Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// POST /score - Score a wallet snapshot supplied as JSON
///
/// The body is parsed leniently: numeric strings are coerced, optional
/// fields default. A malformed payload yields 400 with a message naming the
/// offending field.
pub async fn score_wallet(
    State(state): State<ScoreApiState>,
    Json(payload): Json<Value>,
) -> Result<Json<ScoreResponse>, (StatusCode, Json<ErrorResponse>)> {
    let wallet = WalletSnapshot::from_value(&payload).map_err(|e| {
        warn!(error = %e, "Rejected wallet payload");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    let report = state.engine.score_wallet(&wallet);
    debug!(
        address = %wallet.address,
        raw_score = report.raw_score,
        grade = %report.grade,
        "Scored wallet"
    );

    Ok(Json(ScoreResponse {
        address: wallet.address,
        chain: wallet.chain,
        report,
    }))
}

/// GET /samples - Score the fixed demonstration wallets
pub async fn get_samples(State(state): State<ScoreApiState>) -> Json<Vec<SampleRating>> {
    let ratings = build_sample_wallets()
        .into_iter()
        .map(|wallet| {
            let report = state.engine.score_wallet(&wallet);
            SampleRating { wallet, report }
        })
        .collect();

    Json(ratings)
}

/// Create the scoring API router
pub fn create_api_router(state: ScoreApiState) -> Router {
    Router::new()
        .route("/", get(web::index))
        .route("/health", get(health))
        .route("/score", post(score_wallet))
        .route("/samples", get(get_samples))
        .with_state(state)
}
