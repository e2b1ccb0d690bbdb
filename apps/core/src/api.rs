//! HTTP boundary: router, shared state, and request handlers.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use sqlx::sqlite::SqlitePool;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use validator::Validate;

use crate::analysis::MindAnalyzer;
use crate::database;
use crate::error::AppError;
use crate::models::{AnalysisRecord, AnalyzeRequest};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<MindAnalyzer>,
    pub pool: SqlitePool,
}

/// Create the API router with tracing and permissive CORS.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/test_connection", get(test_connection))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Analyze one text and persist the assessment.
async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisRecord>, AppError> {
    payload.validate()?;

    let result = state.analyzer.analyze(&payload.text).await?;
    let record = database::insert_analysis(&state.pool, &result).await?;

    info!("Stored analysis {}: {}", record.id, result.summary());

    Ok(Json(record))
}

/// Connectivity probe: fetch any one stored record.
async fn test_connection(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    match database::fetch_latest(&state.pool).await? {
        Some(record) => Ok(Json(serde_json::to_value(record)?)),
        None => Ok(Json(json!({ "message": "No data found" }))),
    }
}
