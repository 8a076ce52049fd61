//! Route handlers

use super::error::ApiError;
use super::router::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use brain_domain::{BrainRequest, BrainResponse};
use serde_json::{Value, json};

type JsonBody = Result<Json<BrainRequest>, JsonRejection>;

/// Unwrap the extracted body and run request validation.
fn accept(payload: JsonBody) -> Result<BrainRequest, ApiError> {
    let Json(request) = payload?;
    request.validate()?;
    Ok(request)
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "brain-api" }))
}

pub async fn query(
    State(state): State<AppState>,
    payload: JsonBody,
) -> Result<Json<BrainResponse>, ApiError> {
    let request = accept(payload)?;
    Ok(Json(state.use_case.execute(request).await?))
}

pub async fn generate_code(
    State(state): State<AppState>,
    payload: JsonBody,
) -> Result<Json<BrainResponse>, ApiError> {
    let request = accept(payload)?;
    Ok(Json(state.use_case.generate_code(request).await?))
}

pub async fn analyze_code(
    State(state): State<AppState>,
    payload: JsonBody,
) -> Result<Json<BrainResponse>, ApiError> {
    let request = accept(payload)?;
    Ok(Json(state.use_case.analyze_code(request).await?))
}
