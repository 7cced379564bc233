//! Prediction handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use crate::error::AppResult;
use crate::models::{PredictRequest, PredictResponse, RawPredictRequest};
use crate::AppState;

/// POST /api/v1/predict
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> AppResult<Json<PredictResponse>> {
    let Json(req) = payload?;
    req.validate()?;

    let vector = req.to_input()?.to_feature_vector();
    let result = state.predictor.predict(&vector)?;

    tracing::info!(
        band = %result.band,
        score = result.score,
        "Prediction served"
    );

    Ok(Json(result.into()))
}

/// POST /api/v1/predict/raw
pub async fn predict_raw(
    State(state): State<AppState>,
    payload: Result<Json<RawPredictRequest>, JsonRejection>,
) -> AppResult<Json<PredictResponse>> {
    let Json(req) = payload?;
    req.validate()?;

    let result = state.predictor.predict_raw(&req.features)?;

    tracing::info!(
        band = %result.band,
        score = result.score,
        "Raw prediction served"
    );

    Ok(Json(result.into()))
}
