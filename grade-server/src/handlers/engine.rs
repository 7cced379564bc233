//! Engine status handler

use axum::{extract::State, Json};

use grade_core::logic::model::EngineStatus;

use crate::AppState;

/// GET /api/v1/engine/status
pub async fn status(State(state): State<AppState>) -> Json<EngineStatus> {
    Json(state.predictor.status())
}
