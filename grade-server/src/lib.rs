//! Grade Predict HTTP Backend
//!
//! Serves grade-band predictions to the dashboard.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    GRADE PREDICT SERVER                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌───────────────┐  ┌─────────────────────┐ │
//! │  │  API      │  │  Validation   │  │  GradePredictor     │ │
//! │  │  Gateway  │─►│  (validator)  │─►│  (Arc, loaded once) │ │
//! │  │  (Axum)   │  │               │  │                     │ │
//! │  └───────────┘  └───────────────┘  └──────────┬──────────┘ │
//! │                                               ▼             │
//! │                                  ┌─────────────────────┐    │
//! │                                  │ scaler + model JSON │    │
//! │                                  └─────────────────────┘    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use grade_core::GradePredictor;

pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<GradePredictor>,
    pub config: config::Config,
}

impl AppState {
    pub fn new(predictor: GradePredictor, config: config::Config) -> Self {
        Self {
            predictor: Arc::new(predictor),
            config,
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/v1/features", get(handlers::features::list))
        .route("/api/v1/predict", post(handlers::predict::predict))
        .route("/api/v1/predict/raw", post(handlers::predict::predict_raw))
        .route("/api/v1/engine/status", get(handlers::engine::status));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health::check))
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
