//! Logic Module - Prediction Pipeline
//!
//! - `features/` - Feature schema, versioned vector, typed form input
//! - `model/` - Scaler, regressor backends, banding table, predictor
//! - `artifact/` - Versioned artifact files and one-shot loading

pub mod artifact;
pub mod error;
pub mod features;
pub mod model;

pub use error::{ArtifactLoadError, InferenceError, PipelineError, PipelineResult, ShapeError};
