//! Model Module - Grade Prediction Engine
//!
//! Scaler → regressor → banding table.
//! Dễ dàng swap model backend behind the `Regressor` trait.

pub mod grading;
pub mod predictor;
pub mod regressor;
pub mod scaler;

#[cfg(feature = "onnx")]
pub mod onnx;

#[cfg(test)]
mod tests;

// Re-export common types
pub use grading::{BandRow, GradeBand, GradeBanding};
pub use predictor::{EngineStatus, GradePredictor, PredictionResult};
pub use regressor::{LinearRegressor, Regressor};
pub use scaler::{NormalizedVector, StandardScaler};

#[cfg(feature = "onnx")]
pub use onnx::OnnxRegressor;
