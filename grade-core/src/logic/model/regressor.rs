//! Regressor - Trained Model Contract
//!
//! Any backend that maps a normalized vector to one continuous score.

use serde::{Deserialize, Serialize};

use super::scaler::NormalizedVector;
use crate::logic::error::{ArtifactLoadError, InferenceError};

// ============================================================================
// REGRESSOR TRAIT
// ============================================================================

/// Trait cho model backends (linear, ONNX, ...)
///
/// Implementations are shared read-only across threads.
pub trait Regressor: Send + Sync {
    /// Score one normalized vector
    fn infer(&self, features: &NormalizedVector) -> Result<f64, InferenceError>;

    /// Number of inputs the model was trained on
    fn input_dim(&self) -> usize;

    /// Human readable backend name
    fn name(&self) -> &str {
        "regressor"
    }
}

// ============================================================================
// LINEAR IMPLEMENTATION
// ============================================================================

/// Ordinary least squares model: `coefficients · x + intercept`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearRegressor {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Result<Self, ArtifactLoadError> {
        let model = Self {
            coefficients,
            intercept,
        };
        model.check()?;
        Ok(model)
    }

    /// Validate parameters; also run after deserializing an artifact
    pub fn check(&self) -> Result<(), ArtifactLoadError> {
        if self.coefficients.is_empty() {
            return Err(ArtifactLoadError::Invalid("model has no coefficients".to_string()));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ArtifactLoadError::Invalid(
                "model parameters are not finite".to_string(),
            ));
        }
        Ok(())
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Regressor for LinearRegressor {
    fn infer(&self, features: &NormalizedVector) -> Result<f64, InferenceError> {
        let x = features.as_slice();
        if x.len() != self.coefficients.len() {
            return Err(InferenceError::Dimension {
                expected: self.coefficients.len(),
                actual: x.len(),
            });
        }

        let dot: f64 = self.coefficients.iter().zip(x).map(|(w, v)| w * v).sum();
        Ok(dot + self.intercept)
    }

    fn input_dim(&self) -> usize {
        self.coefficients.len()
    }

    fn name(&self) -> &str {
        "linear"
    }
}
