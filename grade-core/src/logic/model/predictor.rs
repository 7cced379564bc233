//! Grade Predictor - Normalize, Infer, Band
//!
//! Holds the two artifacts injected at startup and runs the full pipeline
//! for one feature vector per call.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::grading::{GradeBand, GradeBanding};
use super::regressor::Regressor;
use super::scaler::StandardScaler;
use crate::logic::error::{InferenceError, PipelineResult};
use crate::logic::features::{FeatureVector, FEATURE_COUNT};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Prediction output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub band: GradeBand,
    /// Raw model output, not rounded or clipped
    pub score: f64,
}

impl PredictionResult {
    pub fn label(&self) -> &'static str {
        self.band.label()
    }
}

impl std::fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.band.label(), self.score)
    }
}

/// Engine Status for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub model_name: String,
    pub input_dim: usize,
    pub prediction_count: u64,
    pub failure_count: u64,
    pub avg_latency_us: f64,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Default)]
struct Counters {
    latency_sum_us: AtomicU64,
    predictions: AtomicU64,
    failures: AtomicU64,
}

// ============================================================================
// PREDICTOR
// ============================================================================

/// Stateless pipeline over immutable, shared artifacts
pub struct GradePredictor {
    scaler: Arc<StandardScaler>,
    model: Arc<dyn Regressor>,
    banding: GradeBanding,
    counters: Counters,
    loaded_at: chrono::DateTime<chrono::Utc>,
}

impl std::fmt::Debug for GradePredictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GradePredictor")
            .field("scaler_dim", &self.scaler.dim())
            .field("model", &self.model.name())
            .field("banding", &self.banding)
            .finish()
    }
}

impl GradePredictor {
    pub fn new(scaler: Arc<StandardScaler>, model: Arc<dyn Regressor>) -> Self {
        Self::with_banding(scaler, model, GradeBanding::standard())
    }

    pub fn with_banding(
        scaler: Arc<StandardScaler>,
        model: Arc<dyn Regressor>,
        banding: GradeBanding,
    ) -> Self {
        Self {
            scaler,
            model,
            banding,
            counters: Counters::default(),
            loaded_at: chrono::Utc::now(),
        }
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn banding(&self) -> &GradeBanding {
        &self.banding
    }

    /// Predict from a typed vector
    pub fn predict(&self, vector: &FeatureVector) -> PipelineResult<PredictionResult> {
        let start = Instant::now();
        let outcome = self.run(vector);

        match &outcome {
            Ok(result) => {
                self.counters
                    .latency_sum_us
                    .fetch_add(start.elapsed().as_micros() as u64, Ordering::Relaxed);
                self.counters.predictions.fetch_add(1, Ordering::Relaxed);
                log::debug!("Prediction: {} ({})", result, self.model.name());
            }
            Err(e) => {
                self.counters.failures.fetch_add(1, Ordering::Relaxed);
                if e.is_caller_error() {
                    log::warn!("Rejected input: {}", e);
                } else {
                    log::error!("Prediction failed: {}", e);
                }
            }
        }

        outcome
    }

    /// Predict from raw positional values
    pub fn predict_raw(&self, values: &[f64]) -> PipelineResult<PredictionResult> {
        match FeatureVector::from_slice(values) {
            Ok(vector) => self.predict(&vector),
            Err(e) => {
                self.counters.failures.fetch_add(1, Ordering::Relaxed);
                log::warn!("Rejected input: {}", e);
                Err(e.into())
            }
        }
    }

    fn run(&self, vector: &FeatureVector) -> PipelineResult<PredictionResult> {
        vector.validate()?;

        let normalized = self.scaler.normalize(vector.as_slice())?;

        if self.model.input_dim() != FEATURE_COUNT {
            return Err(InferenceError::Dimension {
                expected: self.model.input_dim(),
                actual: FEATURE_COUNT,
            }
            .into());
        }

        let score = self.model.infer(&normalized)?;
        if !score.is_finite() {
            return Err(InferenceError::NonFinite(score).into());
        }

        Ok(PredictionResult {
            band: self.banding.classify(score),
            score,
        })
    }

    pub fn status(&self) -> EngineStatus {
        let sum = self.counters.latency_sum_us.load(Ordering::Relaxed);
        let count = self.counters.predictions.load(Ordering::Relaxed);
        let avg = if count > 0 { sum as f64 / count as f64 } else { 0.0 };

        EngineStatus {
            model_name: self.model.name().to_string(),
            input_dim: self.model.input_dim(),
            prediction_count: count,
            failure_count: self.counters.failures.load(Ordering::Relaxed),
            avg_latency_us: avg,
            loaded_at: self.loaded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::error::{PipelineError, ShapeError};
    use crate::logic::model::LinearRegressor;

    fn constant(score: f64) -> GradePredictor {
        GradePredictor::new(
            Arc::new(StandardScaler::identity(FEATURE_COUNT)),
            Arc::new(LinearRegressor::new(vec![0.0; FEATURE_COUNT], score).unwrap()),
        )
    }

    #[test]
    fn test_counters() {
        let predictor = constant(5.0);
        let vector = FeatureVector::from_values([10.0, 10.0, 5.0, 1.0, 0.0, 0.0, 2.0]);

        predictor.predict(&vector).unwrap();
        predictor.predict(&vector).unwrap();
        assert!(predictor.predict_raw(&[1.0; 3]).is_err());

        let status = predictor.status();
        assert_eq!(status.model_name, "linear");
        assert_eq!(status.prediction_count, 2);
        assert_eq!(status.failure_count, 1);
    }

    #[test]
    fn test_display_matches_form_output() {
        let result = PredictionResult {
            band: GradeBand::Adequate,
            score: 5.5,
        };
        assert_eq!(result.to_string(), "Grade Cukup: 5.5");
        assert_eq!(result.label(), "Grade Cukup");
    }

    #[test]
    fn test_domain_error_before_model() {
        let predictor = constant(5.0);
        let vector = FeatureVector::from_values([10.0, 10.0, 5.0, 3.0, 0.0, 0.0, 2.0]);
        assert!(matches!(
            predictor.predict(&vector),
            Err(PipelineError::Shape(ShapeError::Domain { name: "activities", .. }))
        ));
    }
}
