//! ONNX Regressor - ONNX Runtime Integration
//!
//! Runs an exported regressor (e.g. sklearn → ONNX) through ONNX Runtime.
//! Only compiled with the `onnx` feature.

use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use super::regressor::Regressor;
use super::scaler::NormalizedVector;
use crate::logic::error::{ArtifactLoadError, InferenceError};

/// ONNX model with a single `[1, N]` float input and a scalar output
pub struct OnnxRegressor {
    // Session::run needs &mut
    session: Mutex<Session>,
    output_name: String,
    input_dim: usize,
}

impl OnnxRegressor {
    /// Load ONNX model từ file
    pub fn from_file(model_path: &Path, input_dim: usize) -> Result<Self, ArtifactLoadError> {
        log::info!("Loading ONNX model from: {}", model_path.display());

        if !model_path.exists() {
            return Err(ArtifactLoadError::NotFound(model_path.to_path_buf()));
        }

        let session = Session::builder()
            .map_err(|e| ArtifactLoadError::Runtime(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ArtifactLoadError::Runtime(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| ArtifactLoadError::Runtime(format!("Failed to load model: {}", e)))?;

        Self::from_session(session, input_dim)
    }

    fn from_session(session: Session, input_dim: usize) -> Result<Self, ArtifactLoadError> {
        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| ArtifactLoadError::Invalid("ONNX model defines no output".to_string()))?;

        log::info!("ONNX model ready (output '{}')", output_name);

        Ok(Self {
            session: Mutex::new(session),
            output_name,
            input_dim,
        })
    }
}

impl Regressor for OnnxRegressor {
    fn infer(&self, features: &NormalizedVector) -> Result<f64, InferenceError> {
        let x = features.as_slice();
        if x.len() != self.input_dim {
            return Err(InferenceError::Dimension {
                expected: self.input_dim,
                actual: x.len(),
            });
        }

        let input: Vec<f32> = x.iter().map(|v| *v as f32).collect();
        let input_array = Array2::<f32>::from_shape_vec((1, input.len()), input)
            .map_err(|e| InferenceError::Backend(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError::Backend(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError::Backend(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&self.output_name)
            .ok_or_else(|| InferenceError::Backend("No output".to_string()))?;

        let (_, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::Backend(format!("Extract error: {}", e)))?;

        let score = data
            .first()
            .map(|v| f64::from(*v))
            .ok_or_else(|| InferenceError::Backend("Empty output tensor".to_string()))?;

        Ok(score)
    }

    fn input_dim(&self) -> usize {
        self.input_dim
    }

    fn name(&self) -> &str {
        "onnx"
    }
}
