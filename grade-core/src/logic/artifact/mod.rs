//! Artifact Module - Pre-trained Scaler & Model
//!
//! Loaded once at process start, shared read-only afterwards.

pub mod config;
pub mod format;
pub mod storage;

use std::sync::Arc;

pub use config::{ArtifactConfig, ModelFormat};
pub use format::{ArtifactEnvelope, ArtifactKind, ArtifactPayload, ARTIFACT_FORMAT_VERSION};
pub use storage::{
    load_linear_model, load_scaler, save_linear_model, save_scaler, ArtifactInfo,
};

use crate::logic::error::ArtifactLoadError;
use crate::logic::features::FEATURE_COUNT;
use crate::logic::model::{GradePredictor, Regressor, StandardScaler};

/// Both artifacts, ready to be injected into a predictor
pub struct ArtifactSet {
    pub scaler: Arc<StandardScaler>,
    pub model: Arc<dyn Regressor>,
    pub scaler_info: ArtifactInfo,
    pub model_info: ArtifactInfo,
}

impl ArtifactSet {
    /// Load scaler and model described by `config`
    pub fn load(config: &ArtifactConfig) -> Result<Self, ArtifactLoadError> {
        log::info!("Loading artifacts from: {}", config.dir.display());

        let (scaler, scaler_info) = load_scaler(&config.scaler_path())?;
        if scaler.dim() != FEATURE_COUNT {
            return Err(ArtifactLoadError::Invalid(format!(
                "scaler has {} features, layout has {}",
                scaler.dim(),
                FEATURE_COUNT
            )));
        }

        let (model, model_info) = load_model(config)?;
        if model.input_dim() != FEATURE_COUNT {
            return Err(ArtifactLoadError::Invalid(format!(
                "model expects {} features, layout has {}",
                model.input_dim(),
                FEATURE_COUNT
            )));
        }

        log::info!(
            "Artifacts ready: scaler ({} features), model '{}'",
            scaler.dim(),
            model.name()
        );

        Ok(Self {
            scaler: Arc::new(scaler),
            model,
            scaler_info,
            model_info,
        })
    }

    pub fn into_predictor(self) -> GradePredictor {
        GradePredictor::new(self.scaler, self.model)
    }
}

fn load_model(config: &ArtifactConfig) -> Result<(Arc<dyn Regressor>, ArtifactInfo), ArtifactLoadError> {
    let path = config.model_path();

    match config.model_format {
        ModelFormat::Linear => {
            let (model, info) = load_linear_model(&path)?;
            let model: Arc<dyn Regressor> = Arc::new(model);
            Ok((model, info))
        }
        #[cfg(feature = "onnx")]
        ModelFormat::Onnx => {
            let info = storage::file_info(&path, ArtifactKind::Onnx)?;
            let model: Arc<dyn Regressor> =
                Arc::new(crate::logic::model::OnnxRegressor::from_file(&path, FEATURE_COUNT)?);
            Ok((model, info))
        }
        #[cfg(not(feature = "onnx"))]
        ModelFormat::Onnx => Err(ArtifactLoadError::Runtime(
            "ONNX models need a build with the `onnx` feature".to_string(),
        )),
    }
}

/// Load artifacts and build the predictor in one step
pub fn load_predictor(config: &ArtifactConfig) -> Result<GradePredictor, ArtifactLoadError> {
    ArtifactSet::load(config).map(ArtifactSet::into_predictor)
}
