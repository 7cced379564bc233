//! Artifact Configuration
//!
//! Where the scaler and model live and which backend reads the model.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::logic::error::ArtifactLoadError;

/// Model file backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelFormat {
    /// JSON envelope with linear coefficients
    #[default]
    Linear,
    /// Raw ONNX graph (requires the `onnx` feature)
    Onnx,
}

impl fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelFormat::Linear => write!(f, "linear"),
            ModelFormat::Onnx => write!(f, "onnx"),
        }
    }
}

impl FromStr for ModelFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "json" => Ok(ModelFormat::Linear),
            "onnx" => Ok(ModelFormat::Onnx),
            other => Err(format!("unknown model format: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactConfig {
    pub dir: PathBuf,
    pub scaler_file: String,
    pub model_file: String,
    pub model_format: ModelFormat,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self::in_dir(constants::default_artifact_dir())
    }
}

impl ArtifactConfig {
    /// Default file names inside `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            scaler_file: constants::DEFAULT_SCALER_FILE.to_string(),
            model_file: constants::DEFAULT_MODEL_FILE.to_string(),
            model_format: ModelFormat::Linear,
        }
    }

    /// Load configuration from environment variables
    ///
    /// An unrecognised `GRADE_MODEL_FORMAT` is an error, not a fallback to
    /// the linear backend.
    pub fn from_env() -> Result<Self, ArtifactLoadError> {
        let model_format = parse_model_format(constants::get_model_format().as_deref())?;

        Ok(Self {
            dir: constants::get_artifact_dir(),
            scaler_file: constants::get_scaler_file(),
            model_file: constants::get_model_file()
                .unwrap_or_else(|| default_model_file(model_format).to_string()),
            model_format,
        })
    }

    pub fn with_model_format(mut self, format: ModelFormat) -> Self {
        if self.model_file == default_model_file(self.model_format) {
            self.model_file = default_model_file(format).to_string();
        }
        self.model_format = format;
        self
    }

    pub fn scaler_path(&self) -> PathBuf {
        self.dir.join(&self.scaler_file)
    }

    pub fn model_path(&self) -> PathBuf {
        self.dir.join(&self.model_file)
    }
}

fn parse_model_format(raw: Option<&str>) -> Result<ModelFormat, ArtifactLoadError> {
    match raw {
        None => Ok(ModelFormat::default()),
        Some(value) => value.parse().map_err(ArtifactLoadError::Invalid),
    }
}

fn default_model_file(format: ModelFormat) -> &'static str {
    match format {
        ModelFormat::Linear => constants::DEFAULT_MODEL_FILE,
        ModelFormat::Onnx => constants::DEFAULT_ONNX_MODEL_FILE,
    }
}
