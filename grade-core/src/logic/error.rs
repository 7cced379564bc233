//! Pipeline Errors
//!
//! Three failure classes, all surfaced to the caller. None of them is
//! retried or replaced by a default grade.

use std::path::PathBuf;

use super::artifact::ArtifactKind;
use super::features::layout::LayoutMismatchError;

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Malformed feature input (caller's responsibility)
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("expected {expected} features, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("feature '{name}' out of range: {value}")]
    Domain { name: &'static str, value: f64 },

    #[error("invalid value for '{name}': {input:?}")]
    Parse { name: &'static str, input: String },

    #[error(transparent)]
    Layout(#[from] LayoutMismatchError),
}

/// Scaler or model artifact could not be made ready
#[derive(Debug, thiserror::Error)]
pub enum ArtifactLoadError {
    #[error("artifact not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to access artifact {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode artifact {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported artifact format version {found} (supported: {supported})")]
    UnsupportedFormat { found: u32, supported: u32 },

    #[error("wrong artifact kind: expected {expected}, found {found}")]
    WrongKind {
        expected: ArtifactKind,
        found: ArtifactKind,
    },

    #[error(transparent)]
    Layout(#[from] LayoutMismatchError),

    #[error("checksum mismatch: recorded {recorded}, computed {computed}")]
    Checksum { recorded: String, computed: String },

    #[error("invalid artifact parameters: {0}")]
    Invalid(String),

    #[error("model runtime error: {0}")]
    Runtime(String),
}

/// Model failed while scoring
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("model expects {expected} inputs, got {actual}")]
    Dimension { expected: usize, actual: usize },

    #[error("model produced a non-finite score: {0}")]
    NonFinite(f64),

    #[error("inference backend failed: {0}")]
    Backend(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error("artifact load error: {0}")]
    ArtifactLoad(#[from] ArtifactLoadError),

    #[error("inference error: {0}")]
    Inference(#[from] InferenceError),
}

impl PipelineError {
    /// True when the input is at fault rather than the artifacts
    pub fn is_caller_error(&self) -> bool {
        matches!(self, PipelineError::Shape(_))
    }
}
