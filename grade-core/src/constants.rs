//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.

use std::path::PathBuf;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Grade Predict";

/// Directory name under the platform data dir
pub const APP_DIR_NAME: &str = "grade-predict";

/// Default scaler artifact file name
pub const DEFAULT_SCALER_FILE: &str = "standard_scaler.json";

/// Default model artifact file name
pub const DEFAULT_MODEL_FILE: &str = "grade_model.json";

/// Default model file name for the ONNX backend
pub const DEFAULT_ONNX_MODEL_FILE: &str = "grade_model.onnx";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Default artifact directory: `<data_local_dir>/grade-predict`, or `./artifacts`
pub fn default_artifact_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("artifacts"))
}

/// Get artifact directory from environment or use default
pub fn get_artifact_dir() -> PathBuf {
    std::env::var("GRADE_ARTIFACT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_artifact_dir())
}

/// Get scaler file name from environment or use default
pub fn get_scaler_file() -> String {
    std::env::var("GRADE_SCALER_FILE").unwrap_or_else(|_| DEFAULT_SCALER_FILE.to_string())
}

/// Get model file name from environment, if set
pub fn get_model_file() -> Option<String> {
    std::env::var("GRADE_MODEL_FILE").ok()
}

/// Get model format ("linear" or "onnx") from environment, if set
pub fn get_model_format() -> Option<String> {
    std::env::var("GRADE_MODEL_FORMAT").ok()
}
