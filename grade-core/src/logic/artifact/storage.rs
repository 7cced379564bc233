use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::format::{sha256_hex, ArtifactEnvelope, ArtifactKind, ArtifactPayload};
use crate::logic::error::ArtifactLoadError;
use crate::logic::model::{LinearRegressor, StandardScaler};

/// What was read from (or written to) disk
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactInfo {
    pub path: PathBuf,
    pub kind: ArtifactKind,
    pub checksum: String,
    pub created_at: Option<DateTime<Utc>>,
}

fn io_error(path: &Path, source: std::io::Error) -> ArtifactLoadError {
    ArtifactLoadError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Save artifact to disk
pub fn save_artifact<T: ArtifactPayload + Clone>(
    payload: &T,
    path: &Path,
) -> Result<ArtifactInfo, ArtifactLoadError> {
    // Ensure directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }

    let decode = |source| ArtifactLoadError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let envelope = ArtifactEnvelope::seal(payload.clone()).map_err(decode)?;
    let json = serde_json::to_vec_pretty(&envelope).map_err(decode)?;
    fs::write(path, json).map_err(|e| io_error(path, e))?;

    log::info!("Saved {} artifact to {}", T::KIND, path.display());

    Ok(ArtifactInfo {
        path: path.to_path_buf(),
        kind: T::KIND,
        checksum: envelope.checksum,
        created_at: Some(envelope.created_at),
    })
}

/// Load artifact from disk with validation
pub fn load_artifact<T: ArtifactPayload>(path: &Path) -> Result<(T, ArtifactInfo), ArtifactLoadError> {
    if !path.exists() {
        return Err(ArtifactLoadError::NotFound(path.to_path_buf()));
    }

    let data = fs::read(path).map_err(|e| io_error(path, e))?;
    let raw: ArtifactEnvelope<serde_json::Value> =
        serde_json::from_slice(&data).map_err(|source| ArtifactLoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    let envelope = raw.open::<T>()?;

    log::info!(
        "Loaded {} artifact from {} (sha256 {}…)",
        T::KIND,
        path.display(),
        &envelope.checksum[..12.min(envelope.checksum.len())]
    );

    let info = ArtifactInfo {
        path: path.to_path_buf(),
        kind: envelope.kind,
        checksum: envelope.checksum,
        created_at: Some(envelope.created_at),
    };
    Ok((envelope.payload, info))
}

pub fn save_scaler(scaler: &StandardScaler, path: &Path) -> Result<ArtifactInfo, ArtifactLoadError> {
    save_artifact(scaler, path)
}

pub fn load_scaler(path: &Path) -> Result<(StandardScaler, ArtifactInfo), ArtifactLoadError> {
    load_artifact(path)
}

pub fn save_linear_model(model: &LinearRegressor, path: &Path) -> Result<ArtifactInfo, ArtifactLoadError> {
    save_artifact(model, path)
}

pub fn load_linear_model(path: &Path) -> Result<(LinearRegressor, ArtifactInfo), ArtifactLoadError> {
    load_artifact(path)
}

/// Checksum a raw model file that has no envelope (e.g. ONNX)
pub fn file_info(path: &Path, kind: ArtifactKind) -> Result<ArtifactInfo, ArtifactLoadError> {
    if !path.exists() {
        return Err(ArtifactLoadError::NotFound(path.to_path_buf()));
    }
    let data = fs::read(path).map_err(|e| io_error(path, e))?;
    let created_at = fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Utc>::from);

    Ok(ArtifactInfo {
        path: path.to_path_buf(),
        kind,
        checksum: sha256_hex(&data),
        created_at,
    })
}
