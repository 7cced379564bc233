//! Artifact Format - Versioned JSON Envelope
//!
//! Every artifact file is one UTF-8 JSON object:
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "kind": "standard_scaler",
//!   "feature_version": 1,
//!   "layout_hash": 2914235791,
//!   "created_at": "2026-01-01T00:00:00Z",
//!   "checksum": "<hex sha256 of the payload's compact JSON>",
//!   "payload": { "mean": [...], "scale": [...] }
//! }
//! ```
//!
//! Payloads:
//! - `standard_scaler`: `{ "mean": [f64; 7], "scale": [f64; 7] }`
//! - `linear_regressor`: `{ "coefficients": [f64; 7], "intercept": f64 }`
//!
//! The checksum covers the payload re-serialized with serde_json in compact
//! form, so whitespace in the file does not matter.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::logic::error::ArtifactLoadError;
use crate::logic::features::layout::{layout_hash, validate_layout, FEATURE_VERSION};
use crate::logic::model::{LinearRegressor, StandardScaler};

/// Current envelope format version
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    StandardScaler,
    LinearRegressor,
    /// Raw ONNX graph file, stored without an envelope
    Onnx,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactKind::StandardScaler => "standard_scaler",
            ArtifactKind::LinearRegressor => "linear_regressor",
            ArtifactKind::Onnx => "onnx",
        };
        f.write_str(name)
    }
}

/// Content that can travel inside an envelope
pub trait ArtifactPayload: Serialize + DeserializeOwned {
    const KIND: ArtifactKind;

    /// Reject parameters that deserialized fine but cannot be used
    fn check(&self) -> Result<(), ArtifactLoadError>;
}

impl ArtifactPayload for StandardScaler {
    const KIND: ArtifactKind = ArtifactKind::StandardScaler;

    fn check(&self) -> Result<(), ArtifactLoadError> {
        StandardScaler::check(self)
    }
}

impl ArtifactPayload for LinearRegressor {
    const KIND: ArtifactKind = ArtifactKind::LinearRegressor;

    fn check(&self) -> Result<(), ArtifactLoadError> {
        LinearRegressor::check(self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactEnvelope<T> {
    pub format_version: u32,
    pub kind: ArtifactKind,
    pub feature_version: u8,
    pub layout_hash: u32,
    pub created_at: DateTime<Utc>,
    pub checksum: String,
    pub payload: T,
}

/// Hex SHA-256 of the payload's compact JSON
pub fn payload_checksum<T: Serialize>(payload: &T) -> Result<String, serde_json::Error> {
    let bytes = serde_json::to_vec(payload)?;
    Ok(sha256_hex(&bytes))
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

impl<T: ArtifactPayload> ArtifactEnvelope<T> {
    /// Wrap a payload for the current layout
    pub fn seal(payload: T) -> Result<Self, serde_json::Error> {
        let checksum = payload_checksum(&payload)?;
        Ok(Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            kind: T::KIND,
            feature_version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            created_at: Utc::now(),
            checksum,
            payload,
        })
    }
}

impl ArtifactEnvelope<serde_json::Value> {
    /// Check the header, then decode and verify the payload
    pub fn open<T: ArtifactPayload>(self) -> Result<ArtifactEnvelope<T>, ArtifactLoadError> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ArtifactLoadError::UnsupportedFormat {
                found: self.format_version,
                supported: ARTIFACT_FORMAT_VERSION,
            });
        }
        if self.kind != T::KIND {
            return Err(ArtifactLoadError::WrongKind {
                expected: T::KIND,
                found: self.kind,
            });
        }
        validate_layout(self.feature_version, self.layout_hash)?;

        let payload: T = serde_json::from_value(self.payload)
            .map_err(|e| ArtifactLoadError::Invalid(format!("payload does not match {}: {}", T::KIND, e)))?;

        let computed = payload_checksum(&payload)
            .map_err(|e| ArtifactLoadError::Invalid(e.to_string()))?;
        if computed != self.checksum {
            return Err(ArtifactLoadError::Checksum {
                recorded: self.checksum,
                computed,
            });
        }

        payload.check()?;

        Ok(ArtifactEnvelope {
            format_version: self.format_version,
            kind: self.kind,
            feature_version: self.feature_version,
            layout_hash: self.layout_hash,
            created_at: self.created_at,
            checksum: self.checksum,
            payload,
        })
    }
}
