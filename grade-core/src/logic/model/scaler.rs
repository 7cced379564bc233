//! Standard Scaler - Fitted Feature Normalization
//!
//! Applies `(x - mean) / scale` per feature with parameters learned at
//! training time. Never re-fits.

use serde::{Deserialize, Serialize};

use crate::logic::error::{ArtifactLoadError, ShapeError};
use crate::logic::features::FEATURE_COUNT;

/// Normalized feature values, same order as the input vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedVector(pub [f64; FEATURE_COUNT]);

impl NormalizedVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Fitted standardization parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, ArtifactLoadError> {
        let scaler = Self { mean, scale };
        scaler.check()?;
        Ok(scaler)
    }

    /// Pass-through scaler (mean 0, scale 1)
    pub fn identity(dim: usize) -> Self {
        Self {
            mean: vec![0.0; dim],
            scale: vec![1.0; dim],
        }
    }

    /// Validate parameters; also run after deserializing an artifact
    pub fn check(&self) -> Result<(), ArtifactLoadError> {
        if self.mean.len() != self.scale.len() {
            return Err(ArtifactLoadError::Invalid(format!(
                "scaler has {} means but {} scales",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if self.mean.iter().any(|m| !m.is_finite()) {
            return Err(ArtifactLoadError::Invalid("scaler mean is not finite".to_string()));
        }
        if let Some(i) = self.scale.iter().position(|s| !s.is_finite() || *s == 0.0) {
            return Err(ArtifactLoadError::Invalid(format!(
                "scaler scale[{}] = {} is not a usable divisor",
                i, self.scale[i]
            )));
        }
        Ok(())
    }

    pub fn dim(&self) -> usize {
        self.mean.len()
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    pub fn scale(&self) -> &[f64] {
        &self.scale
    }

    /// Normalize one raw feature vector
    pub fn normalize(&self, values: &[f64]) -> Result<NormalizedVector, ShapeError> {
        if values.len() != FEATURE_COUNT {
            return Err(ShapeError::Length {
                expected: FEATURE_COUNT,
                actual: values.len(),
            });
        }
        if self.dim() != FEATURE_COUNT {
            return Err(ShapeError::Length {
                expected: self.dim(),
                actual: values.len(),
            });
        }

        let mut normalized = [0.0f64; FEATURE_COUNT];
        for (i, out) in normalized.iter_mut().enumerate() {
            *out = (values[i] - self.mean[i]) / self.scale[i];
        }

        Ok(NormalizedVector(normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn fitted() -> StandardScaler {
        StandardScaler::new(
            vec![11.4, 11.6, 3.7, 0.48, 0.06, 0.22, 1.93],
            vec![2.74, 2.91, 4.64, 0.5, 0.24, 0.59, 0.83],
        )
        .unwrap()
    }

    #[test]
    fn test_mean_maps_to_zero() {
        let scaler = fitted();
        let out = scaler.normalize(scaler.mean()).unwrap();
        for v in out.as_slice() {
            assert!(v.abs() < EPS);
        }
    }

    #[test]
    fn test_mean_plus_scale_maps_to_one() {
        let scaler = fitted();
        let shifted: Vec<f64> = scaler
            .mean()
            .iter()
            .zip(scaler.scale())
            .map(|(m, c)| m + c)
            .collect();

        let out = scaler.normalize(&shifted).unwrap();
        for v in out.as_slice() {
            assert!((v - 1.0).abs() < 1e-9, "got {}", v);
        }
    }

    #[test]
    fn test_order_preserved() {
        let scaler = StandardScaler::identity(FEATURE_COUNT);
        let raw = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        assert_eq!(scaler.normalize(&raw).unwrap().0, raw);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let scaler = fitted();
        assert_eq!(
            scaler.normalize(&[1.0; 6]),
            Err(ShapeError::Length { expected: 7, actual: 6 })
        );
        assert!(scaler.normalize(&[1.0; 8]).is_err());
    }

    #[test]
    fn test_scaler_dimension_mismatch_rejected() {
        let scaler = StandardScaler::identity(5);
        assert_eq!(
            scaler.normalize(&[1.0; 7]),
            Err(ShapeError::Length { expected: 5, actual: 7 })
        );
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(StandardScaler::new(vec![0.0; 7], vec![1.0; 6]).is_err());
        assert!(StandardScaler::new(vec![0.0; 7], vec![0.0; 7]).is_err());
        assert!(StandardScaler::new(vec![f64::NAN; 7], vec![1.0; 7]).is_err());
    }

    #[test]
    fn test_normalize_is_pure() {
        let scaler = fitted();
        let before = scaler.clone();
        let raw = [10.0, 10.0, 5.0, 1.0, 0.0, 0.0, 2.0];
        let a = scaler.normalize(&raw).unwrap();
        let b = scaler.normalize(&raw).unwrap();
        assert_eq!(a, b);
        assert_eq!(scaler, before);
    }
}
