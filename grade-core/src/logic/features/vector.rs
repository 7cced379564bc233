//! Feature Vector - Core data structure for model input
//!
//! **Versioned feature vector with layout validation**
//!
//! Values are positional: `[G1, G2, Absences, Activities, Paid, Failures, StudyTime]`.
//! Construction from a slice checks the length; `validate()` checks the
//! per-feature domains from `layout.rs`.

use serde::{Deserialize, Serialize};

use super::layout::{
    layout_hash, validate_layout, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_SPECS, FEATURE_VERSION,
};
use crate::logic::error::ShapeError;

// ============================================================================
// VERSIONED FEATURE VECTOR
// ============================================================================

/// Versioned Feature Vector with layout metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature layout version
    pub version: u8,
    /// CRC32 hash of the feature layout
    pub layout_hash: u32,
    /// Feature values in order defined by FEATURE_LAYOUT
    pub values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create from raw values with current version
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        }
    }

    /// Create from a slice, rejecting anything that is not exactly FEATURE_COUNT long
    pub fn from_slice(values: &[f64]) -> Result<Self, ShapeError> {
        let array: [f64; FEATURE_COUNT] = values.try_into().map_err(|_| ShapeError::Length {
            expected: FEATURE_COUNT,
            actual: values.len(),
        })?;
        Ok(Self::from_values(array))
    }

    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        super::layout::feature_index(name).and_then(|i| self.get(i))
    }

    /// Check layout compatibility and every value against its feature domain
    pub fn validate(&self) -> Result<(), ShapeError> {
        validate_layout(self.version, self.layout_hash)?;

        for (spec, &value) in FEATURE_SPECS.iter().zip(self.values.iter()) {
            if !spec.accepts(value) {
                return Err(ShapeError::Domain {
                    name: spec.name,
                    value,
                });
            }
        }

        Ok(())
    }

    /// Convert to JSON-serializable format for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "feature_version": self.version,
            "layout_hash": self.layout_hash,
            "named_values": FEATURE_LAYOUT.iter()
                .zip(self.values.iter())
                .map(|(name, value)| (name.to_string(), *value))
                .collect::<std::collections::BTreeMap<_, _>>(),
        })
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self::from_values(values)
    }
}

impl TryFrom<&[f64]> for FeatureVector {
    type Error = ShapeError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl TryFrom<Vec<f64>> for FeatureVector {
    type Error = ShapeError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeatureVector {
        FeatureVector::from_values([10.0, 10.0, 5.0, 1.0, 0.0, 0.0, 2.0])
    }

    #[test]
    fn test_feature_vector_from_values() {
        let vector = sample();
        assert_eq!(vector.version, FEATURE_VERSION);
        assert_eq!(vector.layout_hash, layout_hash());
        assert_eq!(vector.get_by_name("absences"), Some(5.0));
        assert_eq!(vector.get_by_name("studytime"), Some(2.0));
        assert_eq!(vector.get_by_name("nonexistent"), None);
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        for len in [0usize, 1, 6, 8, 15] {
            let values = vec![1.0; len];
            let err = FeatureVector::from_slice(&values).unwrap_err();
            assert_eq!(
                err,
                ShapeError::Length {
                    expected: FEATURE_COUNT,
                    actual: len
                }
            );
        }
    }

    #[test]
    fn test_try_from_vec() {
        let vector = FeatureVector::try_from(vec![10.0, 10.0, 5.0, 1.0, 0.0, 0.0, 2.0]).unwrap();
        assert_eq!(vector, sample());
    }

    #[test]
    fn test_validate_accepts_in_range() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_categorical() {
        let mut vector = sample();
        vector.values[3] = 2.0;

        match vector.validate() {
            Err(ShapeError::Domain { name, value }) => {
                assert_eq!(name, "activities");
                assert_eq!(value, 2.0);
            }
            other => panic!("Expected Domain error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut vector = sample();
        vector.values[0] = f64::INFINITY;
        assert!(vector.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_foreign_layout() {
        let mut vector = sample();
        vector.layout_hash ^= 0xdead_beef;
        assert!(matches!(vector.validate(), Err(ShapeError::Layout(_))));
    }

    #[test]
    fn test_to_log_entry() {
        let log = sample().to_log_entry();
        assert_eq!(log["feature_version"], FEATURE_VERSION);
        assert_eq!(log["named_values"]["g1"], 10.0);
    }
}
