//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! The scaler and the model were fitted on exactly this order.
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION
//!
//! Artifacts record the version and layout hash they were fitted against,
//! and are rejected at load time when either differs.

use crc32fast::Hasher;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the vector
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Academic (0-1) ===
    "g1",                    // 0: First period grade (0-20)
    "g2",                    // 1: Second period grade (0-20)

    // === Attendance (2) ===
    "absences",              // 2: Number of school absences

    // === Categorical Yes/No (3-4) ===
    "activities",            // 3: Extra-curricular activities (1 = yes)
    "paid",                  // 4: Extra paid classes (1 = yes)

    // === History / Effort (5-6) ===
    "failures",              // 5: Number of past class failures (0-5)
    "studytime",             // 6: Weekly study time bucket (1-4)
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 7;

// ============================================================================
// FEATURE DOMAINS
// ============================================================================

/// How a feature value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    /// Bounded score or count
    Numeric,
    /// Yes/No encoded as 1/0
    Boolean,
}

/// Schema entry for one feature
#[derive(Debug, Clone, Serialize)]
pub struct FeatureSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FeatureKind,
    pub min: f64,
    /// `None` means unbounded above
    pub max: Option<f64>,
    pub description: &'static str,
}

impl FeatureSpec {
    /// Check that `value` lies in this feature's domain
    pub fn accepts(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min {
            return false;
        }
        if let Some(max) = self.max {
            if value > max {
                return false;
            }
        }
        match self.kind {
            FeatureKind::Numeric => true,
            FeatureKind::Boolean => value == 0.0 || value == 1.0,
        }
    }
}

/// Per-feature domains, same order as FEATURE_LAYOUT
pub static FEATURE_SPECS: [FeatureSpec; FEATURE_COUNT] = [
    FeatureSpec {
        name: "g1",
        label: "G1",
        kind: FeatureKind::Numeric,
        min: 0.0,
        max: Some(20.0),
        description: "First exam grade (0-20). Reflects the student's early performance in the subject.",
    },
    FeatureSpec {
        name: "g2",
        label: "G2",
        kind: FeatureKind::Numeric,
        min: 0.0,
        max: Some(20.0),
        description: "Second exam grade (0-20). Shows understanding after a period of study.",
    },
    FeatureSpec {
        name: "absences",
        label: "Absences",
        kind: FeatureKind::Numeric,
        min: 0.0,
        max: None,
        description: "Number of days absent during the period. Low attendance can affect understanding.",
    },
    FeatureSpec {
        name: "activities",
        label: "Activities",
        kind: FeatureKind::Boolean,
        min: 0.0,
        max: Some(1.0),
        description: "Takes part in extra-curricular activities (Yes/No).",
    },
    FeatureSpec {
        name: "paid",
        label: "Paid",
        kind: FeatureKind::Boolean,
        min: 0.0,
        max: Some(1.0),
        description: "Attends extra paid private classes (Yes/No).",
    },
    FeatureSpec {
        name: "failures",
        label: "Failures",
        kind: FeatureKind::Numeric,
        min: 0.0,
        max: Some(5.0),
        description: "Number of previous exam failures. More failures may indicate a need for extra help.",
    },
    FeatureSpec {
        name: "studytime",
        label: "StudyTime",
        kind: FeatureKind::Numeric,
        min: 1.0,
        max: Some(4.0),
        description: "Weekly study time outside school (1-4).",
    },
];

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// Compute CRC32 hash of the feature layout
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

static LAYOUT_HASH: Lazy<u32> = Lazy::new(compute_layout_hash);

/// Get layout hash (computed once per process)
pub fn layout_hash() -> u32 {
    *LAYOUT_HASH
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Complete layout information for serialization/logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self::current()
    }
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when feature layout doesn't match expected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "feature layout mismatch: expected v{expected_version} (hash: {expected_hash:08x}), \
     got v{actual_version} (hash: {actual_hash:08x})"
)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

/// Validate that incoming data matches current layout
pub fn validate_layout(incoming_version: u8, incoming_hash: u32) -> Result<(), LayoutMismatchError> {
    let current_hash = layout_hash();

    if incoming_version != FEATURE_VERSION || incoming_hash != current_hash {
        return Err(LayoutMismatchError {
            expected_version: FEATURE_VERSION,
            expected_hash: current_hash,
            actual_version: incoming_version,
            actual_hash: incoming_hash,
        });
    }

    Ok(())
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

// ============================================================================
// TESTS
// ============================================================================
