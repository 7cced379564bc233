//! Grade Banding Table
//!
//! Maps a continuous score to a grade band. The policy is a declared,
//! ordered list of closed upper bounds; the first row whose bound is
//! `>= score` wins, anything above the last row falls to `otherwise`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete grade band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeBand {
    Low,
    Adequate,
    High,
}

impl GradeBand {
    /// Label shown to the user
    pub fn label(self) -> &'static str {
        match self {
            GradeBand::Low => "Grade Rendah",
            GradeBand::Adequate => "Grade Cukup",
            GradeBand::High => "Grade Tinggi",
        }
    }
}

impl fmt::Display for GradeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One `score <= upper` row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandRow {
    pub upper: f64,
    pub band: GradeBand,
}

/// Upper bound (inclusive) of the low band
pub const LOW_UPPER: f64 = 2.0;

/// Upper bound (inclusive) of the adequate band
pub const ADEQUATE_UPPER: f64 = 6.0;

const STANDARD_ROWS: [BandRow; 2] = [
    BandRow {
        upper: LOW_UPPER,
        band: GradeBand::Low,
    },
    BandRow {
        upper: ADEQUATE_UPPER,
        band: GradeBand::Adequate,
    },
];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("band bounds must be finite and strictly ascending (row {index}: {upper})")]
pub struct BandingError {
    pub index: usize,
    pub upper: f64,
}

/// Ordered banding policy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeBanding {
    rows: Vec<BandRow>,
    otherwise: GradeBand,
}

impl Default for GradeBanding {
    fn default() -> Self {
        Self::standard()
    }
}

impl GradeBanding {
    /// ≤2 → Rendah, ≤6 → Cukup, >6 → Tinggi
    pub fn standard() -> Self {
        Self {
            rows: STANDARD_ROWS.to_vec(),
            otherwise: GradeBand::High,
        }
    }

    pub fn new(rows: Vec<BandRow>, otherwise: GradeBand) -> Result<Self, BandingError> {
        let mut previous = f64::NEG_INFINITY;
        for (index, row) in rows.iter().enumerate() {
            if !row.upper.is_finite() || row.upper <= previous {
                return Err(BandingError {
                    index,
                    upper: row.upper,
                });
            }
            previous = row.upper;
        }
        Ok(Self { rows, otherwise })
    }

    /// Band for `score`, first match wins
    pub fn classify(&self, score: f64) -> GradeBand {
        self.rows
            .iter()
            .find(|row| score <= row.upper)
            .map(|row| row.band)
            .unwrap_or(self.otherwise)
    }

    pub fn rows(&self) -> &[BandRow] {
        &self.rows
    }

    pub fn otherwise(&self) -> GradeBand {
        self.otherwise
    }
}
