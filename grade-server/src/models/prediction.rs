//! Prediction models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use grade_core::{GradeBand, PredictionResult, ShapeError, StudentInput, YesNo};

/// Form values as the dashboard submits them
///
/// `activities` and `paid` arrive as the strings "Yes"/"No" and are parsed
/// case-insensitively.
#[derive(Debug, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(range(max = 20))]
    pub g1: u8,

    #[validate(range(max = 20))]
    pub g2: u8,

    pub absences: u32,

    pub activities: String,

    pub paid: String,

    #[validate(range(max = 5))]
    pub failures: u8,

    #[validate(range(min = 1, max = 4))]
    pub study_time: u8,
}

impl PredictRequest {
    pub fn to_input(&self) -> Result<StudentInput, ShapeError> {
        Ok(StudentInput {
            g1: self.g1,
            g2: self.g2,
            absences: self.absences,
            activities: YesNo::parse_named("activities", &self.activities)?,
            paid: YesNo::parse_named("paid", &self.paid)?,
            failures: self.failures,
            study_time: self.study_time,
        })
    }
}

/// Already-encoded feature values in model input order
#[derive(Debug, Deserialize, Validate)]
pub struct RawPredictRequest {
    #[validate(length(equal = 7))]
    pub features: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub id: Uuid,
    pub label: &'static str,
    pub band: GradeBand,
    pub score: f64,
    pub created_at: DateTime<Utc>,
}

impl From<PredictionResult> for PredictResponse {
    fn from(result: PredictionResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: result.label(),
            band: result.band,
            score: result.score,
            created_at: Utc::now(),
        }
    }
}
