//! Predict Command Implementation

use anyhow::{Context, Result};
use clap::Args;

use crate::logic::artifact::{load_predictor, ArtifactConfig};
use crate::logic::features::{StudentInput, YesNo};
use crate::logic::model::{GradePredictor, PredictionResult};
use crate::logic::PipelineResult;

/// Predict the final grade band from the seven form values
///
/// # Example
///
/// ```bash
/// grade-predict predict --g1 10 --g2 10 --absences 5 \
///     --activities yes --paid no --failures 0 --study-time 2
/// ```
#[derive(Args, Debug, Clone)]
pub struct PredictCommand {
    /// First exam grade (0-20)
    #[arg(long, default_value_t = 10)]
    pub g1: u8,

    /// Second exam grade (0-20)
    #[arg(long, default_value_t = 10)]
    pub g2: u8,

    /// Days absent
    #[arg(long, default_value_t = 5)]
    pub absences: u32,

    /// Extra-curricular activities
    #[arg(long, value_enum, default_value_t = YesNo::Yes)]
    pub activities: YesNo,

    /// Extra paid classes
    #[arg(long, value_enum, default_value_t = YesNo::Yes)]
    pub paid: YesNo,

    /// Previous failures (0-5)
    #[arg(long, default_value_t = 0)]
    pub failures: u8,

    /// Weekly study time (1-4)
    #[arg(long, default_value_t = 2)]
    pub study_time: u8,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl PredictCommand {
    pub fn input(&self) -> StudentInput {
        StudentInput {
            g1: self.g1,
            g2: self.g2,
            absences: self.absences,
            activities: self.activities,
            paid: self.paid,
            failures: self.failures,
            study_time: self.study_time,
        }
    }

    /// Run the pipeline against an already-loaded predictor
    pub fn execute(&self, predictor: &GradePredictor) -> PipelineResult<PredictionResult> {
        let vector = self.input().to_feature_vector();
        log::debug!("Input: {}", vector.to_log_entry());
        predictor.predict(&vector)
    }

    pub fn render(&self, result: &PredictionResult) -> Result<String> {
        if self.json {
            let body = serde_json::json!({
                "label": result.label(),
                "band": result.band,
                "score": result.score,
            });
            Ok(serde_json::to_string_pretty(&body)?)
        } else {
            Ok(result.to_string())
        }
    }

    pub fn run(&self, config: &ArtifactConfig) -> Result<()> {
        let predictor = load_predictor(config)
            .with_context(|| format!("loading artifacts from {}", config.dir.display()))?;

        let result = self.execute(&predictor).context("prediction failed")?;
        println!("{}", self.render(&result)?);
        Ok(())
    }
}
