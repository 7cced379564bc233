//! Command-line front end
//!
//! A thin caller of the pipeline: parses form values, loads artifacts once,
//! prints the label and score.

pub mod layout;
pub mod predict;
pub mod verify;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::logic::artifact::{ArtifactConfig, ModelFormat};
use crate::logic::error::ArtifactLoadError;

pub use layout::LayoutCommand;
pub use predict::PredictCommand;
pub use verify::VerifyCommand;

/// Student grade band prediction
#[derive(Parser, Debug)]
#[command(name = "grade-predict", version, about)]
pub struct Cli {
    /// Directory holding the scaler and model artifacts
    #[arg(long, global = true, env = "GRADE_ARTIFACT_DIR")]
    pub artifact_dir: Option<PathBuf>,

    /// Model backend
    #[arg(long, global = true, value_enum)]
    pub model_format: Option<ModelFormat>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict the grade band for one student
    Predict(PredictCommand),
    /// Show the feature schema
    Layout(LayoutCommand),
    /// Load both artifacts and report their metadata
    Verify(VerifyCommand),
}

impl Cli {
    /// Environment defaults overridden by command-line flags
    pub fn artifact_config(&self) -> Result<ArtifactConfig, ArtifactLoadError> {
        let mut config = ArtifactConfig::from_env()?;
        if let Some(dir) = &self.artifact_dir {
            config.dir = dir.clone();
        }
        if let Some(format) = self.model_format {
            config = config.with_model_format(format);
        }
        Ok(config)
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
