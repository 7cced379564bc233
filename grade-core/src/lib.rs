//! Grade Predict Core
//!
//! Predicts a student's final grade band from seven behavioural and academic
//! features:
//!
//! ```text
//! raw features ─► validate ─► StandardScaler ─► Regressor ─► GradeBanding
//!                                                   │             │
//!                                                 score ───► (label, score)
//! ```
//!
//! Artifacts are loaded once (`logic::artifact::load_predictor`) and the
//! resulting `GradePredictor` is shared by reference or `Arc`.

pub mod commands;
pub mod constants;
pub mod logic;

pub use logic::artifact::{load_predictor, ArtifactConfig};
pub use logic::features::{FeatureVector, StudentInput, YesNo};
pub use logic::model::{GradeBand, GradePredictor, PredictionResult};
pub use logic::{ArtifactLoadError, InferenceError, PipelineError, ShapeError};
