//! Configuration module

use std::env;

use grade_core::{ArtifactConfig, ArtifactLoadError};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Where the scaler and model artifacts are read from
    pub artifacts: ArtifactConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ArtifactLoadError> {
        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),

            artifacts: ArtifactConfig::from_env()?,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_model_format_stops_startup() {
        env::set_var("GRADE_MODEL_FORMAT", "onxx");
        let result = Config::from_env();
        env::remove_var("GRADE_MODEL_FORMAT");

        assert!(matches!(result, Err(ArtifactLoadError::Invalid(_))));
    }
}
