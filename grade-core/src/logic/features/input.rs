//! Typed Student Input
//!
//! Form values arrive as loosely-typed strings ("Yes"/"No"). They are
//! converted here, at the boundary, before anything reaches the pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::vector::FeatureVector;
use crate::logic::error::ShapeError;

/// Yes/No categorical answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Encoding the scaler and model were fitted on (1 = Yes)
    pub fn as_feature(self) -> f64 {
        match self {
            YesNo::Yes => 1.0,
            YesNo::No => 0.0,
        }
    }

    pub fn parse_named(name: &'static str, input: &str) -> Result<Self, ShapeError> {
        input.parse().map_err(|_| ShapeError::Parse {
            name,
            input: input.to_string(),
        })
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

impl FromStr for YesNo {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" | "1" => Ok(YesNo::Yes),
            "no" | "n" | "false" | "0" => Ok(YesNo::No),
            _ => Err(()),
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YesNo::Yes => write!(f, "Yes"),
            YesNo::No => write!(f, "No"),
        }
    }
}

/// One student's answers in typed form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentInput {
    pub g1: u8,
    pub g2: u8,
    pub absences: u32,
    pub activities: YesNo,
    pub paid: YesNo,
    pub failures: u8,
    pub study_time: u8,
}

impl Default for StudentInput {
    /// Same starting values the prediction form shows
    fn default() -> Self {
        Self {
            g1: 10,
            g2: 10,
            absences: 5,
            activities: YesNo::Yes,
            paid: YesNo::Yes,
            failures: 0,
            study_time: 2,
        }
    }
}

impl StudentInput {
    /// Positional feature vector (domains not yet checked)
    pub fn to_feature_vector(&self) -> FeatureVector {
        FeatureVector::from_values([
            f64::from(self.g1),
            f64::from(self.g2),
            f64::from(self.absences),
            self.activities.as_feature(),
            self.paid.as_feature(),
            f64::from(self.failures),
            f64::from(self.study_time),
        ])
    }

    /// Feature vector with every domain checked
    pub fn to_validated_vector(&self) -> Result<FeatureVector, ShapeError> {
        let vector = self.to_feature_vector();
        vector.validate()?;
        Ok(vector)
    }
}

impl From<&StudentInput> for FeatureVector {
    fn from(input: &StudentInput) -> Self {
        input.to_feature_vector()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no_parsing() {
        assert_eq!("Yes".parse::<YesNo>(), Ok(YesNo::Yes));
        assert_eq!(" no ".parse::<YesNo>(), Ok(YesNo::No));
        assert_eq!("TRUE".parse::<YesNo>(), Ok(YesNo::Yes));
        assert_eq!("0".parse::<YesNo>(), Ok(YesNo::No));
        assert!("maybe".parse::<YesNo>().is_err());
    }

    #[test]
    fn test_parse_named_reports_field() {
        let err = YesNo::parse_named("paid", "sometimes").unwrap_err();
        assert_eq!(
            err,
            ShapeError::Parse {
                name: "paid",
                input: "sometimes".to_string()
            }
        );
    }

    #[test]
    fn test_encoding() {
        assert_eq!(YesNo::Yes.as_feature(), 1.0);
        assert_eq!(YesNo::No.as_feature(), 0.0);
        assert_eq!(YesNo::from(true), YesNo::Yes);
    }

    #[test]
    fn test_student_input_positions() {
        let input = StudentInput {
            activities: YesNo::Yes,
            paid: YesNo::No,
            ..Default::default()
        };

        let vector = input.to_feature_vector();
        assert_eq!(vector.values, [10.0, 10.0, 5.0, 1.0, 0.0, 0.0, 2.0]);
    }

    #[test]
    fn test_student_input_domain_check() {
        let input = StudentInput {
            g2: 21,
            ..Default::default()
        };
        assert!(matches!(
            input.to_validated_vector(),
            Err(ShapeError::Domain { name: "g2", .. })
        ));

        let input = StudentInput {
            study_time: 0,
            ..Default::default()
        };
        assert!(input.to_validated_vector().is_err());
    }

    #[test]
    fn test_student_input_json() {
        let json = r#"{"g1":12,"g2":13,"absences":0,"activities":"no","paid":"yes","failures":1,"study_time":3}"#;
        let input: StudentInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.activities, YesNo::No);
        assert_eq!(input.to_feature_vector().values[4], 1.0);
    }
}
