//! Patient risk profile
//!
//! The structured input record for the scorer: demographics, vitals,
//! and the three lifestyle/history categories. Fields are expected to
//! be range-validated upstream (see the `cardio-intake` crate); the
//! scorer itself does not re-check them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Validated questionnaire inputs for one assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskProfile {
    /// Age in years (1-120)
    pub age: u32,
    /// Biological sex for scoring purposes
    pub sex: Sex,
    /// Systolic blood pressure in mmHg (70-250)
    pub systolic_bp: u32,
    /// Diastolic blood pressure in mmHg (40-150, below systolic)
    pub diastolic_bp: u32,
    /// Total cholesterol in mg/dL (100-500)
    pub cholesterol: u32,
    /// Resting heart rate in bpm (40-200)
    pub resting_heart_rate: u32,
    /// Smoking status
    pub smoking: SmokingStatus,
    /// Diabetes status
    pub diabetes: DiabetesStatus,
    /// Family history of heart disease
    pub family_history: FamilyHistory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmokingStatus {
    /// Never smoked
    Never,
    /// Quit smoking
    Former,
    /// Currently smoking
    Current,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiabetesStatus {
    /// No diabetes
    No,
    /// Pre-diabetic
    Prediabetes,
    /// Diagnosed type 2 diabetes
    Type2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyHistory {
    /// No family history of heart disease
    None,
    /// Heart disease in distant relatives
    Distant,
    /// Heart disease in immediate family (parent or sibling)
    Immediate,
}

/// Error returned when a categorical field's wire value is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptionError {
    value: String,
    options: &'static [&'static str],
}

impl ParseOptionError {
    fn new(value: &str, options: &'static [&'static str]) -> Self {
        ParseOptionError {
            value: value.to_string(),
            options,
        }
    }

    /// The rejected input value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The accepted wire values for the field
    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }
}

impl fmt::Display for ParseOptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized option '{}', expected one of: {}",
            self.value,
            self.options.join(", ")
        )
    }
}

impl std::error::Error for ParseOptionError {}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            other => Err(ParseOptionError::new(other, &["male", "female"])),
        }
    }
}

impl SmokingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SmokingStatus::Never => "never",
            SmokingStatus::Former => "former",
            SmokingStatus::Current => "current",
        }
    }
}

impl FromStr for SmokingStatus {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "never" => Ok(SmokingStatus::Never),
            "former" => Ok(SmokingStatus::Former),
            "current" => Ok(SmokingStatus::Current),
            other => Err(ParseOptionError::new(other, &["never", "former", "current"])),
        }
    }
}

impl DiabetesStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiabetesStatus::No => "no",
            DiabetesStatus::Prediabetes => "prediabetes",
            DiabetesStatus::Type2 => "type2",
        }
    }
}

impl FromStr for DiabetesStatus {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no" => Ok(DiabetesStatus::No),
            "prediabetes" => Ok(DiabetesStatus::Prediabetes),
            "type2" => Ok(DiabetesStatus::Type2),
            other => Err(ParseOptionError::new(other, &["no", "prediabetes", "type2"])),
        }
    }
}

impl FamilyHistory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FamilyHistory::None => "none",
            FamilyHistory::Distant => "distant",
            FamilyHistory::Immediate => "immediate",
        }
    }
}

impl FromStr for FamilyHistory {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(FamilyHistory::None),
            "distant" => Ok(FamilyHistory::Distant),
            "immediate" => Ok(FamilyHistory::Immediate),
            other => Err(ParseOptionError::new(other, &["none", "distant", "immediate"])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_values_roundtrip() {
        for (value, expected) in [
            ("never", SmokingStatus::Never),
            ("former", SmokingStatus::Former),
            ("current", SmokingStatus::Current),
        ] {
            assert_eq!(value.parse::<SmokingStatus>().unwrap(), expected);
            assert_eq!(expected.as_str(), value);
        }

        assert_eq!("type2".parse::<DiabetesStatus>().unwrap(), DiabetesStatus::Type2);
        assert_eq!("immediate".parse::<FamilyHistory>().unwrap(), FamilyHistory::Immediate);
        assert_eq!("female".parse::<Sex>().unwrap(), Sex::Female);
    }

    #[test]
    fn test_unknown_option_rejected() {
        let err = "smoker".parse::<SmokingStatus>().unwrap_err();
        assert_eq!(err.value(), "smoker");
        assert!(err.options().contains(&"current"));
    }

    #[test]
    fn test_serde_matches_from_str() {
        let json = serde_json::to_string(&DiabetesStatus::Type2).unwrap();
        assert_eq!(json, "\"type2\"");

        let parsed: FamilyHistory = serde_json::from_str("\"distant\"").unwrap();
        assert_eq!(parsed, FamilyHistory::Distant);
    }

    #[test]
    fn test_profile_serde_roundtrip() {
        let profile = RiskProfile {
            age: 52,
            sex: Sex::Male,
            systolic_bp: 135,
            diastolic_bp: 85,
            cholesterol: 210,
            resting_heart_rate: 72,
            smoking: SmokingStatus::Former,
            diabetes: DiabetesStatus::Prediabetes,
            family_history: FamilyHistory::Distant,
        };

        let json = serde_json::to_string(&profile).unwrap();
        let back: RiskProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, back);
    }
}
