//! Cardio Intake - Questionnaire Input Validation
//!
//! Turns raw, string-typed questionnaire fields (as collected by any
//! front end) into a validated [`RiskProfile`] for the scoring core.
//! All range rules live here; the core trusts its inputs.
//!
//! # Example
//!
//! ```rust
//! use cardio_intake::IntakeForm;
//!
//! let form = IntakeForm {
//!     age: "52".into(),
//!     sex: "male".into(),
//!     systolic_bp: "135".into(),
//!     diastolic_bp: "85".into(),
//!     cholesterol: "210".into(),
//!     heart_rate: "72".into(),
//!     smoking: "former".into(),
//!     diabetes: "no".into(),
//!     family_history: "distant".into(),
//! };
//!
//! let profile = form.validate().unwrap();
//! assert_eq!(profile.age, 52);
//! ```

use cardio_core::{DiabetesStatus, FamilyHistory, RiskProfile, Sex, SmokingStatus};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Accepted age range in years
pub const AGE_RANGE: (u32, u32) = (1, 120);
/// Accepted systolic blood pressure range in mmHg
pub const SYSTOLIC_RANGE: (u32, u32) = (70, 250);
/// Accepted diastolic blood pressure range in mmHg
pub const DIASTOLIC_RANGE: (u32, u32) = (40, 150);
/// Accepted total cholesterol range in mg/dL
pub const CHOLESTEROL_RANGE: (u32, u32) = (100, 500);
/// Accepted resting heart rate range in bpm
pub const HEART_RATE_RANGE: (u32, u32) = (40, 200);

/// Raw questionnaire fields prior to validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeForm {
    /// Age in years
    pub age: String,
    /// "male" or "female"
    pub sex: String,
    /// Systolic blood pressure in mmHg
    pub systolic_bp: String,
    /// Diastolic blood pressure in mmHg
    pub diastolic_bp: String,
    /// Total cholesterol in mg/dL
    pub cholesterol: String,
    /// Resting heart rate in bpm
    pub heart_rate: String,
    /// "never", "former", or "current"
    pub smoking: String,
    /// "no", "prediabetes", or "type2"
    pub diabetes: String,
    /// "none", "distant", or "immediate"
    pub family_history: String,
}

/// Validation failure for a single intake field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("{field} must be a whole number, got '{value}'")]
    NotANumber { field: &'static str, value: String },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("systolic must be higher than diastolic, got {systolic}/{diastolic}")]
    PressureInversion { systolic: u32, diastolic: u32 },
    #[error("{field} has no option '{value}'")]
    UnknownOption { field: &'static str, value: String },
}

impl IntakeForm {
    /// Validate all nine fields and build a [`RiskProfile`].
    ///
    /// Returns the first failure encountered, checking fields in form
    /// order: age, sex, blood pressures (including the cross-field
    /// systolic > diastolic rule), cholesterol, heart rate, then the
    /// three select fields.
    pub fn validate(&self) -> Result<RiskProfile, IntakeError> {
        let age = parse_in_range("age", &self.age, AGE_RANGE)?;
        let sex: Sex = parse_option("sex", &self.sex)?;

        let systolic_bp =
            parse_in_range("systolic blood pressure", &self.systolic_bp, SYSTOLIC_RANGE)?;
        let diastolic_bp = parse_in_range(
            "diastolic blood pressure",
            &self.diastolic_bp,
            DIASTOLIC_RANGE,
        )?;
        if systolic_bp <= diastolic_bp {
            return Err(IntakeError::PressureInversion {
                systolic: systolic_bp,
                diastolic: diastolic_bp,
            });
        }

        let cholesterol = parse_in_range("cholesterol", &self.cholesterol, CHOLESTEROL_RANGE)?;
        let resting_heart_rate = parse_in_range("heart rate", &self.heart_rate, HEART_RATE_RANGE)?;

        let smoking: SmokingStatus = parse_option("smoking status", &self.smoking)?;
        let diabetes: DiabetesStatus = parse_option("diabetes status", &self.diabetes)?;
        let family_history: FamilyHistory = parse_option("family history", &self.family_history)?;

        Ok(RiskProfile {
            age,
            sex,
            systolic_bp,
            diastolic_bp,
            cholesterol,
            resting_heart_rate,
            smoking,
            diabetes,
            family_history,
        })
    }
}

fn parse_in_range(
    field: &'static str,
    raw: &str,
    (min, max): (u32, u32),
) -> Result<u32, IntakeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IntakeError::MissingField { field });
    }

    let value: u32 = trimmed.parse().map_err(|_| IntakeError::NotANumber {
        field,
        value: raw.to_string(),
    })?;

    if value < min || value > max {
        return Err(IntakeError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }

    Ok(value)
}

fn parse_option<T: FromStr>(field: &'static str, raw: &str) -> Result<T, IntakeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IntakeError::MissingField { field });
    }

    trimmed.parse().map_err(|_| IntakeError::UnknownOption {
        field,
        value: raw.to_string(),
    })
}
