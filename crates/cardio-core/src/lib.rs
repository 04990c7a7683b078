//! Cardio Core - Cardiovascular Risk Scoring Library
//!
//! Pure Rust implementation of a deterministic, point-based heart
//! disease risk heuristic. Nine patient vitals and risk-factor inputs
//! are scored into a tiered report with a per-factor breakdown and
//! ordered recommendation lists.
//!
//! # Features
//!
//! - Fixed threshold scoring over age, blood pressure, cholesterol,
//!   resting heart rate, and lifestyle factors
//! - Risk percentage clamped to 5-95%
//! - Reproducible recommendation and next-step lists
//!
//! # Example
//!
//! ```rust
//! use cardio_core::{
//!     assess, DiabetesStatus, FamilyHistory, RiskLevel, RiskProfile,
//!     Sex, SmokingStatus,
//! };
//!
//! let profile = RiskProfile {
//!     age: 30,
//!     sex: Sex::Female,
//!     systolic_bp: 110,
//!     diastolic_bp: 70,
//!     cholesterol: 180,
//!     resting_heart_rate: 70,
//!     smoking: SmokingStatus::Never,
//!     diabetes: DiabetesStatus::No,
//!     family_history: FamilyHistory::None,
//! };
//!
//! let report = assess(&profile);
//! assert_eq!(report.risk_level, RiskLevel::Low);
//! assert_eq!(report.risk_percentage, 5);
//! ```
//!
//! This is a hand-authored point heuristic, not a validated clinical
//! model; reports are informational only.

pub mod profile;
pub mod report;
pub mod scoring;

// Re-export commonly used types for convenience
pub use profile::{DiabetesStatus, FamilyHistory, RiskProfile, Sex, SmokingStatus};
pub use report::{RiskAssessment, RiskFactors};
pub use scoring::{assess, FactorAssessment};

use serde::{Deserialize, Serialize};

/// Lowest reportable risk percentage
pub const MIN_RISK_PERCENTAGE: u8 = 5;

/// Highest reportable risk percentage
pub const MAX_RISK_PERCENTAGE: u8 = 95;

/// Percentage below which the overall assessment is low risk
pub const LOW_RISK_BREAKPOINT: u8 = 30;

/// Percentage below which the overall assessment is moderate risk
pub const MODERATE_RISK_BREAKPOINT: u8 = 70;

/// Risk tier for the overall assessment and for individual factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// No significant concern in this category
    Low,
    /// Elevated; lifestyle changes or monitoring recommended
    Moderate,
    /// Substantially elevated; professional evaluation recommended
    High,
}

impl RiskLevel {
    /// Overall tier from the clamped risk percentage
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage < LOW_RISK_BREAKPOINT {
            RiskLevel::Low
        } else if percentage < MODERATE_RISK_BREAKPOINT {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    /// Wire/display name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }

    /// Patient-facing summary of what the overall tier means
    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::Low => {
                "Your current risk factors suggest a low probability of developing heart disease in the next 10 years. Continue maintaining healthy lifestyle choices."
            }
            RiskLevel::Moderate => {
                "You have some risk factors that may increase your chances of heart disease. Consider discussing prevention strategies with your healthcare provider."
            }
            RiskLevel::High => {
                "Multiple risk factors indicate an elevated risk for heart disease. It's important to consult with a healthcare professional for comprehensive evaluation and management."
            }
        }
    }
}
