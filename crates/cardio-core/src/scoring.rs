//! Risk scoring
//!
//! Accumulates a single integer risk score through independent
//! threshold rules while building the five per-factor assessments.
//! The function is pure: no clock, no randomness, no state.

use crate::profile::{DiabetesStatus, FamilyHistory, RiskProfile, Sex, SmokingStatus};
use crate::report::{build_next_steps, build_recommendations, RiskAssessment, RiskFactors};
use crate::{RiskLevel, MAX_RISK_PERCENTAGE, MIN_RISK_PERCENTAGE};
use serde::{Deserialize, Serialize};

/// Assessment of a single risk factor category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorAssessment {
    /// Tier for this category alone
    pub level: RiskLevel,
    /// Patient-facing explanation of the category's contribution
    pub description: String,
}

impl FactorAssessment {
    fn new(level: RiskLevel, description: impl Into<String>) -> Self {
        FactorAssessment {
            level,
            description: description.into(),
        }
    }
}

/// Score a risk profile into a tiered assessment report.
///
/// Trusts that the profile's fields have been range-validated upstream;
/// out-of-range values are scored without complaint by the same
/// threshold rules.
pub fn assess(profile: &RiskProfile) -> RiskAssessment {
    let mut risk_score: u32 = 0;

    let (age, points) = assess_age(profile.age);
    risk_score += points;

    // Male sex raises the aggregate score without its own factor entry
    if profile.sex == Sex::Male {
        risk_score += 10;
    }

    let (blood_pressure, points) = assess_blood_pressure(profile.systolic_bp, profile.diastolic_bp);
    risk_score += points;

    let (cholesterol, points) = assess_cholesterol(profile.cholesterol);
    risk_score += points;

    let (heart_rate, points) = assess_heart_rate(profile.resting_heart_rate);
    risk_score += points;

    let (lifestyle, points) = assess_lifestyle(profile);
    risk_score += points;

    // The raw sum is never reported; only the clamped percentage
    let risk_percentage = risk_score
        .clamp(MIN_RISK_PERCENTAGE as u32, MAX_RISK_PERCENTAGE as u32) as u8;
    let risk_level = RiskLevel::from_percentage(risk_percentage);

    let risk_factors = RiskFactors {
        age,
        blood_pressure,
        cholesterol,
        heart_rate,
        lifestyle,
    };

    let recommendations = build_recommendations(profile, risk_level, &risk_factors);
    let next_steps = build_next_steps(risk_level);

    RiskAssessment {
        risk_level,
        risk_percentage,
        risk_factors,
        recommendations,
        next_steps,
    }
}

fn assess_age(age: u32) -> (FactorAssessment, u32) {
    if age < 45 {
        (
            FactorAssessment::new(
                RiskLevel::Low,
                "Age is not a significant risk factor at this time.",
            ),
            0,
        )
    } else if age < 65 {
        (
            FactorAssessment::new(
                RiskLevel::Moderate,
                "Age is becoming a moderate risk factor. Regular monitoring recommended.",
            ),
            15,
        )
    } else {
        (
            FactorAssessment::new(
                RiskLevel::High,
                "Advanced age significantly increases cardiovascular risk.",
            ),
            25,
        )
    }
}

fn assess_blood_pressure(systolic: u32, diastolic: u32) -> (FactorAssessment, u32) {
    // Two-stage banding: both readings must clear a band together, so a
    // value like 130/95 fails the moderate diastolic test and lands in
    // the high branch.
    if systolic < 120 && diastolic < 80 {
        (
            FactorAssessment::new(
                RiskLevel::Low,
                "Blood pressure is optimal (Normal: <120/80 mmHg).",
            ),
            0,
        )
    } else if systolic < 140 && diastolic < 90 {
        (
            FactorAssessment::new(
                RiskLevel::Moderate,
                "Blood pressure is elevated. Consider lifestyle modifications.",
            ),
            10,
        )
    } else {
        (
            FactorAssessment::new(
                RiskLevel::High,
                "High blood pressure significantly increases heart disease risk.",
            ),
            20,
        )
    }
}

fn assess_cholesterol(cholesterol: u32) -> (FactorAssessment, u32) {
    if cholesterol < 200 {
        (
            FactorAssessment::new(
                RiskLevel::Low,
                "Cholesterol levels are within healthy range (<200 mg/dL).",
            ),
            0,
        )
    } else if cholesterol < 240 {
        (
            FactorAssessment::new(
                RiskLevel::Moderate,
                "Cholesterol is borderline high. Dietary changes may help.",
            ),
            10,
        )
    } else {
        (
            FactorAssessment::new(
                RiskLevel::High,
                "High cholesterol substantially increases cardiovascular risk.",
            ),
            20,
        )
    }
}

fn assess_heart_rate(rate: u32) -> (FactorAssessment, u32) {
    // Both out-of-range directions are moderate, with different points
    if (60..=100).contains(&rate) {
        (
            FactorAssessment::new(
                RiskLevel::Low,
                "Resting heart rate is within normal range (60-100 bpm).",
            ),
            0,
        )
    } else if rate > 100 {
        (
            FactorAssessment::new(
                RiskLevel::Moderate,
                "Elevated resting heart rate may indicate cardiovascular stress.",
            ),
            8,
        )
    } else {
        (
            FactorAssessment::new(
                RiskLevel::Moderate,
                "Very low heart rate - consider consulting a healthcare provider.",
            ),
            5,
        )
    }
}

fn assess_lifestyle(profile: &RiskProfile) -> (FactorAssessment, u32) {
    let mut points: u32 = 0;
    // Separate sub-score; sets the factor level but never feeds the
    // main risk score.
    let mut lifestyle_risk: u32 = 0;
    let mut fragments: Vec<&'static str> = Vec::new();

    match profile.smoking {
        SmokingStatus::Current => {
            points += 20;
            lifestyle_risk += 3;
            fragments.push("Current smoking significantly increases risk");
        }
        SmokingStatus::Former => {
            points += 5;
            lifestyle_risk += 1;
            fragments.push("Former smoking has some residual risk");
        }
        SmokingStatus::Never => {
            fragments.push("Non-smoking status is protective");
        }
    }

    match profile.diabetes {
        DiabetesStatus::Type2 => {
            points += 20;
            lifestyle_risk += 3;
            fragments.push("Type 2 diabetes substantially increases risk");
        }
        DiabetesStatus::Prediabetes => {
            points += 10;
            lifestyle_risk += 2;
            fragments.push("Pre-diabetes increases cardiovascular risk");
        }
        DiabetesStatus::No => {
            fragments.push("No diabetes detected");
        }
    }

    match profile.family_history {
        FamilyHistory::Immediate => {
            points += 15;
            lifestyle_risk += 2;
            fragments.push("Strong family history increases genetic risk");
        }
        FamilyHistory::Distant => {
            points += 5;
            lifestyle_risk += 1;
            fragments.push("Some family history noted");
        }
        FamilyHistory::None => {
            fragments.push("No significant family history");
        }
    }

    let level = if lifestyle_risk <= 2 {
        RiskLevel::Low
    } else if lifestyle_risk <= 5 {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    };

    let description = format!("{}.", fragments.join("; "));

    (FactorAssessment { level, description }, points)
}
