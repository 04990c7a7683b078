//! Report assembly
//!
//! Recommendation and next-step list generation. Both lists are built
//! with fixed append order so a given profile always produces the same
//! report.

use crate::profile::{DiabetesStatus, RiskProfile, SmokingStatus};
use crate::scoring::FactorAssessment;
use crate::RiskLevel;
use serde::{Deserialize, Serialize};

/// Per-category breakdown, in report order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub age: FactorAssessment,
    pub blood_pressure: FactorAssessment,
    pub cholesterol: FactorAssessment,
    pub heart_rate: FactorAssessment,
    pub lifestyle: FactorAssessment,
}

/// Complete assessment report for one profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Overall risk tier
    pub risk_level: RiskLevel,
    /// Overall risk percentage, clamped to 5-95
    pub risk_percentage: u8,
    /// Per-category factor breakdown
    pub risk_factors: RiskFactors,
    /// Personalized recommendations, in fixed append order
    pub recommendations: Vec<String>,
    /// Suggested follow-up actions for the overall tier
    pub next_steps: Vec<String>,
}

/// Build the recommendation list. Each rule appends independently; the
/// rules are not mutually exclusive.
pub(crate) fn build_recommendations(
    profile: &RiskProfile,
    risk_level: RiskLevel,
    factors: &RiskFactors,
) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();

    if factors.blood_pressure.level != RiskLevel::Low {
        recommendations.push("Monitor blood pressure regularly and consider the DASH diet".into());
        recommendations.push("Reduce sodium intake to less than 2,300mg per day".into());
    }

    if factors.cholesterol.level != RiskLevel::Low {
        recommendations.push("Follow a heart-healthy diet low in saturated fats".into());
        recommendations
            .push("Consider omega-3 fatty acids and soluble fiber supplementation".into());
    }

    if profile.smoking == SmokingStatus::Current {
        recommendations
            .push("Quit smoking immediately - this is the single most important change".into());
    }

    if profile.diabetes != DiabetesStatus::No {
        recommendations
            .push("Maintain optimal blood glucose control through diet and medication".into());
    }

    if risk_level == RiskLevel::Low {
        recommendations.push("Maintain current healthy lifestyle patterns".into());
        recommendations.push("Aim for 150 minutes of moderate exercise per week".into());
    } else {
        recommendations.push("Increase physical activity to at least 150 minutes per week".into());
        recommendations.push(
            "Consider Mediterranean-style diet rich in fruits, vegetables, and whole grains".into(),
        );
        recommendations.push("Manage stress through relaxation techniques or counseling".into());
    }

    recommendations.push("Maintain a healthy weight (BMI 18.5-24.9)".into());
    recommendations.push("Get adequate sleep (7-9 hours per night)".into());

    recommendations
}

/// Build the next-step list for the overall tier.
///
/// The low and moderate lists share a two-item base; the high-risk list
/// replaces it with an urgent five-item sequence.
pub(crate) fn build_next_steps(risk_level: RiskLevel) -> Vec<String> {
    let base_steps = [
        "Schedule a comprehensive physical examination with your primary care physician",
        "Discuss this risk assessment with your healthcare provider",
    ];

    let steps: Vec<&str> = match risk_level {
        RiskLevel::Low => base_steps
            .into_iter()
            .chain([
                "Continue annual health screenings and maintain current lifestyle",
                "Monitor blood pressure and cholesterol every 2-3 years",
            ])
            .collect(),
        RiskLevel::Moderate => base_steps
            .into_iter()
            .chain([
                "Consider additional cardiac screening tests (EKG, stress test)",
                "Work with healthcare provider to address modifiable risk factors",
                "Monitor progress with regular follow-up appointments every 3-6 months",
            ])
            .collect(),
        RiskLevel::High => vec![
            "Seek immediate consultation with a cardiologist",
            "Discuss comprehensive cardiac evaluation including advanced testing",
            "Consider medication therapy for risk factor management",
            "Implement aggressive lifestyle modifications with professional support",
            "Schedule regular monitoring appointments every 1-3 months",
        ],
    };

    steps.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{FamilyHistory, Sex};
    use crate::scoring::assess;

    fn optimal() -> RiskProfile {
        RiskProfile {
            age: 30,
            sex: Sex::Female,
            systolic_bp: 110,
            diastolic_bp: 70,
            cholesterol: 180,
            resting_heart_rate: 70,
            smoking: SmokingStatus::Never,
            diabetes: DiabetesStatus::No,
            family_history: FamilyHistory::None,
        }
    }

    #[test]
    fn test_minimal_risk_recommendations_exact_order() {
        let report = assess(&optimal());
        assert_eq!(
            report.recommendations,
            vec![
                "Maintain current healthy lifestyle patterns",
                "Aim for 150 minutes of moderate exercise per week",
                "Maintain a healthy weight (BMI 18.5-24.9)",
                "Get adequate sleep (7-9 hours per night)",
            ]
        );
    }

    #[test]
    fn test_conditional_recommendations_stack_in_order() {
        let report = assess(&RiskProfile {
            systolic_bp: 150,
            diastolic_bp: 95,
            cholesterol: 250,
            smoking: SmokingStatus::Current,
            diabetes: DiabetesStatus::Prediabetes,
            ..optimal()
        });

        let expected_prefix = [
            "Monitor blood pressure regularly and consider the DASH diet",
            "Reduce sodium intake to less than 2,300mg per day",
            "Follow a heart-healthy diet low in saturated fats",
            "Consider omega-3 fatty acids and soluble fiber supplementation",
            "Quit smoking immediately - this is the single most important change",
            "Maintain optimal blood glucose control through diet and medication",
        ];
        assert_eq!(&report.recommendations[..6], &expected_prefix);

        // 20+20+20+10 = 70 raw -> high tier, so the active-lifestyle
        // block replaces the maintenance block
        assert_eq!(report.risk_level, RiskLevel::High);
        assert_eq!(
            &report.recommendations[6..],
            &[
                "Increase physical activity to at least 150 minutes per week",
                "Consider Mediterranean-style diet rich in fruits, vegetables, and whole grains",
                "Manage stress through relaxation techniques or counseling",
                "Maintain a healthy weight (BMI 18.5-24.9)",
                "Get adequate sleep (7-9 hours per night)",
            ]
        );
    }

    #[test]
    fn test_next_steps_share_base_for_low_and_moderate() {
        let low = build_next_steps(RiskLevel::Low);
        let moderate = build_next_steps(RiskLevel::Moderate);

        assert_eq!(low.len(), 4);
        assert_eq!(moderate.len(), 5);
        assert_eq!(low[..2], moderate[..2]);
        assert_eq!(
            low[0],
            "Schedule a comprehensive physical examination with your primary care physician"
        );
    }

    #[test]
    fn test_high_next_steps_do_not_reuse_base() {
        let high = build_next_steps(RiskLevel::High);
        assert_eq!(
            high,
            vec![
                "Seek immediate consultation with a cardiologist",
                "Discuss comprehensive cardiac evaluation including advanced testing",
                "Consider medication therapy for risk factor management",
                "Implement aggressive lifestyle modifications with professional support",
                "Schedule regular monitoring appointments every 1-3 months",
            ]
        );
    }
}
