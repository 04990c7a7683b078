//! Risk assessment demo
//!
//! Scores three contrasting patient profiles and prints their reports.
//!
//! Run with: cargo run --example assessment_demo

use cardio_core::{
    assess, DiabetesStatus, FamilyHistory, RiskProfile, Sex, SmokingStatus,
};

fn main() {
    let profiles = [
        (
            "Healthy 30-year-old",
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
            },
        ),
        (
            "Middle-aged with elevated vitals",
            RiskProfile {
                age: 55,
                sex: Sex::Male,
                systolic_bp: 135,
                diastolic_bp: 85,
                cholesterol: 220,
                resting_heart_rate: 88,
                smoking: SmokingStatus::Former,
                diabetes: DiabetesStatus::Prediabetes,
                family_history: FamilyHistory::Distant,
            },
        ),
        (
            "High-risk senior",
            RiskProfile {
                age: 70,
                sex: Sex::Male,
                systolic_bp: 150,
                diastolic_bp: 95,
                cholesterol: 260,
                resting_heart_rate: 110,
                smoking: SmokingStatus::Current,
                diabetes: DiabetesStatus::Type2,
                family_history: FamilyHistory::Immediate,
            },
        ),
    ];

    for (label, profile) in profiles {
        let report = assess(&profile);

        println!("=== {} ===", label);
        println!(
            "Overall: {} risk ({}%)",
            report.risk_level.as_str(),
            report.risk_percentage
        );
        println!("Lifestyle: {}", report.risk_factors.lifestyle.description);
        println!("Recommendations:");
        for recommendation in &report.recommendations {
            println!("  - {}", recommendation);
        }
        println!("Next steps:");
        for (index, step) in report.next_steps.iter().enumerate() {
            println!("  {}. {}", index + 1, step);
        }
        println!();
    }
}
