//! CardioCheck assessment CLI
//!
//! Collects the nine questionnaire inputs as flags, validates them, and
//! prints a tiered risk report.
//!
//! Usage:
//!   cardio-assess --age 52 --sex male --systolic 135 --diastolic 85 \
//!     --cholesterol 210 --heart-rate 72 --smoking former \
//!     --diabetes no --family-history distant [--format json]

use cardio_core::{assess, RiskAssessment};
use cardio_intake::IntakeForm;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cardio-assess")]
#[command(version = "0.1.0")]
#[command(about = "Assess cardiovascular risk from patient vitals", long_about = None)]
struct Cli {
    /// Age in years (1-120)
    #[arg(long)]
    age: String,

    /// Sex: male or female
    #[arg(long)]
    sex: String,

    /// Systolic blood pressure in mmHg (70-250)
    #[arg(long)]
    systolic: String,

    /// Diastolic blood pressure in mmHg (40-150)
    #[arg(long)]
    diastolic: String,

    /// Total cholesterol in mg/dL (100-500)
    #[arg(long)]
    cholesterol: String,

    /// Resting heart rate in bpm (40-200)
    #[arg(long)]
    heart_rate: String,

    /// Smoking status: never, former, or current
    #[arg(long, default_value = "never")]
    smoking: String,

    /// Diabetes status: no, prediabetes, or type2
    #[arg(long, default_value = "no")]
    diabetes: String,

    /// Family history of heart disease: none, distant, or immediate
    #[arg(long, default_value = "none")]
    family_history: String,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let form = IntakeForm {
        age: cli.age,
        sex: cli.sex,
        systolic_bp: cli.systolic,
        diastolic_bp: cli.diastolic,
        cholesterol: cli.cholesterol,
        heart_rate: cli.heart_rate,
        smoking: cli.smoking,
        diabetes: cli.diabetes,
        family_history: cli.family_history,
    };

    let profile = form.validate()?;
    let report = assess(&profile);

    let output_str = match cli.format.as_str() {
        "json" => serde_json::to_string_pretty(&report)?,
        _ => render_text(&report),
    };

    if let Some(output_path) = cli.output {
        fs::write(&output_path, &output_str)?;
        eprintln!("Report written to: {}", output_path.display());
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

fn render_text(report: &RiskAssessment) -> String {
    let mut out = String::new();

    out.push_str("Risk Assessment Complete\n");
    out.push_str(&format!(
        "Overall: {} risk ({}%)\n\n",
        report.risk_level.as_str(),
        report.risk_percentage
    ));
    out.push_str("What this means:\n");
    out.push_str(&format!("  {}\n\n", report.risk_level.description()));

    out.push_str("Risk Factor Analysis\n");
    let factors = [
        ("Age", &report.risk_factors.age),
        ("Blood Pressure", &report.risk_factors.blood_pressure),
        ("Cholesterol", &report.risk_factors.cholesterol),
        ("Heart Rate", &report.risk_factors.heart_rate),
        ("Lifestyle", &report.risk_factors.lifestyle),
    ];
    for (name, factor) in factors {
        out.push_str(&format!(
            "  {} [{}]: {}\n",
            name,
            factor.level.as_str(),
            factor.description
        ));
    }

    out.push_str("\nRecommendations\n");
    for recommendation in &report.recommendations {
        out.push_str(&format!("  - {}\n", recommendation));
    }

    out.push_str("\nNext Steps\n");
    for (index, step) in report.next_steps.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", index + 1, step));
    }

    out
}
