use crate::models::{AnalysisResult, CheckStatus, Priority};
use anyhow::{Context, Result};
use colored::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const GOOD_ICON: &str = "✅";
pub const WARNING_ICON: &str = "⚠️";
pub const ERROR_ICON: &str = "❌";
pub const INFO_ICON: &str = "ℹ️";

pub fn status_icon(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Good => GOOD_ICON,
        CheckStatus::Warning => WARNING_ICON,
        CheckStatus::Error => ERROR_ICON,
    }
}

/// Icon for a serialized status label; unknown labels get the info icon
pub fn status_icon_for_label(label: &str) -> &'static str {
    CheckStatus::from_label(label).map_or(INFO_ICON, status_icon)
}

/// Textual band for an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => ScoreBand::Excellent,
            70..=89 => ScoreBand::Good,
            50..=69 => ScoreBand::Fair,
            _ => ScoreBand::NeedsImprovement,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent! Your SEO is well optimized.",
            ScoreBand::Good => "Good! Some improvements can be made.",
            ScoreBand::Fair => "Fair. Several areas need optimization.",
            ScoreBand::NeedsImprovement => "Needs significant improvement.",
        }
    }
}

pub struct Reporter;

impl Reporter {
    pub fn print_text_report(report: &AnalysisResult) {
        println!("\n{}", "=".repeat(80).bright_blue());
        println!("{}", "SEOLens - Analysis Report".bright_cyan().bold());
        println!("{}", "=".repeat(80).bright_blue());
        println!();

        println!("{}: {}", "URL".bright_white().bold(), report.url);
        println!("{}: {}", "Domain".bright_white().bold(), report.domain);
        println!(
            "{}: {}",
            "Timestamp".bright_white().bold(),
            report.timestamp
        );
        println!();

        let band = ScoreBand::from_score(report.overall_score);
        println!(
            "{}: {} {}",
            "Overall Score".bright_white().bold(),
            Self::colorize_score(report.overall_score),
            band.description()
        );

        for (category, result) in report.categories() {
            println!();
            println!("{}", category.label().bright_yellow().bold().underline());
            for check in result {
                println!(
                    "  {} {} {}",
                    status_icon(check.status),
                    check.title.bright_white().bold(),
                    format!("({})", check.value).dimmed()
                );
                println!("      {}", check.description);
            }
        }

        if !report.keywords.is_empty() {
            println!();
            println!("{}", "Keywords".bright_yellow().bold().underline());
            println!("  {}", report.keywords.join(", ").bright_cyan());
        }

        if !report.recommendations.is_empty() {
            println!();
            println!("{}", "Recommendations".bright_yellow().bold().underline());
            for recommendation in &report.recommendations {
                let priority = match recommendation.priority {
                    Priority::High => "HIGH  ".bright_red(),
                    Priority::Medium => "MEDIUM".yellow(),
                    Priority::Low => "LOW   ".bright_cyan(),
                };
                println!(
                    "  [{}] {}",
                    priority,
                    recommendation.title.bright_white().bold()
                );
                println!("           {}", recommendation.description);
            }
        }

        println!();
        println!("{}", "=".repeat(80).bright_blue());
    }

    fn colorize_score(score: u8) -> ColoredString {
        let text = format!("{}/100", score);
        match ScoreBand::from_score(score) {
            ScoreBand::Excellent | ScoreBand::Good => text.bright_green().bold(),
            ScoreBand::Fair => text.yellow().bold(),
            ScoreBand::NeedsImprovement => text.bright_red().bold(),
        }
    }

    pub fn to_json(report: &AnalysisResult) -> Result<String> {
        serde_json::to_string_pretty(report).context("Failed to serialize report")
    }

    pub fn save_json_report(report: &AnalysisResult, filename: impl AsRef<Path>) -> Result<()> {
        let filename = filename.as_ref();
        let json = Self::to_json(report)?;
        let mut file = File::create(filename)
            .with_context(|| format!("Failed to create report file: {}", filename.display()))?;
        file.write_all(json.as_bytes())?;
        eprintln!(
            "Report saved to: {}",
            filename.display().to_string().bright_green()
        );
        Ok(())
    }
}
