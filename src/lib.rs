pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod keywords;
pub mod models;
pub mod page;
pub mod recommendations;
pub mod reporter;
pub mod scorer;
pub mod seo_analyzer;

use anyhow::{Result, bail};
use cli::Cli;
use colored::*;
use config::Config;
use error::AnalyzeError;
use fetcher::{FetchOptions, FetchedPage, Fetcher, normalize_url};
use indicatif::{ProgressBar, ProgressStyle};
use models::AnalysisResult;
use reporter::Reporter;
use seo_analyzer::SeoAnalyzer;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("Unsupported output format '{}': expected text or json", other),
        }
    }
}

/// Fetches `input` and analyzes the returned document.
///
/// Either a complete result is produced or an error describing why not.
pub async fn analyze_url(
    input: &str,
    options: &FetchOptions,
) -> std::result::Result<AnalysisResult, AnalyzeError> {
    let url = normalize_url(input)?;
    let fetcher = Fetcher::new(options)?;
    let page = fetcher.fetch(&url).await?;
    analyze_fetched(page).await
}

/// Parses and analyzes a fetched page off the async runtime
pub async fn analyze_fetched(page: FetchedPage) -> std::result::Result<AnalysisResult, AnalyzeError> {
    tokio::task::spawn_blocking(move || SeoAnalyzer::analyze_html(&page.html, &page.final_url))
        .await
        .map_err(|e| AnalyzeError::AnalysisFailed(e.to_string()))
}

fn fetch_spinner(url: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("[{elapsed_precise}] {spinner:.cyan} {msg}")
            .expect("Progress bar template should be valid"),
    );
    pb.set_message(format!("Fetching {}", url));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub async fn run(args: Cli) -> Result<()> {
    let args = match Config::load(&args)? {
        Some(config) => config.merge_with_cli(&args),
        None => args,
    };
    let format = OutputFormat::parse(&args.output)?;

    if format == OutputFormat::Text {
        println!("{}", "SEOLens - SEO Analyzer".bright_cyan().bold());
        println!("{}", "=".repeat(50).bright_blue());
        println!();
        println!("{} {}", "Analyzing:".bright_white().bold(), args.url);
        println!("{} {}s", "Timeout:".bright_white().bold(), args.timeout);
        println!();
    }

    let options = FetchOptions {
        timeout_secs: args.timeout,
        max_redirects: args.max_redirects,
    };

    let spinner = (format == OutputFormat::Text).then(|| fetch_spinner(&args.url));
    let result = analyze_url(&args.url, &options).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let report = result?;

    tracing::debug!(
        domain = %report.domain,
        score = report.overall_score,
        keywords = report.keywords.len(),
        "Analysis finished"
    );

    match format {
        OutputFormat::Json => println!("{}", Reporter::to_json(&report)?),
        OutputFormat::Text => Reporter::print_text_report(&report),
    }

    // Save to file if requested
    if let Some(filename) = args.save {
        Reporter::save_json_report(&report, &filename)?;
    }

    Ok(())
}
