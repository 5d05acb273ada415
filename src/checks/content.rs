use crate::models::{CategoryResult, CheckId, CheckResult, CheckStatus};
use crate::page::Page;

const GOOD_WORD_COUNT: usize = 300;
const MIN_WORD_COUNT: usize = 200;

pub struct ContentAnalyzer;

impl ContentAnalyzer {
    pub fn analyze(page: &Page) -> CategoryResult {
        CategoryResult::new(vec![
            Self::check_length(page),
            Self::check_keyword_density(),
            Self::check_readability(page),
            Self::check_freshness(page),
        ])
    }

    pub fn word_count(text: &str) -> usize {
        text.split_whitespace().count()
    }

    fn check_length(page: &Page) -> CheckResult {
        let words = Self::word_count(&page.visible_body_text());

        let status = if words >= GOOD_WORD_COUNT {
            CheckStatus::Good
        } else if words >= MIN_WORD_COUNT {
            CheckStatus::Warning
        } else {
            CheckStatus::Error
        };

        let description = if words >= GOOD_WORD_COUNT {
            format!("Content has {} words. Good length for SEO.", words)
        } else {
            format!(
                "Content has only {} words. Recommended: at least {} words for better SEO.",
                words, GOOD_WORD_COUNT
            )
        };

        CheckResult::new(
            CheckId::ContentLength,
            status,
            description,
            format!("{} words", words),
        )
    }

    // Density needs a target keyword, which is never supplied.
    fn check_keyword_density() -> CheckResult {
        CheckResult::new(
            CheckId::KeywordDensity,
            CheckStatus::Warning,
            "Target keyword should appear 1-2% of the time naturally. Provide a target keyword for specific analysis.",
            "Analysis needed",
        )
    }

    fn check_readability(page: &Page) -> CheckResult {
        let paragraphs = page.paragraph_count();
        let headings = page.heading_count();
        let structured = paragraphs > 0 && headings > 0;

        let (status, description) = if structured {
            (
                CheckStatus::Good,
                format!(
                    "Content is well-structured with {} paragraphs and {} headings.",
                    paragraphs, headings
                ),
            )
        } else {
            (
                CheckStatus::Warning,
                "Content structure could be improved with more paragraphs and headings."
                    .to_string(),
            )
        };

        CheckResult::new(
            CheckId::ContentReadability,
            status,
            description,
            format!("{} paragraphs, {} headings", paragraphs, headings),
        )
    }

    fn check_freshness(page: &Page) -> CheckResult {
        if page.has_date_marker() {
            CheckResult::new(
                CheckId::ContentFreshness,
                CheckStatus::Good,
                "Content includes date information. Regular updates improve SEO.",
                "Date found",
            )
        } else {
            CheckResult::new(
                CheckId::ContentFreshness,
                CheckStatus::Warning,
                "Consider adding publication/update dates. Fresh content ranks better.",
                "No date found",
            )
        }
    }
}
