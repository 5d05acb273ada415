use super::MISSING;
use crate::models::{CategoryResult, CheckId, CheckResult, CheckStatus};
use crate::page::Page;

pub struct TechnicalAnalyzer;

impl TechnicalAnalyzer {
    pub fn analyze(page: &Page) -> CategoryResult {
        CategoryResult::new(vec![
            Self::check_https(page),
            Self::check_mobile_friendly(page),
            Self::check_canonical(page),
            Self::check_open_graph(page),
            Self::check_robots(page),
            Self::check_structured_data(page),
        ])
    }

    fn check_https(page: &Page) -> CheckResult {
        if page.url().scheme() == "https" {
            CheckResult::new(
                CheckId::Https,
                CheckStatus::Good,
                "Website uses secure HTTPS connection. Essential for SEO and security.",
                "Secure",
            )
        } else {
            CheckResult::new(
                CheckId::Https,
                CheckStatus::Error,
                "Website should use HTTPS. Google favors secure websites.",
                "Not secure",
            )
        }
    }

    fn check_mobile_friendly(page: &Page) -> CheckResult {
        if page.viewport().is_some_and(|content| !content.is_empty()) {
            CheckResult::new(
                CheckId::MobileFriendly,
                CheckStatus::Good,
                "Viewport meta tag is present. Website is likely mobile-responsive.",
                "Responsive",
            )
        } else {
            CheckResult::new(
                CheckId::MobileFriendly,
                CheckStatus::Warning,
                "Viewport meta tag is missing. Ensure website is mobile-friendly.",
                "Check needed",
            )
        }
    }

    fn check_canonical(page: &Page) -> CheckResult {
        if page.canonical_href().is_some_and(|href| !href.is_empty()) {
            CheckResult::new(
                CheckId::CanonicalUrl,
                CheckStatus::Good,
                "Canonical URL is set. Helps prevent duplicate content issues.",
                "Present",
            )
        } else {
            CheckResult::new(
                CheckId::CanonicalUrl,
                CheckStatus::Warning,
                "Consider adding a canonical URL tag to avoid duplicate content.",
                MISSING,
            )
        }
    }

    fn check_open_graph(page: &Page) -> CheckResult {
        match page.open_graph_count() {
            0 => CheckResult::new(
                CheckId::OpenGraphTags,
                CheckStatus::Warning,
                "Open Graph tags are missing. Add them for better social media previews.",
                MISSING,
            ),
            count => CheckResult::new(
                CheckId::OpenGraphTags,
                CheckStatus::Good,
                format!(
                    "Found {} Open Graph tags. Good for social media sharing.",
                    count
                ),
                format!("{} tags", count),
            ),
        }
    }

    fn check_robots(page: &Page) -> CheckResult {
        match page.robots().filter(|content| !content.is_empty()) {
            Some(content) if content.contains("noindex") => CheckResult::new(
                CheckId::RobotsMeta,
                CheckStatus::Warning,
                "Robots meta tag contains \"noindex\". This prevents search engines from indexing the page.",
                content,
            ),
            Some(content) => CheckResult::new(
                CheckId::RobotsMeta,
                CheckStatus::Good,
                "Robots meta tag is properly configured.",
                content,
            ),
            None => CheckResult::new(
                CheckId::RobotsMeta,
                CheckStatus::Good,
                "Robots meta tag is not set. Search engines will index the page by default.",
                "Not set",
            ),
        }
    }

    fn check_structured_data(page: &Page) -> CheckResult {
        match page.json_ld_count() {
            0 => CheckResult::new(
                CheckId::StructuredData,
                CheckStatus::Warning,
                "Consider adding structured data (Schema.org) for rich snippets.",
                MISSING,
            ),
            count => CheckResult::new(
                CheckId::StructuredData,
                CheckStatus::Good,
                format!(
                    "Found {} structured data blocks. Helps search engines understand content.",
                    count
                ),
                format!("{} blocks", count),
            ),
        }
    }
}
