use super::{MISSING, percentage};
use crate::models::{CategoryResult, CheckId, CheckResult, CheckStatus};
use crate::page::Page;

const TITLE_RANGE: std::ops::RangeInclusive<usize> = 30..=60;
const META_DESCRIPTION_RANGE: std::ops::RangeInclusive<usize> = 120..=160;

pub struct OnPageAnalyzer;

impl OnPageAnalyzer {
    pub fn analyze(page: &Page) -> CategoryResult {
        CategoryResult::new(vec![
            Self::check_title(page),
            Self::check_meta_description(page),
            Self::check_h1(page),
            Self::check_image_alt(page),
            Self::check_internal_links(page),
        ])
    }

    fn check_title(page: &Page) -> CheckResult {
        let title = page.title_text().unwrap_or_default();
        let title = title.trim();

        if title.is_empty() {
            return CheckResult::new(
                CheckId::TitleTag,
                CheckStatus::Error,
                "Title tag is missing. This is critical for SEO.",
                MISSING,
            );
        }

        let length = title.chars().count();
        let status = if TITLE_RANGE.contains(&length) {
            CheckStatus::Good
        } else {
            CheckStatus::Warning
        };

        CheckResult::new(
            CheckId::TitleTag,
            status,
            format!(
                "Title tag is {} characters. Recommended: {}-{} characters.",
                length,
                TITLE_RANGE.start(),
                TITLE_RANGE.end()
            ),
            title,
        )
    }

    fn check_meta_description(page: &Page) -> CheckResult {
        let description = page.meta_description().unwrap_or_default();

        if description.is_empty() {
            return CheckResult::new(
                CheckId::MetaDescription,
                CheckStatus::Error,
                "Meta description is missing. Add one to improve click-through rates.",
                MISSING,
            );
        }

        let length = description.chars().count();
        let status = if META_DESCRIPTION_RANGE.contains(&length) {
            CheckStatus::Good
        } else {
            CheckStatus::Warning
        };

        CheckResult::new(
            CheckId::MetaDescription,
            status,
            format!(
                "Meta description is {} characters. Recommended: {}-{} characters.",
                length,
                META_DESCRIPTION_RANGE.start(),
                META_DESCRIPTION_RANGE.end()
            ),
            description,
        )
    }

    fn check_h1(page: &Page) -> CheckResult {
        let count = page.h1_count();
        let first_text = page.first_h1_text().unwrap_or_default();
        let first_text = first_text.trim();
        let value = if first_text.is_empty() {
            MISSING
        } else {
            first_text
        };

        let (status, description) = match count {
            0 => (
                CheckStatus::Error,
                "H1 tag is missing. Each page should have exactly one H1 tag.".to_string(),
            ),
            1 => (
                CheckStatus::Good,
                "H1 tag is present and properly structured.".to_string(),
            ),
            n => (
                CheckStatus::Warning,
                format!("Found {} H1 tags. Should have exactly one.", n),
            ),
        };

        CheckResult::new(CheckId::H1Heading, status, description, value)
    }

    fn check_image_alt(page: &Page) -> CheckResult {
        let (with_alt, total) = page.image_alt_counts();
        let alt_percentage = percentage(with_alt, total);

        let status = match alt_percentage {
            100 => CheckStatus::Good,
            80.. => CheckStatus::Warning,
            _ => CheckStatus::Error,
        };

        let description = if total == 0 {
            "No images found on the page.".to_string()
        } else {
            format!(
                "{} of {} images have alt text ({}%). All images should have descriptive alt text.",
                with_alt, total, alt_percentage
            )
        };

        CheckResult::new(
            CheckId::ImageAltText,
            status,
            description,
            format!("{}/{} images", with_alt, total),
        )
    }

    fn check_internal_links(page: &Page) -> CheckResult {
        let hostname = page.hostname();
        let count = page
            .anchor_hrefs()
            .filter(|href| href.starts_with('/') || href.contains(hostname))
            .count();

        let (status, description) = if count > 0 {
            (
                CheckStatus::Good,
                format!(
                    "Found {} internal links. Good internal linking structure.",
                    count
                ),
            )
        } else {
            (
                CheckStatus::Warning,
                "No internal links found. Internal links help distribute page authority."
                    .to_string(),
            )
        };

        CheckResult::new(
            CheckId::InternalLinking,
            status,
            description,
            format!("{} internal links", count),
        )
    }
}
