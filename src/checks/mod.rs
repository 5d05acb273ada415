//! Rule-based SEO checks, grouped by category.
//!
//! Each analyzer runs its checks in a fixed order and never fails: a missing
//! element maps to a `warning` or `error` result rather than an error value.

pub mod content;
pub mod on_page;
pub mod technical;

pub use content::ContentAnalyzer;
pub use on_page::OnPageAnalyzer;
pub use technical::TechnicalAnalyzer;

/// Placeholder value for checks whose subject is absent from the page
pub(crate) const MISSING: &str = "Missing";

/// Percentage rounded half away from zero, or 100 when `total` is 0
pub(crate) fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}
