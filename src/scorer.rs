//! Aggregate score calculation.
//!
//! Each category owns a fixed point ceiling (on-page 40, content 30,
//! technical 30) split evenly across its checks, so the 40/30/30 weighting
//! holds however many checks a category runs. A good check earns its full
//! weight, a warning half, an error nothing.

use crate::models::{Category, CategoryResult};

pub struct Scorer;

impl Scorer {
    /// Normalized 0-100 score over every check of the given categories
    pub fn overall_score(categories: &[(Category, &CategoryResult)]) -> u8 {
        let (achieved, max_possible) = categories.iter().fold(
            (0.0, 0.0),
            |(achieved, max_possible), (category, result)| {
                let (points, max) = Self::category_points(*category, result);
                (achieved + points, max_possible + max)
            },
        );

        if max_possible <= 0.0 {
            return 0;
        }

        (achieved / max_possible * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// Returns `(achieved, possible)` points for one category
    pub fn category_points(category: Category, result: &CategoryResult) -> (f64, f64) {
        if result.is_empty() {
            return (0.0, 0.0);
        }

        let weight = category.ceiling() / result.len() as f64;
        let achieved: f64 = result
            .iter()
            .map(|check| weight * check.status.credit())
            .sum();

        (achieved, weight * result.len() as f64)
    }
}
