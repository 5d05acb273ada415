use crate::models::{Category, CategoryResult, CheckId, CheckStatus, Priority, Recommendation};

/// Advice emitted when a check is not good
struct Rule {
    check: CheckId,
    priority: Priority,
    title: &'static str,
    /// Fixed text; `None` reuses the check's own description
    description: Option<&'static str>,
}

// Inspection order is the output order.
const RULES: &[Rule] = &[
    Rule {
        check: CheckId::TitleTag,
        priority: Priority::High,
        title: "Optimize Title Tag",
        description: None,
    },
    Rule {
        check: CheckId::MetaDescription,
        priority: Priority::High,
        title: "Add/Optimize Meta Description",
        description: None,
    },
    Rule {
        check: CheckId::Https,
        priority: Priority::High,
        title: "Enable HTTPS",
        description: Some(
            "Install an SSL certificate and redirect HTTP to HTTPS. This is critical for SEO and security.",
        ),
    },
    Rule {
        check: CheckId::ContentLength,
        priority: Priority::Medium,
        title: "Increase Content Length",
        description: None,
    },
    Rule {
        check: CheckId::ImageAltText,
        priority: Priority::Medium,
        title: "Add Image Alt Text",
        description: Some(
            "Ensure all images have descriptive alt text for accessibility and SEO.",
        ),
    },
    Rule {
        check: CheckId::MobileFriendly,
        priority: Priority::High,
        title: "Improve Mobile Responsiveness",
        description: Some(
            "Ensure your website is fully responsive and mobile-friendly. Google uses mobile-first indexing.",
        ),
    },
    Rule {
        check: CheckId::StructuredData,
        priority: Priority::Low,
        title: "Add Structured Data",
        description: Some(
            "Implement Schema.org structured data to help search engines understand your content and enable rich snippets.",
        ),
    },
];

pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn generate(categories: &[(Category, &CategoryResult)]) -> Vec<Recommendation> {
        RULES
            .iter()
            .filter_map(|rule| {
                let check = categories
                    .iter()
                    .find(|(category, _)| *category == rule.check.category())
                    .and_then(|(_, result)| result.find(rule.check))?;

                if check.status == CheckStatus::Good {
                    return None;
                }

                Some(Recommendation {
                    priority: rule.priority,
                    title: rule.title.to_string(),
                    description: rule
                        .description
                        .map_or_else(|| check.description.clone(), str::to_string),
                })
            })
            .collect()
    }
}
