use crate::checks::{ContentAnalyzer, OnPageAnalyzer, TechnicalAnalyzer};
use crate::keywords::KeywordExtractor;
use crate::models::{AnalysisResult, Category};
use crate::page::Page;
use crate::recommendations::RecommendationEngine;
use crate::scorer::Scorer;
use scraper::Html;
use url::Url;

pub struct SeoAnalyzer;

impl SeoAnalyzer {
    /// Runs every check against an already parsed document.
    ///
    /// `url` is the final URL the document was served from, after redirects.
    /// Analysis is deterministic apart from the timestamp.
    pub fn analyze(document: &Html, url: &Url) -> AnalysisResult {
        let page = Page::new(document, url);

        let on_page = OnPageAnalyzer::analyze(&page);
        let content = ContentAnalyzer::analyze(&page);
        let technical = TechnicalAnalyzer::analyze(&page);

        let categories = [
            (Category::OnPage, &on_page),
            (Category::Content, &content),
            (Category::Technical, &technical),
        ];
        let overall_score = Scorer::overall_score(&categories);
        let recommendations = RecommendationEngine::generate(&categories);
        let keywords = KeywordExtractor::extract(&page);

        tracing::debug!(
            url = %url,
            score = overall_score,
            recommendations = recommendations.len(),
            "SEO analysis complete"
        );

        AnalysisResult {
            url: url.to_string(),
            domain: page.hostname().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            overall_score,
            on_page,
            content,
            technical,
            keywords,
            recommendations,
        }
    }

    /// Parses raw HTML and analyzes it
    pub fn analyze_html(html: &str, url: &Url) -> AnalysisResult {
        let document = Html::parse_document(html);
        Self::analyze(&document, url)
    }
}
