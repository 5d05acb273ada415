use serde::{Deserialize, Serialize};

/// Outcome of a single check, ordered by desirability (`Good` is greatest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Error,
    Warning,
    Good,
}

impl CheckStatus {
    /// Fraction of a check's weight awarded for this status
    pub fn credit(self) -> f64 {
        match self {
            CheckStatus::Good => 1.0,
            CheckStatus::Warning => 0.5,
            CheckStatus::Error => 0.0,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "good" => Some(CheckStatus::Good),
            "warning" => Some(CheckStatus::Warning),
            "error" => Some(CheckStatus::Error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    OnPage,
    Content,
    Technical,
}

impl Category {
    /// Points a category contributes when every one of its checks is good
    pub fn ceiling(self) -> f64 {
        match self {
            Category::OnPage => 40.0,
            Category::Content => 30.0,
            Category::Technical => 30.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::OnPage => "On-Page SEO",
            Category::Content => "Content",
            Category::Technical => "Technical SEO",
        }
    }
}

/// Stable identity of every check in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    TitleTag,
    MetaDescription,
    H1Heading,
    ImageAltText,
    InternalLinking,
    ContentLength,
    KeywordDensity,
    ContentReadability,
    ContentFreshness,
    Https,
    MobileFriendly,
    CanonicalUrl,
    OpenGraphTags,
    RobotsMeta,
    StructuredData,
}

impl CheckId {
    pub fn title(self) -> &'static str {
        match self {
            CheckId::TitleTag => "Title Tag",
            CheckId::MetaDescription => "Meta Description",
            CheckId::H1Heading => "H1 Heading",
            CheckId::ImageAltText => "Image Alt Text",
            CheckId::InternalLinking => "Internal Linking",
            CheckId::ContentLength => "Content Length",
            CheckId::KeywordDensity => "Keyword Density",
            CheckId::ContentReadability => "Content Readability",
            CheckId::ContentFreshness => "Content Freshness",
            CheckId::Https => "HTTPS/SSL Certificate",
            CheckId::MobileFriendly => "Mobile-Friendly",
            CheckId::CanonicalUrl => "Canonical URL",
            CheckId::OpenGraphTags => "Open Graph Tags",
            CheckId::RobotsMeta => "Robots Meta Tag",
            CheckId::StructuredData => "Structured Data",
        }
    }

    pub fn category(self) -> Category {
        match self {
            CheckId::TitleTag
            | CheckId::MetaDescription
            | CheckId::H1Heading
            | CheckId::ImageAltText
            | CheckId::InternalLinking => Category::OnPage,
            CheckId::ContentLength
            | CheckId::KeywordDensity
            | CheckId::ContentReadability
            | CheckId::ContentFreshness => Category::Content,
            CheckId::Https
            | CheckId::MobileFriendly
            | CheckId::CanonicalUrl
            | CheckId::OpenGraphTags
            | CheckId::RobotsMeta
            | CheckId::StructuredData => Category::Technical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub id: CheckId,
    pub status: CheckStatus,
    pub title: String,
    pub description: String,
    pub value: String,
}

impl CheckResult {
    pub fn new(
        id: CheckId,
        status: CheckStatus,
        description: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id,
            status,
            title: id.title().to_string(),
            description: description.into(),
            value: value.into(),
        }
    }
}

/// Ordered check results of one category, serialized as a plain list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryResult {
    checks: Vec<CheckResult>,
}

impl CategoryResult {
    pub fn new(checks: Vec<CheckResult>) -> Self {
        Self { checks }
    }

    pub fn find(&self, id: CheckId) -> Option<&CheckResult> {
        self.checks.iter().find(|check| check.id == id)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CheckResult> {
        self.checks.iter()
    }
}

impl<'a> IntoIterator for &'a CategoryResult {
    type Item = &'a CheckResult;
    type IntoIter = std::slice::Iter<'a, CheckResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.checks.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub url: String,
    pub domain: String,
    pub timestamp: String,
    pub overall_score: u8,
    pub on_page: CategoryResult,
    pub content: CategoryResult,
    pub technical: CategoryResult,
    pub keywords: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

impl AnalysisResult {
    /// Category results paired with their category, in report order
    pub fn categories(&self) -> [(Category, &CategoryResult); 3] {
        [
            (Category::OnPage, &self.on_page),
            (Category::Content, &self.content),
            (Category::Technical, &self.technical),
        ]
    }
}
