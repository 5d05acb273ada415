use thiserror::Error;

/// Failures surfaced to the user when an analysis cannot be produced.
///
/// Transport errors are classified into these kinds at the fetch boundary;
/// the analysis core itself never returns an error.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Request timeout. The website took too long to respond.")]
    FetchTimeout,

    /// Host name could not be resolved
    #[error("Website not found. Please check the URL.")]
    FetchNotFound,

    #[error("Unable to connect to the website. It may be down or blocking requests.")]
    FetchRefused,

    #[error("Failed to fetch website: {0}")]
    FetchFailed(String),

    #[error("Failed to analyze website: {0}")]
    AnalysisFailed(String),
}

impl AnalyzeError {
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::InvalidUrl(reason.into())
    }

    /// Whether the failure happened while talking to the remote site
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::FetchTimeout | Self::FetchNotFound | Self::FetchRefused | Self::FetchFailed(_)
        )
    }
}
