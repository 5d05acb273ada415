use crate::error::AnalyzeError;
use crate::http_client::build_http_client;
use std::error::Error as StdError;
use std::io;
use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Configuration for fetching the page under analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub timeout_secs: u64,
    pub max_redirects: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after following redirects
    pub final_url: Url,
    pub status_code: u16,
    pub content_type: Option<String>,
    pub html: String,
}

/// Turns user input into an absolute http(s) URL, defaulting to https
pub fn normalize_url(input: &str) -> Result<Url, AnalyzeError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AnalyzeError::invalid_url("URL is required"));
    }

    let candidate = if input.contains("://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    };

    let url = Url::parse(&candidate).map_err(|_| AnalyzeError::invalid_url("Invalid URL format"))?;

    // Validate URL scheme - only allow http and https
    match url.scheme() {
        "http" | "https" => {}
        _ => {
            return Err(AnalyzeError::invalid_url(
                "Only HTTP and HTTPS URLs are allowed",
            ));
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(AnalyzeError::invalid_url("Invalid URL format"));
    }

    Ok(url)
}

pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(options: &FetchOptions) -> Result<Self, AnalyzeError> {
        let client = build_http_client(options.timeout_secs, options.max_redirects)
            .map_err(|e| AnalyzeError::FetchFailed(e.to_string()))?;
        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &Url) -> Result<FetchedPage, AnalyzeError> {
        tracing::info!(url = %url, "Fetching page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status();
        let final_url = response.url().clone();

        if &final_url != url {
            tracing::debug!(from = %url, to = %final_url, "Followed redirect");
        }

        if !status.is_success() {
            return Err(AnalyzeError::FetchFailed(format!(
                "Request failed with status code {}",
                status.as_u16()
            )));
        }

        // Extract content type from response headers
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        // Validate content type before attempting to parse as HTML
        if let Some(ref ct) = content_type {
            let ct_lower = ct.to_lowercase();
            if !ct_lower.contains("text/html") && !ct_lower.contains("application/xhtml") {
                tracing::warn!(
                    url = %final_url,
                    content_type = %ct,
                    "Non-HTML content type detected, analysis may be meaningless"
                );
            }
        }

        let html = response.text().await.map_err(classify_error)?;

        Ok(FetchedPage {
            final_url,
            status_code: status.as_u16(),
            content_type,
            html,
        })
    }
}

/// Maps a transport error onto the user-facing failure kinds
pub fn classify_error(error: reqwest::Error) -> AnalyzeError {
    if error.is_timeout() {
        return AnalyzeError::FetchTimeout;
    }

    let refused = error_chain(&error).any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::ConnectionRefused)
    });
    if refused {
        return AnalyzeError::FetchRefused;
    }

    if error.is_connect() && error_chain(&error).any(is_dns_failure) {
        return AnalyzeError::FetchNotFound;
    }

    let message = error_chain(&error)
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join(": ");
    AnalyzeError::FetchFailed(message)
}

fn error_chain<'a>(
    error: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(error), |&cause| cause.source())
}

// hyper-util wraps resolver failures as "dns error"; the std resolver reports
// "failed to lookup address" with the getaddrinfo text (glibc "name or service
// not known", Windows/Go-style "no such host") in the source chain.
fn is_dns_failure(cause: &(dyn StdError + 'static)) -> bool {
    let message = cause.to_string().to_lowercase();
    message.contains("dns error")
        || message.contains("failed to lookup address")
        || message.contains("name or service not known")
        || message.contains("no such host")
}
