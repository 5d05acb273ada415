use anyhow::Result;
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;

/// Common HTTP headers used for all requests
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Creates a reqwest client with standard browser-like headers and configuration
pub fn build_http_client(timeout_secs: u64, max_redirects: usize) -> Result<Client> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, header::HeaderValue::from_static(ACCEPT));
    headers.insert(
        header::ACCEPT_LANGUAGE,
        header::HeaderValue::from_static(ACCEPT_LANGUAGE),
    );

    let client = ClientBuilder::new()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(Duration::from_secs(timeout_secs))
        .redirect(reqwest::redirect::Policy::limited(max_redirects))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()?;

    Ok(client)
}
