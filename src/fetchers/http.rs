use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::fetchers::{FetchedPage, validate_url};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE};
use std::time::Duration;

/// Fetch a single page over HTTP
///
/// The one network call of a scrape request. Transport failures and
/// timeouts abort the request; non-2xx statuses do not, since the
/// pipeline still extracts whatever body came back.
pub async fn fetch(config: &ScrapeConfig) -> Result<FetchedPage, ScrapeError> {
    let url = validate_url(&config.url)?;

    ::log::info!("Fetching: {}", url);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(ScrapeError::Transport)?;

    let response = client
        .get(url.clone())
        .header(
            ACCEPT,
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        )
        .header(ACCEPT_LANGUAGE, "en-US,en;q=0.5")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ScrapeError::Timeout(config.timeout_secs)
            } else {
                ScrapeError::Transport(e)
            }
        })?;

    let status_code = response.status().as_u16();

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let bytes = response.bytes().await.map_err(|e| {
        if e.is_timeout() {
            ScrapeError::Timeout(config.timeout_secs)
        } else {
            ScrapeError::Body(e)
        }
    })?;

    let content_length = bytes.len();
    let body = String::from_utf8_lossy(&bytes).into_owned();

    ::log::debug!(
        "Fetched {} - status {}, {} bytes, content-type '{}'",
        url,
        status_code,
        content_length,
        content_type
    );

    Ok(FetchedPage {
        url: config.url.clone(),
        status_code,
        content_type,
        body,
        content_length,
    })
}
