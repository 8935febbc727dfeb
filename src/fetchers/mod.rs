pub mod http;

use crate::error::ScrapeError;
use url::Url;

/// Raw outcome of fetching one page
///
/// Non-2xx responses are still returned here rather than surfaced as
/// errors: the pipeline runs over whatever body came back and echoes the
/// status code in the report metadata.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// The URL that was requested
    pub url: String,

    /// HTTP status code of the response
    pub status_code: u16,

    /// Content-Type header value, empty if the server sent none
    pub content_type: String,

    /// Decoded response body
    pub body: String,

    /// Byte length of the raw response body, before decoding
    pub content_length: usize,
}

/// Validate a request URL before any network activity
///
/// Only absolute http/https URLs with a host are accepted; anything else
/// is rejected up front so the fetcher never sees it.
pub fn validate_url(input: &str) -> Result<Url, ScrapeError> {
    let url = Url::parse(input).map_err(|_| ScrapeError::InvalidUrl(input.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ScrapeError::InvalidUrl(input.to_string()));
    }
    if url.host_str().is_none() {
        return Err(ScrapeError::InvalidUrl(input.to_string()));
    }

    Ok(url)
}
