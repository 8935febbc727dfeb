use thiserror::Error;

/// Failures that abort a scrape request
///
/// Extractor-level anomalies never appear here. A malformed sub-structure
/// inside the page degrades that one field to its empty value and the
/// pipeline carries on; only request-level problems surface as errors.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The input URL is malformed or not http(s); detected before any fetch
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The fetch failed at the transport level (DNS, connect, TLS)
    #[error("failed to fetch URL: {0}")]
    Transport(#[source] reqwest::Error),

    /// The fetch did not complete within the configured timeout
    #[error("fetch timed out after {0} seconds")]
    Timeout(u64),

    /// The response body could not be read
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The response carried no parseable HTML
    #[error("response from {0} contained no parseable HTML")]
    ParseFailure(String),

    /// Writing the report to disk failed
    #[error("failed to persist report: {0}")]
    Io(#[from] std::io::Error),

    /// The report could not be serialized
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The configuration file could not be read or parsed
    #[error("failed to load config: {0}")]
    Config(#[source] Box<dyn std::error::Error + Send + Sync>),
}
