// Re-export modules
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod persistence;
pub mod report;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{ExtractLimits, ScrapeConfig};
pub use error::ScrapeError;
pub use report::{HeadingMap, Image, Link, PageMetadata, ScrapeReport, Statistics, Table};

use extractors::PageContext;

/// Builder for a single-page scrape
///
/// Validates the URL, fetches the page, runs the extraction pipeline and
/// hands back the assembled report. One report per invocation; nothing
/// is shared between runs.
pub struct Scrape {
    config: ScrapeConfig,
}

impl Scrape {
    /// Create a new scrape for the given URL with default settings
    pub fn new(url: &str) -> Self {
        Self {
            config: ScrapeConfig::new(url),
        }
    }

    /// Apply a full configuration
    pub fn with_config(mut self, config: ScrapeConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file, keeping the URL this scrape
    /// was created with
    pub fn with_config_file(
        mut self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, ScrapeError> {
        let url = self.config.url.clone();
        let mut config = ScrapeConfig::from_file(path)?;
        config.url = url;
        self.config = config;
        Ok(self)
    }

    /// Override the fetch timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.config.timeout_secs = seconds;
        self
    }

    /// Override the User-Agent header
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.config.user_agent = user_agent.to_string();
        self
    }

    /// Override the extractor output caps
    pub fn with_limits(mut self, limits: ExtractLimits) -> Self {
        self.config.limits = limits;
        self
    }

    /// Fetch the page and run the extraction pipeline
    pub async fn run(self) -> Result<ScrapeReport, ScrapeError> {
        let page = fetchers::http::fetch(&self.config).await?;

        if !(200..300).contains(&page.status_code) {
            ::log::warn!(
                "Non-success status {} from {}, extracting anyway",
                page.status_code,
                page.url
            );
        }

        let ctx = PageContext::from(&page);
        extractors::extract(&page.body, &ctx, &self.config.limits)
    }
}
