use crate::error::ScrapeError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Upper bounds on how much each extractor collects from one page
///
/// These are policy values that bound output size on pathological pages,
/// not structural requirements. Each extractor stops collecting once its
/// cap is reached and the rest of the pipeline carries on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractLimits {
    /// Maximum headings kept per level (h1 through h6 each)
    #[serde(default = "default_max_headings_per_level")]
    pub max_headings_per_level: usize,

    /// Maximum paragraphs kept
    #[serde(default = "default_max_paragraphs")]
    pub max_paragraphs: usize,

    /// Maximum links kept
    #[serde(default = "default_max_links")]
    pub max_links: usize,

    /// Maximum images kept
    #[serde(default = "default_max_images")]
    pub max_images: usize,

    /// Maximum tables processed
    #[serde(default = "default_max_tables")]
    pub max_tables: usize,

    /// Maximum data rows kept per table
    #[serde(default = "default_max_rows_per_table")]
    pub max_rows_per_table: usize,
}

impl Default for ExtractLimits {
    fn default() -> Self {
        Self {
            max_headings_per_level: default_max_headings_per_level(),
            max_paragraphs: default_max_paragraphs(),
            max_links: default_max_links(),
            max_images: default_max_images(),
            max_tables: default_max_tables(),
            max_rows_per_table: default_max_rows_per_table(),
        }
    }
}

/// Configuration for one scrape request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// URL of the page to scrape
    pub url: String,

    /// Fetch timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with the fetch
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Extractor output caps
    #[serde(default)]
    pub limits: ExtractLimits,
}

impl ScrapeConfig {
    /// Create a new configuration with default values
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            limits: ExtractLimits::default(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        let mut file = File::open(path).map_err(|e| ScrapeError::Config(Box::new(e)))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ScrapeError::Config(Box::new(e)))?;

        let config: Self =
            serde_json::from_str(&contents).map_err(|e| ScrapeError::Config(Box::new(e)))?;
        Ok(config)
    }
}

/// Default headings kept per level
fn default_max_headings_per_level() -> usize {
    50
}

/// Default paragraph cap
fn default_max_paragraphs() -> usize {
    100
}

/// Default link cap
fn default_max_links() -> usize {
    100
}

/// Default image cap
fn default_max_images() -> usize {
    50
}

/// Default table cap
fn default_max_tables() -> usize {
    20
}

/// Default rows kept per table
fn default_max_rows_per_table() -> usize {
    50
}

/// Default fetch timeout in seconds
fn default_timeout_secs() -> u64 {
    15
}

/// Default User-Agent, imitating a desktop browser so sites serve real markup
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
        .to_string()
}
