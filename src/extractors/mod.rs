pub mod headings;
pub mod images;
pub mod links;
pub mod metadata;
pub mod paragraphs;
pub mod tables;

#[cfg(test)]
mod tests;

use crate::config::ExtractLimits;
use crate::error::ScrapeError;
use crate::fetchers::FetchedPage;
use crate::report::{ScrapeReport, Statistics};
use chrono::Utc;
use scraper::Html;

/// Fetch metadata accompanying the raw HTML into the pipeline
#[derive(Debug, Clone)]
pub struct PageContext {
    /// The originally requested URL
    pub url: String,

    /// HTTP status code of the fetch response
    pub status_code: u16,

    /// Content-Type header of the response, may be empty
    pub content_type: String,

    /// Byte length of the raw response body
    pub content_length: usize,
}

impl From<&FetchedPage> for PageContext {
    fn from(page: &FetchedPage) -> Self {
        Self {
            url: page.url.clone(),
            status_code: page.status_code,
            content_type: page.content_type.clone(),
            content_length: page.content_length,
        }
    }
}

/// Run the full extraction pipeline over one page
///
/// Parses the HTML once and sequences the extractors over the read-only
/// tree, assembling the report. The extractors are independent of each
/// other; only the statistics step depends on their combined output and
/// therefore runs last.
///
/// Individual extractors degrade to empty fields on malformed
/// sub-structure. The only whole-request failure here is a body with
/// nothing to parse.
pub fn extract(
    html: &str,
    ctx: &PageContext,
    limits: &ExtractLimits,
) -> Result<ScrapeReport, ScrapeError> {
    if html.trim().is_empty() {
        return Err(ScrapeError::ParseFailure(ctx.url.clone()));
    }

    let scraped_at = Utc::now();
    let doc = Html::parse_document(html);

    // Base URL for resolving relative references; honors <base href>
    let base = links::resolve_base(&doc, &ctx.url);

    let metadata = metadata::extract(&doc, ctx, scraped_at);
    let headings = headings::extract(&doc, limits);
    let paragraphs = paragraphs::extract(&doc, limits);
    let links = match &base {
        Some(base) => links::extract(&doc, base, limits),
        None => Vec::new(),
    };
    let images = match &base {
        Some(base) => images::extract(&doc, base, limits),
        None => Vec::new(),
    };
    let tables = tables::extract(&doc, limits);

    let statistics = Statistics::tally(&headings, &paragraphs, &links, &images, &tables);

    ::log::info!(
        "Extracted from {}: {} headings, {} paragraphs, {} links ({} external), {} images, {} tables",
        ctx.url,
        statistics.total_headings,
        statistics.total_paragraphs,
        statistics.total_links,
        statistics.external_links,
        statistics.total_images,
        statistics.total_tables
    );

    Ok(ScrapeReport {
        metadata,
        statistics,
        headings,
        paragraphs,
        links,
        images,
        tables,
    })
}
