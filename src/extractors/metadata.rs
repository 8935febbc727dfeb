use crate::extractors::PageContext;
use crate::report::PageMetadata;
use crate::utils::clean_text;
use chrono::{DateTime, Utc};
use scraper::{Html, Selector};

/// Extracts page metadata and echoes the fetch response details
///
/// Missing elements never fail the pipeline; title, description and
/// keywords all degrade to the empty string when absent.
pub fn extract(doc: &Html, ctx: &PageContext, scraped_at: DateTime<Utc>) -> PageMetadata {
    let title_selector = Selector::parse("title").unwrap();
    let title = doc
        .select(&title_selector)
        .next()
        .map(|el| clean_text(&el.text().collect::<String>()))
        .unwrap_or_default();

    PageMetadata {
        title,
        url: ctx.url.clone(),
        description: meta_content(doc, "description"),
        keywords: meta_content(doc, "keywords"),
        scrape_timestamp: scraped_at.to_rfc3339(),
        status_code: ctx.status_code,
        content_type: ctx.content_type.clone(),
        content_length: ctx.content_length,
    }
}

/// Content of the first meta tag with the given name, matched
/// case-insensitively; empty string if there is none
fn meta_content(doc: &Html, name: &str) -> String {
    let selector = Selector::parse("meta[name]").unwrap();
    doc.select(&selector)
        .find(|el| {
            el.value()
                .attr("name")
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
        })
        .and_then(|el| el.value().attr("content"))
        .map(clean_text)
        .unwrap_or_default()
}
