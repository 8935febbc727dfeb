use crate::config::ExtractLimits;
use crate::utils::clean_text;
use scraper::{Html, Selector};

/// Collects `<p>` text in document order, dropping paragraphs that are
/// empty after whitespace cleanup
pub fn extract(doc: &Html, limits: &ExtractLimits) -> Vec<String> {
    let selector = Selector::parse("p").unwrap();
    let mut paragraphs = Vec::new();

    for el in doc.select(&selector) {
        if paragraphs.len() >= limits.max_paragraphs {
            ::log::debug!("Paragraph cap reached");
            break;
        }
        let text = clean_text(&el.text().collect::<String>());
        if !text.is_empty() {
            paragraphs.push(text);
        }
    }

    paragraphs
}
