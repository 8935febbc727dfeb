use crate::config::ExtractLimits;
use crate::report::HeadingMap;
use crate::utils::clean_text;
use scraper::{Html, Selector};

/// Collects h1 through h6 text into per-level buckets, in document order
///
/// Headings with no text still contribute an (empty) entry; unlike
/// paragraphs they are not filtered, since consumers count on heading
/// positions lining up with the page outline. Each level is capped
/// independently, so a runaway level does not starve the others.
pub fn extract(doc: &Html, limits: &ExtractLimits) -> HeadingMap {
    let mut map = HeadingMap::default();

    for level in 1..=6u8 {
        let selector = Selector::parse(&format!("h{level}")).unwrap();
        if let Some(bucket) = map.level_mut(level) {
            for el in doc.select(&selector) {
                if bucket.len() >= limits.max_headings_per_level {
                    ::log::debug!("Heading cap reached for h{}", level);
                    break;
                }
                bucket.push(clean_text(&el.text().collect::<String>()));
            }
        }
    }

    map
}
