use crate::config::ExtractLimits;
use crate::report::Image;
use crate::utils::clean_text;
use scraper::{Html, Selector};
use url::Url;

/// Collects `<img>` elements with a non-empty src, in document order
///
/// Sources are resolved against the page base exactly like link hrefs;
/// a missing alt attribute becomes the empty string, never a missing
/// field.
pub fn extract(doc: &Html, base: &Url, limits: &ExtractLimits) -> Vec<Image> {
    let selector = Selector::parse("img").unwrap();
    let mut images = Vec::new();

    for el in doc.select(&selector) {
        if images.len() >= limits.max_images {
            ::log::debug!("Image cap reached");
            break;
        }

        let Some(src) = el.value().attr("src") else {
            continue;
        };
        if src.trim().is_empty() {
            continue;
        }

        let resolved = match base.join(src) {
            Ok(url) => url,
            Err(e) => {
                ::log::debug!("Skipping unresolvable src '{}': {}", src, e);
                continue;
            }
        };

        images.push(Image {
            src: resolved.into(),
            alt: clean_text(el.value().attr("alt").unwrap_or_default()),
        });
    }

    images
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_from(html: &str) -> Vec<Image> {
        let doc = Html::parse_document(html);
        let base = Url::parse("https://example.com/page").unwrap();
        extract(&doc, &base, &ExtractLimits::default())
    }

    #[test]
    fn test_relative_src_resolved() {
        let images = extract_from(r#"<img src="/logo.png" alt="Logo">"#);
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].src, "https://example.com/logo.png");
        assert_eq!(images[0].alt, "Logo");
    }

    #[test]
    fn test_missing_alt_becomes_empty_string() {
        let images = extract_from(r#"<img src="pic.jpg">"#);
        assert_eq!(images[0].src, "https://example.com/pic.jpg");
        assert_eq!(images[0].alt, "");
    }

    #[test]
    fn test_images_without_src_skipped() {
        let images = extract_from(r#"<img alt="no src"><img src=""><img src="ok.gif">"#);
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].src, "https://example.com/ok.gif");
    }

    #[test]
    fn test_image_cap() {
        let body: String = (0..60).map(|i| format!(r#"<img src="/i{i}.png">"#)).collect();
        let images = extract_from(&body);
        assert_eq!(images.len(), 50);
    }
}
