use crate::config::ExtractLimits;
use crate::report::Link;
use crate::utils::clean_text;
use scraper::{Html, Selector};
use url::Url;

/// Resolve the base URL that relative references on the page are joined
/// against
///
/// An explicit `<base href>` element takes precedence over the request
/// URL; the href itself may be relative, in which case it is resolved
/// against the request URL first. Returns None when the request URL is
/// not parseable, in which case link and image extraction degrade to
/// empty sequences.
pub fn resolve_base(doc: &Html, request_url: &str) -> Option<Url> {
    let page_url = match Url::parse(request_url) {
        Ok(url) => url,
        Err(e) => {
            ::log::warn!("Cannot resolve base for '{}': {}", request_url, e);
            return None;
        }
    };

    let selector = Selector::parse("base").unwrap();
    if let Some(el) = doc.select(&selector).next() {
        if let Some(href) = el.value().attr("href") {
            if !href.trim().is_empty() {
                if let Ok(base) = page_url.join(href.trim()) {
                    ::log::debug!("Using <base href> {}", base);
                    return Some(base);
                }
            }
        }
    }

    Some(page_url)
}

/// Collects anchors with a non-empty href, resolved to absolute form and
/// classified as internal or external
///
/// Hrefs that cannot be resolved against the base are skipped rather
/// than failing the pipeline.
pub fn extract(doc: &Html, base: &Url, limits: &ExtractLimits) -> Vec<Link> {
    let selector = Selector::parse("a").unwrap();
    let mut links = Vec::new();

    for el in doc.select(&selector) {
        if links.len() >= limits.max_links {
            ::log::debug!("Link cap reached");
            break;
        }

        let Some(href) = el.value().attr("href") else {
            continue;
        };
        if href.trim().is_empty() {
            continue;
        }

        let resolved = match base.join(href) {
            Ok(url) => url,
            Err(e) => {
                ::log::debug!("Skipping unresolvable href '{}': {}", href, e);
                continue;
            }
        };

        links.push(Link {
            text: clean_text(&el.text().collect::<String>()),
            is_external: is_external(&resolved, base),
            url: resolved.into(),
        });
    }

    links
}

/// Classify a resolved link URL against the page base
///
/// Pure comparison of network authorities: the hosts must match, scheme
/// and port are ignored. Links that carry no authority at all (mailto:,
/// javascript:, tel:) are treated as internal rather than inheriting an
/// external classification from the mismatch.
fn is_external(link: &Url, base: &Url) -> bool {
    match (link.host_str(), base.host_str()) {
        (Some(link_host), Some(base_host)) => !link_host.eq_ignore_ascii_case(base_host),
        (None, _) => false,
        (Some(_), None) => true,
    }
}
