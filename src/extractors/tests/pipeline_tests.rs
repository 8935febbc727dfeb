use crate::config::ExtractLimits;
use crate::error::ScrapeError;
use crate::extractors::{self, PageContext};
use crate::report::ScrapeReport;

fn context(url: &str) -> PageContext {
    PageContext {
        url: url.to_string(),
        status_code: 200,
        content_type: "text/html".to_string(),
        content_length: 0,
    }
}

fn run(html: &str, url: &str) -> ScrapeReport {
    extractors::extract(html, &context(url), &ExtractLimits::default())
        .expect("pipeline should succeed on valid HTML")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PAGE: &str = r#"<html>
        <head>
            <title>Test Page</title>
            <meta name="description" content="A sample page">
        </head>
        <body>
            <h1>Welcome</h1>
            <p>  Hello world  </p>
            <p>   </p>
            <a href="/about">About</a>
            <a href="https://other.org/x">Elsewhere</a>
        </body>
    </html>"#;

    #[test]
    fn test_end_to_end_scenario() {
        let report = run(SAMPLE_PAGE, "https://example.com/page");

        assert_eq!(report.metadata.title, "Test Page");
        assert_eq!(report.statistics.total_headings, 1);
        assert_eq!(report.statistics.total_paragraphs, 1);
        assert_eq!(report.statistics.total_links, 2);
        assert_eq!(report.statistics.total_images, 0);
        assert_eq!(report.statistics.total_tables, 0);
        assert_eq!(report.statistics.external_links, 1);

        assert_eq!(report.paragraphs, vec!["Hello world"]);
        assert_eq!(report.links[0].url, "https://example.com/about");
        assert!(!report.links[0].is_external);
        assert!(report.links[1].is_external);
    }

    #[test]
    fn test_statistics_match_collection_sizes() {
        let html = r#"<html><body>
            <h1>a</h1><h2>b</h2><h2>c</h2><h6>d</h6>
            <p>one</p><p>two</p>
            <a href="/x">x</a>
            <a href="https://a.org/">a</a>
            <a href="https://b.org/">b</a>
            <img src="/i.png">
            <table><tr><td>1</td></tr></table>
        </body></html>"#;
        let report = run(html, "https://example.com/");
        let stats = &report.statistics;

        assert_eq!(stats.total_headings, report.headings.total());
        assert_eq!(stats.total_headings, 4);
        assert_eq!(stats.total_paragraphs, report.paragraphs.len());
        assert_eq!(stats.total_links, report.links.len());
        assert_eq!(stats.total_images, report.images.len());
        assert_eq!(stats.total_tables, report.tables.len());
        assert_eq!(
            stats.external_links,
            report.links.iter().filter(|l| l.is_external).count()
        );
        assert_eq!(stats.external_links, 2);
    }

    #[test]
    fn test_idempotent_except_timestamp() {
        let first = run(SAMPLE_PAGE, "https://example.com/page");
        let second = run(SAMPLE_PAGE, "https://example.com/page");

        let mut a = serde_json::to_value(&first).unwrap();
        let mut b = serde_json::to_value(&second).unwrap();
        a["metadata"]["scrape_timestamp"] = serde_json::Value::Null;
        b["metadata"]["scrape_timestamp"] = serde_json::Value::Null;
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_body_is_parse_failure() {
        let result = extractors::extract(
            "",
            &context("https://example.com/"),
            &ExtractLimits::default(),
        );
        assert!(matches!(result, Err(ScrapeError::ParseFailure(_))));

        let result = extractors::extract(
            "   \n\t  ",
            &context("https://example.com/"),
            &ExtractLimits::default(),
        );
        assert!(matches!(result, Err(ScrapeError::ParseFailure(_))));
    }

    #[test]
    fn test_non_success_status_still_extracts() {
        let ctx = PageContext {
            status_code: 404,
            ..context("https://example.com/missing")
        };
        let report = extractors::extract(
            "<html><head><title>Not Found</title></head><body><p>gone</p></body></html>",
            &ctx,
            &ExtractLimits::default(),
        )
        .unwrap();
        assert_eq!(report.metadata.status_code, 404);
        assert_eq!(report.metadata.title, "Not Found");
        assert_eq!(report.paragraphs, vec!["gone"]);
    }

    #[test]
    fn test_unparseable_request_url_degrades_links_and_images() {
        // Everything else still comes through when no base can be resolved
        let report = extractors::extract(
            r#"<html><body><h1>t</h1><a href="/x">x</a><img src="/i.png"></body></html>"#,
            &context("not a url"),
            &ExtractLimits::default(),
        )
        .unwrap();
        assert!(report.links.is_empty());
        assert!(report.images.is_empty());
        assert_eq!(report.statistics.total_headings, 1);
        assert_eq!(report.statistics.total_links, 0);
    }

    #[test]
    fn test_custom_limits_flow_through() {
        let limits = ExtractLimits {
            max_paragraphs: 2,
            max_links: 1,
            ..ExtractLimits::default()
        };
        let html = r#"<html><body>
            <p>a</p><p>b</p><p>c</p>
            <a href="/1">1</a><a href="/2">2</a>
        </body></html>"#;
        let report =
            extractors::extract(html, &context("https://example.com/"), &limits).unwrap();
        assert_eq!(report.paragraphs, vec!["a", "b"]);
        assert_eq!(report.links.len(), 1);
        assert_eq!(report.statistics.total_paragraphs, 2);
        assert_eq!(report.statistics.total_links, 1);
    }
}
