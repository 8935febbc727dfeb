use serde::{Deserialize, Serialize};

/// Complete structured output of one scrape run
///
/// Built fresh per request by the extraction pipeline and never mutated
/// afterwards. Field order matches the JSON document shape consumed by
/// downstream tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeReport {
    /// Page and response metadata
    pub metadata: PageMetadata,

    /// Derived counts, computed after all other fields are populated
    pub statistics: Statistics,

    /// Heading text bucketed by level (h1 through h6)
    pub headings: HeadingMap,

    /// Paragraph text in document order, empty paragraphs excluded
    pub paragraphs: Vec<String>,

    /// Anchors in document order, resolved and classified
    pub links: Vec<Link>,

    /// Images in document order, sources resolved
    pub images: Vec<Image>,

    /// Tables in document order
    pub tables: Vec<Table>,
}

/// Metadata about the page and the fetch that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Text of the first <title> element, empty if absent
    pub title: String,

    /// The originally requested URL, echoed back
    pub url: String,

    /// Content of the first meta description tag, empty if absent
    pub description: String,

    /// Content of the first meta keywords tag, empty if absent
    pub keywords: String,

    /// ISO-8601 instant taken at pipeline start
    pub scrape_timestamp: String,

    /// HTTP status code from the fetch response
    pub status_code: u16,

    /// Content-Type header of the response, may be empty
    pub content_type: String,

    /// Byte length of the raw response body
    pub content_length: usize,
}

/// Headings bucketed by level
///
/// A struct rather than a map so the serialized document always carries
/// exactly six keys, with empty arrays for levels that never occur.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeadingMap {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
    pub h4: Vec<String>,
    pub h5: Vec<String>,
    pub h6: Vec<String>,
}

impl HeadingMap {
    /// Borrow the bucket for a heading level (1-based)
    pub fn level_mut(&mut self, level: u8) -> Option<&mut Vec<String>> {
        match level {
            1 => Some(&mut self.h1),
            2 => Some(&mut self.h2),
            3 => Some(&mut self.h3),
            4 => Some(&mut self.h4),
            5 => Some(&mut self.h5),
            6 => Some(&mut self.h6),
            _ => None,
        }
    }

    /// Total headings across all six levels
    pub fn total(&self) -> usize {
        self.h1.len()
            + self.h2.len()
            + self.h3.len()
            + self.h4.len()
            + self.h5.len()
            + self.h6.len()
    }
}

/// A resolved and classified anchor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    /// Visible anchor text, trimmed (may be empty)
    pub text: String,

    /// Absolute URL after resolution against the page base
    pub url: String,

    /// Whether the link points at a different authority than the page
    pub is_external: bool,
}

/// An image reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// Absolute source URL after resolution against the page base
    pub src: String,

    /// Alt text, empty string if the attribute is absent
    pub alt: String,
}

/// A table split into a header row and data rows
///
/// Rows are not required to be rectangular; widths are reported as found.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// Header cell text, empty if no header row was identifiable
    pub headers: Vec<String>,

    /// Data rows, each an ordered sequence of cell text
    pub rows: Vec<Vec<String>>,
}

/// Aggregate counts over the extracted collections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    pub total_headings: usize,
    pub total_paragraphs: usize,
    pub total_links: usize,
    pub total_images: usize,
    pub total_tables: usize,
    pub external_links: usize,
}

impl Statistics {
    /// Compute the aggregate counts from fully populated collections
    ///
    /// Must run after every extractor has finished, since it reads their
    /// final cardinalities.
    pub fn tally(
        headings: &HeadingMap,
        paragraphs: &[String],
        links: &[Link],
        images: &[Image],
        tables: &[Table],
    ) -> Self {
        Self {
            total_headings: headings.total(),
            total_paragraphs: paragraphs.len(),
            total_links: links.len(),
            total_images: images.len(),
            total_tables: tables.len(),
            external_links: links.iter().filter(|l| l.is_external).count(),
        }
    }
}
