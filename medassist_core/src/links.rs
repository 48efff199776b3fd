//! Outbound link targets rendered next to assistant answers.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except RFC 3986 unreserved characters and `/` is escaped,
/// matching the usual quoting of free text in a query string.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Like [`QUERY`] but `/` is escaped too, so the text stays one path segment.
const PATH_SEGMENT: &AsciiSet = &QUERY.add(b'/');

/// Percent-encode free text for use in a query string value.
#[must_use]
pub fn encode_query(text: &str) -> String {
    utf8_percent_encode(text, QUERY).to_string()
}

/// Percent-encode free text as a single URL path segment.
#[must_use]
pub fn encode_path_segment(text: &str) -> String {
    utf8_percent_encode(text, PATH_SEGMENT).to_string()
}

/// Link templates for web search and the medicine ordering partner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    search_url: String,
    medicine_url: String,
}

impl Links {
    #[must_use]
    pub fn new(search_url: impl Into<String>, medicine_url: impl Into<String>) -> Self {
        Self {
            search_url: search_url.into(),
            medicine_url: medicine_url.into(),
        }
    }

    /// Web search link for `text`.
    #[must_use]
    pub fn search(&self, text: &str) -> String {
        format!("{}?q={}", self.search_url, encode_query(text))
    }

    /// Web search link for more tips on `topic`.
    #[must_use]
    pub fn tips_search(&self, topic: &str) -> String {
        self.search(&format!("{topic} health tips"))
    }

    #[must_use]
    pub fn medicine(&self) -> &str {
        &self.medicine_url
    }
}
