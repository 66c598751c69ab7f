// src/extractor/mod.rs
// =============================================================================
// This module turns a fetched page into a flat list of link records.
//
// Submodules:
// - html: Pulls links out of <a href> tags with the scraper crate
// - json: Reads the {"links": [...]} schema with serde
//
// The content-type decision happens exactly once, right here, by matching
// on the ContentKind tag the fetcher already assigned. The two extraction
// strategies never need to look at content-type strings themselves.
//
// Rust concepts:
// - Enums with data: LinkRecord carries different fields per source
// - Pattern matching: One match dispatches to the right strategy
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod html;
mod json;

use crate::fetcher::{ContentKind, PageResponse};
use thiserror::Error;

// One extracted link, tagged by where it came from
//
// HTML links carry their anchor text so the categorizer can run its
// heuristics on it. JSON links instead carry the category the page
// itself declared - those bypass the categorizer entirely (the "type"
// field is a schema contract, not a guess).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkRecord {
    /// A link from an <a href> tag: resolved URL + lower-cased anchor text
    Html { url: String, text: String },
    /// A link from a JSON "links" entry: href verbatim + declared type
    Json {
        url: String,
        category: Option<String>,
    },
}

// What can go wrong during extraction
//
// Only the JSON path can actually fail: a body that claims to be JSON
// but doesn't parse, or an entry without an href. HTML parsing never
// fails (scraper happily builds a tree from any input) and Unsupported
// content just produces nothing.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The body was declared as JSON but could not be parsed as the
    /// expected {"links": [{"type", "href"}]} shape
    #[error("could not parse JSON landing page: {0}")]
    Json(#[from] serde_json::Error),
}

// Extracts all link records from a fetched page
//
// Parameters:
//   page: the fetched landing page (body + content kind + base URL)
//
// Returns: the links in the order they appear on the page.
// An Unsupported page yields Ok with an empty Vec - that's a normal
// outcome, not an error.
pub fn extract_links(page: &PageResponse) -> Result<Vec<LinkRecord>, ExtractError> {
    match page.kind {
        ContentKind::Html => Ok(html::extract_html_links(&page.body, &page.base)),
        ContentKind::Json => json::extract_json_links(&page.body),
        ContentKind::Unsupported => Ok(Vec::new()),
    }
}
