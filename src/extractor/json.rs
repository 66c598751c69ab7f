// src/extractor/json.rs
// =============================================================================
// This module extracts links from JSON landing pages.
//
// Some landing pages serve their navigation as JSON instead of HTML:
//
//   { "links": [ { "type": "Blog Post", "href": "https://e.com/a" } ] }
//
// The "type" field is the page telling us the category directly, so these
// records skip the heuristic categorizer downstream. A missing "links"
// field just means the page has no links - that's reported as an empty
// result, not as an error. A body that doesn't parse at all IS an error;
// the analyzer catches it and degrades to an empty result, same as a
// failed fetch.
//
// Rust concepts:
// - serde derive: Declarative JSON -> struct mapping
// - #[serde(rename)]: "type" is a Rust keyword, so the field needs a
//   different name on our side
// =============================================================================

use crate::extractor::{ExtractError, LinkRecord};
use serde::Deserialize;

// The JSON landing page schema
//
// #[serde(default)] makes a missing "links" field deserialize to an
// empty Vec instead of failing
#[derive(Debug, Deserialize)]
struct LandingPage {
    #[serde(default)]
    links: Vec<LandingPageLink>,
}

// One entry of the "links" array
#[derive(Debug, Deserialize)]
struct LandingPageLink {
    /// The declared category ("Blog Post", "About", ...)
    /// Optional: entries without a type are kept here and skipped
    /// later when the results are folded together
    #[serde(rename = "type")]
    category: Option<String>,

    /// The link target, used verbatim (the schema promises absolute URLs)
    href: String,
}

// Extracts all link records from a JSON body
//
// Parameters:
//   body: the raw response body
//
// Returns: one LinkRecord per "links" entry, in array order,
// or ExtractError::Json if the body isn't valid JSON for our schema
pub fn extract_json_links(body: &str) -> Result<Vec<LinkRecord>, ExtractError> {
    let page: LandingPage = serde_json::from_str(body)?;

    Ok(page
        .links
        .into_iter()
        .map(|link| LinkRecord::Json {
            url: link.href,
            category: link.category,
        })
        .collect())
}
