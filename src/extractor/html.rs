// src/extractor/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to:
// - Resolve relative URLs against the page URL, the way a browser does
// - This replaces naive base+href string concatenation, which breaks for
//   hrefs starting with "/" against a base that has its own path, and
//   for "?query" hrefs
//
// Rust concepts:
// - Iterators: For processing collections
// - Option<T>: For links that turn out not to be usable
// - Closures: Anonymous functions (|x| ...)
// =============================================================================

use crate::extractor::LinkRecord;
use scraper::{Html, Selector};
use url::Url;

// Extracts all links from HTML content, in document order
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   base: the URL of the page (for resolving relative links)
//
// Returns: Vec<LinkRecord> with absolute URLs and lower-cased anchor text
//
// Example:
//   html = "<a href='/docs'>Docs</a>"
//   base = "https://example.com"
//   result = [Html { url: "https://example.com/docs", text: "docs" }]
pub fn extract_html_links(html: &str, base: &Url) -> Vec<LinkRecord> {
    let mut records = Vec::new();

    // Parse the HTML into a document
    let document = Html::parse_document(html);

    // Create a CSS selector to find all <a> tags with an href
    // Selector::parse returns Result, so we use .unwrap() which panics on error
    // This is OK here because our selector is a constant and known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            // Try to convert this to an absolute URL
            let url = match resolve_url(base, href) {
                Some(url) => url,
                None => continue, // anchors, mailto:, invalid hrefs, ...
            };

            // The anchor's visible text, lower-cased so the categorizer's
            // substring checks don't have to care about case
            let text = element
                .text()
                .collect::<String>()
                .trim()
                .to_lowercase();

            records.push(LinkRecord::Html { url, text });
        }
    }

    records
}

// Resolves a possibly-relative href to an absolute HTTP(S) URL
//
// Parameters:
//   base: the base URL (the current page)
//   href: the href value (might be relative, might be absolute)
//
// Returns: Some(absolute_url) or None if the link isn't usable
//
// Examples:
//   base = "https://example.com/page"
//   href = "/docs" -> Some("https://example.com/docs")
//   href = "../other" -> Some("https://example.com/other")
//   href = "https://other.com" -> Some("https://other.com/")
//   href = "javascript:void(0)" -> None (not HTTP)
fn resolve_url(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();

    // Skip same-page anchors and special protocols
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
        || href.starts_with("data:")
    {
        return None;
    }

    // base.join handles both cases: an absolute href replaces the base,
    // a relative href is resolved against it
    match base.join(href) {
        Ok(url) => {
            // Only keep links we could actually fetch
            if url.scheme() == "http" || url.scheme() == "https" {
                Some(url.to_string())
            } else {
                None
            }
        }
        Err(_) => None, // Invalid URL, skip it
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is scraper and how does it work?
//    - scraper parses HTML into a tree structure (DOM)
//    - You can then query it using CSS selectors (like querySelector)
//    - "a[href]" means "all <a> tags that have an href attribute"
//
// 2. What does element.text() give us?
//    - An iterator over all text nodes inside the element
//    - <a href="/x"><b>Read</b> more</a> yields "Read" and " more"
//    - .collect::<String>() glues them together into one string
//
// 3. Why lower-case the text here and not in the categorizer?
//    - The categorizer is a pure function over (link, text)
//    - Normalizing at the boundary keeps it free of policy about
//      where its inputs came from
//
// 4. What is url.join()?
//    - Resolves relative URLs the way a browser does
//    - Example: "https://example.com/a/b" + "../c" = "https://example.com/c"
//    - Much safer than gluing strings together
// -----------------------------------------------------------------------------
