// src/categorize.rs
// =============================================================================
// This module assigns a category to a single (link, text) pair.
//
// The rules are simple substring heuristics over the URL path and the
// anchor text. They are evaluated IN ORDER and the first match wins -
// the rules are not mutually exclusive (a link can contain both /blog/
// and /about/), so the order is part of the contract, not an
// implementation detail.
//
// This is a pure function: no state, no I/O, no failure. Anything the
// rules don't recognize lands in "Other".
//
// Rust concepts:
// - &'static str: The category labels are string literals baked into
//   the binary, so no allocation is needed per call
// - Early return: Each rule returns as soon as it matches
// =============================================================================

// The fixed category labels
pub const BLOG_POST: &str = "Blog Post";
pub const ABOUT: &str = "About";
pub const CONTACT_US: &str = "Contact Us";
pub const OTHER: &str = "Other";

// Categorizes a link based on heuristics in the URL and anchor text
//
// Parameters:
//   link: the absolute link URL
//   text: the anchor text, already lower-cased by the extractor
//
// Returns: one of the four category labels; never fails
//
// Rule order matters: "/blog/about/" with empty text is a Blog Post,
// not About, because rule 1 runs first.
pub fn categorize_link(link: &str, text: &str) -> &'static str {
    if link.contains("/blog/") || text.contains("blog") {
        return BLOG_POST;
    }
    if link.contains("/about/") || text.contains("about") {
        return ABOUT;
    }
    // "contact" in the text is enough on its own; no "us" or "form"
    // is required alongside it
    if link.contains("/contact/") || text.contains("contact") {
        return CONTACT_US;
    }
    OTHER
}
