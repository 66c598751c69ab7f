// src/analyze.rs
// =============================================================================
// This module drives the whole pipeline for one landing page:
//
//   fetch -> extract -> categorize -> fold into a category map
//
// It is also where every failure gets absorbed. A fetch that exhausts its
// retries, a JSON body that doesn't parse, a content type we can't read -
// all of them print a diagnostic to stderr and end up as the same thing:
// an empty CategorizedLinks. The caller never sees an error, only a
// well-formed (possibly empty) mapping.
//
// Rust concepts:
// - IndexMap: A map that iterates in insertion order, so categories come
//   out in the order they were first seen
// - match on enum variants: HTML records go through the categorizer,
//   JSON records already carry their category
// =============================================================================

use crate::categorize::categorize_link;
use crate::extractor::{extract_links, LinkRecord};
use crate::fetcher::fetch_page;
use indexmap::IndexMap;
use reqwest::Client;
use serde::Serialize;

// The final result: category label -> links, both in first-seen order
//
// Keys are created lazily the first time a link lands in a category.
// Serializes as a plain JSON object for --json output.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CategorizedLinks(IndexMap<String, Vec<String>>);

impl CategorizedLinks {
    /// Appends a link under a category, creating the category on first use
    pub fn push(&mut self, category: &str, link: String) {
        self.0.entry(category.to_string()).or_default().push(link);
    }

    /// True when no link matched anything (or nothing was fetched)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates categories in the order they first appeared
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }

    /// The category labels in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}

// Analyzes one landing page end to end
//
// Parameters:
//   client: reqwest HTTP client (borrowed, built once in main)
//   url: the landing page URL
//   max_retries: extra fetch attempts after the first failure
//
// Returns: the categorized links; empty if anything went wrong.
// This function never fails and never panics - "no content available"
// and "no links found" look identical to the caller by design of the
// error model, and both are fine.
pub async fn analyze_page(client: &Client, url: &str, max_retries: u32) -> CategorizedLinks {
    let page = match fetch_page(client, url, max_retries).await {
        Ok(page) => page,
        Err(e) => {
            eprintln!("Error retrieving page: {}", e);
            return CategorizedLinks::default();
        }
    };

    let records = match extract_links(&page) {
        Ok(records) => records,
        Err(e) => {
            // Same graceful degradation as a failed fetch: report and
            // hand back an empty mapping
            eprintln!("Error reading page content: {}", e);
            return CategorizedLinks::default();
        }
    };

    fold_records(records)
}

// Folds extracted records into the category map
//
// HTML records run through the heuristic categorizer. JSON records use
// the category the page declared, verbatim; entries that declared no
// category are skipped (we have nothing sensible to file them under).
fn fold_records(records: Vec<LinkRecord>) -> CategorizedLinks {
    let mut categorized = CategorizedLinks::default();

    for record in records {
        match record {
            LinkRecord::Html { url, text } => {
                let category = categorize_link(&url, &text);
                categorized.push(category, url);
            }
            LinkRecord::Json {
                url,
                category: Some(category),
            } => {
                categorized.push(&category, url);
            }
            LinkRecord::Json { category: None, .. } => {
                // No declared type, nothing to categorize by
            }
        }
    }

    categorized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::build_client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_fold_html_records() {
        let records = vec![
            LinkRecord::Html {
                url: "https://e.com/blog/a".to_string(),
                text: String::new(),
            },
            LinkRecord::Html {
                url: "https://e.com/x".to_string(),
                text: "about us".to_string(),
            },
            LinkRecord::Html {
                url: "https://e.com/blog/b".to_string(),
                text: String::new(),
            },
        ];

        let categorized = fold_records(records);

        // Blog Post was seen first, so it's the first key
        assert_eq!(categorized.categories(), vec!["Blog Post", "About"]);
        let map: Vec<_> = categorized.iter().collect();
        assert_eq!(
            *map[0].1,
            vec![
                "https://e.com/blog/a".to_string(),
                "https://e.com/blog/b".to_string(),
            ]
        );
    }

    #[test]
    fn test_fold_skips_untyped_json_records() {
        let records = vec![
            LinkRecord::Json {
                url: "https://e.com/a".to_string(),
                category: Some("Blog Post".to_string()),
            },
            LinkRecord::Json {
                url: "https://e.com/b".to_string(),
                category: None,
            },
        ];

        let categorized = fold_records(records);
        assert_eq!(categorized.categories(), vec!["Blog Post"]);
        let (_, links) = categorized.iter().next().unwrap();
        assert_eq!(links, &vec!["https://e.com/a".to_string()]);
    }

    #[tokio::test]
    async fn test_analyze_html_page() {
        let server = MockServer::start().await;

        let html = r#"
            <html><body>
                <a href="/blog/first-post">Read the blog</a>
                <a href="/about/">About</a>
                <a href="/contact/">Get in touch</a>
                <a href="/pricing">Pricing</a>
                <a href="/blog/second-post">Another Post</a>
            </body></html>
        "#;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(html, "text/html"),
            )
            .mount(&server)
            .await;

        let client = build_client(10).unwrap();
        let categorized = analyze_page(&client, &server.uri(), 0).await;

        assert_eq!(
            categorized.categories(),
            vec!["Blog Post", "About", "Contact Us", "Other"]
        );

        let map: Vec<_> = categorized.iter().collect();
        let base = server.uri();
        assert_eq!(
            *map[0].1,
            vec![
                format!("{}/blog/first-post", base),
                format!("{}/blog/second-post", base),
            ]
        );
        assert_eq!(*map[3].1, vec![format!("{}/pricing", base)]);
    }

    #[tokio::test]
    async fn test_analyze_json_page() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(
                    r#"{"links":[{"type":"Blog Post","href":"https://e.com/a"}]}"#,
                    "application/json",
                ),
            )
            .mount(&server)
            .await;

        let client = build_client(10).unwrap();
        let categorized = analyze_page(&client, &server.uri(), 0).await;

        assert_eq!(categorized.categories(), vec!["Blog Post"]);
        let (_, links) = categorized.iter().next().unwrap();
        assert_eq!(links, &vec!["https://e.com/a".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_fetch_yields_empty_mapping() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_client(10).unwrap();
        let categorized = analyze_page(&client, &server.uri(), 0).await;

        assert!(categorized.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_yields_empty_mapping() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("{definitely not json", "application/json"),
            )
            .mount(&server)
            .await;

        let client = build_client(10).unwrap();
        let categorized = analyze_page(&client, &server.uri(), 0).await;

        // Parse failures degrade to empty, same as a failed fetch
        assert!(categorized.is_empty());
    }

    #[tokio::test]
    async fn test_idempotent_over_static_page() {
        let server = MockServer::start().await;

        let html = r#"
            <a href="/blog/a">blog</a>
            <a href="/about/">about</a>
            <a href="/misc">misc</a>
        "#;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(html, "text/html"),
            )
            .mount(&server)
            .await;

        let client = build_client(10).unwrap();
        let first = analyze_page(&client, &server.uri(), 0).await;
        let second = analyze_page(&client, &server.uri(), 0).await;

        // Same keys, same order, same links
        assert_eq!(first.categories(), second.categories());
        assert_eq!(first, second);
    }
}
