// src/fetcher/http.rs
// =============================================================================
// This module fetches the landing page with retries and a timeout.
//
// Key functionality:
// - Validates the URL up front with the `url` crate (no string splicing -
//   "https://example.com" is normalized properly, URLs with paths or query
//   strings are left intact)
// - Makes an HTTP GET request with a per-request timeout
// - Retries failed attempts with a fixed 2 second pause between them
// - Classifies the response body as HTML or JSON from the Content-Type header
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E>: For error handling
// - Enums: To represent the content-type classification
// - thiserror: Derives Display and Error for our error types
// =============================================================================

use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use url::Url;

// How long we pause between failed attempts
const RETRY_DELAY: Duration = Duration::from_secs(2);

// Classification of a fetched response body
//
// This tag is decided exactly once, right after the fetch, and drives
// which extraction strategy the extractor picks later. The alternative
// (re-checking the content-type string in every method) is what we're
// deliberately avoiding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// An HTML document - links come from <a href> tags
    Html,
    /// A JSON document - links come from a "links" array
    Json,
    /// Anything else - nothing to extract
    Unsupported,
}

// A successfully fetched landing page
//
// Built once per successful fetch and never mutated afterwards.
// The analyzer owns it for the duration of one run.
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// The raw response body
    pub body: String,
    /// What kind of content the body holds
    pub kind: ContentKind,
    /// The request URL, used as the base for resolving relative links
    pub base: Url,
}

// What went wrong on the final (or only) attempt
//
// Either the transport layer failed (timeout, DNS, connection refused, ...)
// or the server answered with a non-2xx status. Both count as failed
// attempts and both get retried.
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// The URL didn't parse - no request was ever sent
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The server responded, but not with a success status
    #[error("HTTP {0}")]
    Status(StatusCode),

    /// The request itself failed (timeout, DNS, connection, TLS, ...)
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

// The error returned when every attempt has been used up
//
// Carries the last underlying failure and how many attempts were made,
// so the caller can print one useful diagnostic. Nothing propagates past
// the analyzer - it turns this into an empty result.
#[derive(Debug, Error)]
#[error("could not retrieve {url} after {attempts} attempt(s): {source}")]
pub struct FetchError {
    /// The URL we were trying to fetch
    pub url: String,
    /// Total attempts made (0 means the URL never parsed)
    pub attempts: u32,
    /// The failure from the last attempt
    #[source]
    pub source: FetchFailure,
}

// Builds the HTTP client used for every attempt
//
// Parameters:
//   timeout_secs: per-request timeout in seconds
//
// The client is built once in main and reused, which gives us connection
// pooling for free if the retry loop hits the same host repeatedly.
pub fn build_client(timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}

// Fetches the landing page, retrying on failure
//
// Parameters:
//   client: reqwest HTTP client (borrowed, built once by the caller)
//   url: the landing page URL as entered by the user
//   max_retries: how many EXTRA attempts to make after the first one
//
// So max_retries = 3 means up to 4 requests total, with a 2 second
// pause between them. The first success returns immediately without
// using up the remaining attempts.
//
// Returns: PageResponse on success, FetchError after the last failure
pub async fn fetch_page(
    client: &Client,
    url: &str,
    max_retries: u32,
) -> Result<PageResponse, FetchError> {
    // Parse and validate the URL before sending anything.
    // Url::parse also normalizes for us: a bare "https://example.com"
    // becomes "https://example.com/" without touching path or query
    // components of longer URLs.
    let base = Url::parse(url).map_err(|e| FetchError {
        url: url.to_string(),
        attempts: 0,
        source: FetchFailure::InvalidUrl(e),
    })?;

    let mut attempts = 0;
    loop {
        attempts += 1;

        match try_fetch(client, &base).await {
            Ok(page) => return Ok(page),
            Err(failure) => {
                if attempts > max_retries {
                    // That was the last allowed attempt
                    return Err(FetchError {
                        url: base.to_string(),
                        attempts,
                        source: failure,
                    });
                }

                eprintln!(
                    "  Warning: attempt {}/{} failed for {}: {}",
                    attempts,
                    max_retries + 1,
                    base,
                    failure
                );

                // Fixed back-off before the next attempt
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }
    }
}

// Makes a single GET request and classifies the response
//
// Any transport error or non-2xx status is returned as a FetchFailure
// so the retry loop above can decide whether to try again.
async fn try_fetch(client: &Client, url: &Url) -> Result<PageResponse, FetchFailure> {
    let response = client.get(url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchFailure::Status(status));
    }

    // Classify BEFORE consuming the body, since .text() takes the response
    let kind = classify_content_type(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
    );

    let body = response.text().await?;

    Ok(PageResponse {
        body,
        kind,
        base: url.clone(),
    })
}

// Decides the content kind from the Content-Type header
//
// Rule: a case-insensitive "json" substring anywhere in the header means
// JSON ("application/json", "application/ld+json", ...). A missing header
// or anything else defaults to HTML, which matches how landing pages are
// usually served.
fn classify_content_type(header: Option<&str>) -> ContentKind {
    match header {
        Some(value) if value.to_lowercase().contains("json") => ContentKind::Json,
        _ => ContentKind::Html,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why loop + attempts instead of for attempt in 0..=max_retries?
//    - Both work; the loop makes the "return on success, error on the
//      last failure" flow read top to bottom
//    - attempts is also exactly the number we want to report, no +1 math
//      at the call site
//
// 2. What does #[error(...)] on the enum variants do?
//    - thiserror generates the Display impl from those format strings
//    - #[error(transparent)] forwards Display straight to the inner error
//    - #[from] generates a From impl so the ? operator converts for us
//
// 3. Why is Unsupported a variant if classify never returns it?
//    - The extractor's contract covers all three kinds; tests construct
//      Unsupported responses directly to pin the "extract nothing" path
//    - If classification ever gets stricter, nothing downstream changes
//
// 4. What is tokio::time::sleep?
//    - Async sleep (doesn't block the thread)
//    - This is the only suspension point in the whole program: one fetch
//      at a time, one URL per run
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_classify_json() {
        assert_eq!(
            classify_content_type(Some("application/json")),
            ContentKind::Json
        );
        assert_eq!(
            classify_content_type(Some("Application/JSON; charset=utf-8")),
            ContentKind::Json
        );
        assert_eq!(
            classify_content_type(Some("application/ld+json")),
            ContentKind::Json
        );
    }

    #[test]
    fn test_classify_html_and_default() {
        assert_eq!(
            classify_content_type(Some("text/html; charset=utf-8")),
            ContentKind::Html
        );
        // Missing header defaults to HTML
        assert_eq!(classify_content_type(None), ContentKind::Html);
        // Unrecognized types also default to HTML
        assert_eq!(classify_content_type(Some("text/plain")), ContentKind::Html);
    }

    #[tokio::test]
    async fn test_invalid_url_makes_no_attempts() {
        let client = build_client(10).unwrap();
        let err = fetch_page(&client, "not a url", 3).await.unwrap_err();
        assert_eq!(err.attempts, 0);
        assert!(matches!(err.source, FetchFailure::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_success_on_first_attempt() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("<html></html>", "text/html"),
            )
            .expect(1) // exactly one request - no pointless retries
            .mount(&server)
            .await;

        let client = build_client(10).unwrap();
        let page = fetch_page(&client, &server.uri(), 3).await.unwrap();

        assert_eq!(page.kind, ContentKind::Html);
        assert_eq!(page.body, "<html></html>");
    }

    #[tokio::test]
    async fn test_retries_then_succeeds() {
        let server = MockServer::start().await;

        // First attempt gets a 500, after that the mock is used up
        // and the 200 mock below takes over
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"links":[]}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = build_client(10).unwrap();
        let page = fetch_page(&client, &server.uri(), 3).await.unwrap();

        assert_eq!(page.kind, ContentKind::Json);
    }

    #[tokio::test]
    async fn test_exhausts_all_attempts_then_errors() {
        let server = MockServer::start().await;

        // max_retries = 1 means exactly 2 requests should arrive
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(503))
            .expect(2)
            .mount(&server)
            .await;

        let client = build_client(10).unwrap();
        let err = fetch_page(&client, &server.uri(), 1).await.unwrap_err();

        assert_eq!(err.attempts, 2);
        assert!(matches!(
            err.source,
            FetchFailure::Status(StatusCode::SERVICE_UNAVAILABLE)
        ));
    }
}
