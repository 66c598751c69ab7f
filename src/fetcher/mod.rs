// src/fetcher/mod.rs
// =============================================================================
// This module handles retrieving the landing page over HTTP.
//
// Submodules:
// - http: Makes the GET request with retries, timeouts, and content-type
//   classification
//
// This file (mod.rs) is the module root - it exports the public API that
// other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod http;

// Re-export public items from submodules
// This lets users write `fetcher::fetch_page()` instead of
// `fetcher::http::fetch_page()`
pub use http::{build_client, fetch_page, ContentKind, FetchError, FetchFailure, PageResponse};
