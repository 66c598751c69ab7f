// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// link-lens has exactly one job (analyze one landing page), so there are
// no subcommands - just a positional URL and a few option flags.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Option<T>: A value that might not be supplied
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "link-lens",
    version = "0.1.0",
    about = "Fetch a landing page and sort its links into categories",
    long_about = "link-lens downloads a single landing page (HTML or JSON), extracts every \
                  hyperlink on it, and sorts each link into a category (Blog Post, About, \
                  Contact Us, Other) using simple text heuristics."
)]
pub struct Cli {
    /// URL of the landing page to analyze (e.g., https://example.com)
    ///
    /// This is a positional argument. If you leave it out, link-lens
    /// will prompt for a URL interactively.
    pub url: Option<String>,

    /// Output the categorized links as JSON instead of a text report
    ///
    /// This is an optional flag: --json
    /// #[arg(long)] creates a flag from the field name
    #[arg(long)]
    pub json: bool,

    /// How many times to retry a failed fetch (default: 3)
    ///
    /// The page is requested up to retries+1 times in total,
    /// with a 2 second pause between attempts.
    #[arg(long, default_value_t = 3)]
    pub retries: u32,

    /// Request timeout in seconds (default: 10)
    ///
    /// Applies to each individual attempt, not the whole run.
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option<String> for the URL?
//    - The URL can be omitted on the command line
//    - None means "not supplied" and triggers the interactive prompt
//    - Some(url) means the user passed it as an argument
//
// 2. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 3. Why no subcommands?
//    - There is only one operation, so a flat argument struct is enough
//    - clap still gives us --help, --version, and validation for free
//
// 4. What is default_value_t?
//    - Sets a default when the flag is not passed
//    - The _t suffix means "typed" - the default is a real u32/u64,
//      not a string that gets parsed later
// -----------------------------------------------------------------------------
