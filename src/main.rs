// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. If no URL was given, prompt for one interactively
// 3. Run the analysis (fetch -> extract -> categorize)
// 4. Print the categorized links and exit with proper code
//    (0 = links found, 1 = no links found, 2 = error)
//
// Everything here is thin glue: the interesting logic lives in the
// fetcher, extractor, categorize, and analyze modules.
//
// Rust concepts used:
// - async/await: The fetch pipeline is async end to end
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle the different outcomes
// =============================================================================

// Module declarations - tells Rust about our other source files
mod analyze; // src/analyze.rs - the fetch->extract->categorize pipeline
mod categorize; // src/categorize.rs - the link category heuristics
mod cli; // src/cli.rs - command-line parsing
mod extractor; // src/extractor/ - HTML and JSON link extraction
mod fetcher; // src/fetcher/ - HTTP retrieval with retries

// Import items we need from our modules
use analyze::CategorizedLinks;
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use std::io::{self, Write};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = links were found and printed
//   Ok(1) = no links found (bad fetch, empty page, unsupported content)
//   Err = unexpected error (broken terminal, client build failure, ...)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Take the URL from the command line, or ask for one
    let url = match cli.url {
        Some(url) => url,
        None => prompt_for_url()?,
    };

    println!("🔍 Analyzing landing page: {}", url);

    // One client for the whole run - the retry loop reuses its connections
    let client = fetcher::build_client(cli.timeout)?;

    // The analysis never fails: any fetch or parse problem has already
    // been reported on stderr and comes back as an empty mapping
    let categorized = analyze::analyze_page(&client, &url, cli.retries).await;

    print_results(&url, &categorized, cli.json)?;

    if categorized.is_empty() {
        Ok(1) // Exit code 1 = nothing found
    } else {
        Ok(0) // Exit code 0 = links found
    }
}

// Asks the user for a URL on stdin until they enter a non-empty one
//
// This mirrors classic interactive tools: loop until we get something
// usable, bail out if stdin closes (e.g., piped input ran out).
fn prompt_for_url() -> Result<String> {
    loop {
        print!("Enter the URL of the landing page to analyze: ");
        // print! doesn't flush, so the prompt would sit in the buffer
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes_read = io::stdin().read_line(&mut line)?;
        if bytes_read == 0 {
            // End of input - nothing more will ever arrive
            anyhow::bail!("no URL entered");
        }

        let url = line.trim().to_string();
        if !url.is_empty() {
            return Ok(url);
        }

        println!("Please enter a valid URL.");
    }
}

// Prints the results either as a text report or as JSON
// Parameters:
//   url: the analyzed URL (for the "nothing found" message)
//   categorized: the category -> links mapping
//   json: whether to output JSON format
fn print_results(url: &str, categorized: &CategorizedLinks, json: bool) -> Result<()> {
    if json {
        // Serialize the mapping to JSON and print
        // Key order in the output matches first-seen order on the page
        let json_output = serde_json::to_string_pretty(categorized)?;
        println!("{}", json_output);
    } else {
        print_report(url, categorized);
    }
    Ok(())
}

// Prints the human-readable report: one header line per category,
// then one line per link in that category
fn print_report(url: &str, categorized: &CategorizedLinks) {
    if categorized.is_empty() {
        println!("No links found on {}", url);
        return;
    }

    let mut total = 0;
    for (category, links) in categorized.iter() {
        println!("\nCategory: {}", category);
        for link in links {
            println!("{}", link);
        }
        total += links.len();
    }

    println!(
        "\n📊 {} link(s) across {} categories",
        total,
        categorized.categories().len()
    );
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does main not return Result?
//    - We want full control over the process exit code
//    - Returning Result from main prints Debug output and always exits 1
//    - Matching ourselves lets us map outcomes to 0/1/2
//
// 2. Why is the prompt synchronous in an async program?
//    - There's exactly one prompt, before any network work starts
//    - Blocking the runtime for a moment here costs nothing, and
//      std::io is much simpler than tokio's async stdin
//
// 3. Why does print_results take the whole mapping?
//    - The analysis produces a complete result before anything prints
//    - Printing is a pure consumer - it can't affect categorization
// -----------------------------------------------------------------------------
