// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// There is a single command: point it at a documentation directory.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "doc-link-check",
    version,
    about = "Find broken links in a markdown documentation tree",
    long_about = "doc-link-check walks a documentation directory, extracts every markdown link and \
                  reports the ones that point at missing local files or unreachable URLs. \
                  It exits with code 1 when any broken link is found, which makes it suitable for CI."
)]
pub struct Cli {
    /// Documentation directory to check
    ///
    /// This is a positional argument (required, no flag needed)
    pub docs_dir: PathBuf,

    /// Skip validation of external HTTP/HTTPS links
    #[arg(long)]
    pub skip_external: bool,

    /// Per-request timeout for external links, in seconds (at least 1)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Pause after each external check, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,

    /// Maximum number of external checks running at once
    ///
    /// 1 checks links strictly one after another
    #[arg(long, default_value_t = 1)]
    pub concurrency: usize,

    /// Maximum number of redirects to follow per request
    #[arg(long, default_value_t = 10)]
    pub max_redirects: usize,

    /// Output the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why PathBuf for docs_dir?
//    - PathBuf is the owned path type, like String is for text
//    - Paths are not always valid UTF-8, PathBuf handles that correctly
//
// 2. What does default_value_t do?
//    - Supplies a typed default when the flag is absent
//    - --delay-ms with no value given on the command line becomes 100
// -----------------------------------------------------------------------------
