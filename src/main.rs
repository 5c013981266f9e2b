// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so it never mixes with the report)
// 3. Run the validation pipeline over the documentation directory
// 4. Print the report and exit with the proper code
//    (0 = no broken links, 1 = broken links or missing directory, 2 = error)
//
// Rust concepts used:
// - async/await: External checks are network I/O
// - Result<T, E>: For error handling
// - downcast_ref: To recognize one specific error inside an anyhow::Error
// =============================================================================

mod checker; // src/checker/ - extraction, classification, local and HTTP checks
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - run configuration built from the CLI
mod error; // src/error.rs - fatal error types
mod report; // src/report.rs - aggregation and rendering
mod scan; // src/scan/ - markdown file discovery
mod validate; // src/validate.rs - the pipeline tying it all together

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use config::ValidateConfig;
use error::ValidateError;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => match e.downcast_ref::<ValidateError>() {
            // A missing root is a user error, reported once with exit code 1
            Some(ValidateError::DirectoryNotFound(_) | ValidateError::NotADirectory(_)) => {
                eprintln!("Error: {}", e);
                1
            }
            _ => {
                eprintln!("Error: {:#}", e);
                2
            }
        },
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = no broken links
//   Ok(1) = broken links found
//   Err   = the run could not complete
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = ValidateConfig::from(&cli);
    let json = cli.json;

    if !json {
        println!("🔍 Checking links in {}", cli.docs_dir.display());
        if !config.check_external {
            println!("⏭️  External link checking disabled");
        }
    }

    let report = validate::validate_tree(&cli.docs_dir, &config, |file| {
        if !json {
            println!("Checking {}...", file.display());
        }
    })
    .await?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(if report.is_success() { 0 } else { 1 })
}

// Logs go to stderr; WARN by default, DEBUG with --verbose
fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
