//! Carsome-Scraper main entry point
//!
//! This is the command-line interface for the car listing scraper.

use anyhow::Result;
use carsome_scraper::config::{default_config, load_config, Config};
use carsome_scraper::run_scrape;
use clap::Parser;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Carsome-Scraper: a one-shot car listing harvester
///
/// Fetches every result page of the configured carsome.my listing search,
/// extracts the advertised cars, and writes them to a timestamped CSV file.
#[derive(Parser, Debug)]
#[command(name = "carsome-scraper")]
#[command(version = "1.0.0")]
#[command(about = "Scrape carsome.my car listings to CSV", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults apply when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load and validate configuration
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => default_config()?,
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    // Logging goes to the append-only run log configured in [output]
    setup_logging(&config.output.log_path, cli.verbose, cli.quiet)?;

    tracing::info!("Starting scrape of {}", config.site.base_url);

    match run_scrape(config).await {
        Ok(summary) => {
            match &summary.output_path {
                Some(path) => println!(
                    "Scraped {} listings across {} pages -> {}",
                    summary.listings,
                    summary.pages,
                    path.display()
                ),
                None => println!(
                    "Scraped 0 listings across {} pages, no file written",
                    summary.pages
                ),
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the tracing subscriber, writing to the append-only log file
fn setup_logging(log_path: &str, verbose: u8, quiet: bool) -> std::io::Result<()> {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("carsome_scraper=info,warn"),
            1 => EnvFilter::new("carsome_scraper=debug,info"),
            2 => EnvFilter::new("carsome_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(())
}

/// Handles the --dry-run mode: prints the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Carsome-Scraper Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  Page parameter: {}", config.site.page_param);

    println!("\nClient:");
    println!("  User agent: {}", config.client.user_agent);
    println!("  Timeout: {}s", config.client.timeout_secs);
    println!("  Connect timeout: {}s", config.client.connect_timeout_secs);

    println!("\nRun:");
    println!("  Page delay: {}ms", config.run.page_delay_ms);
    println!("  On page error: {:?}", config.run.on_page_error);

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory);
    println!("  File prefix: {}", config.output.file_prefix);
    println!("  Log file: {}", config.output.log_path);

    println!("\n✓ Configuration is valid");
}
