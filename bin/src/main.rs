//! capval CLI binary.
//!
//! Provides a command-line interface for capval valuations and reports.

mod cmd;
mod config;
mod scenario;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmd::compute::OutputFormat;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "capval")]
#[command(about = "WACC, FCFF and NPV valuation with .docx reports", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a default scenario file
    Template {
        /// Number of projection years
        #[arg(short, long, default_value = "5")]
        years: usize,
    },

    /// Compute a valuation and print the results
    Compute {
        /// Scenario JSON file
        scenario: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Compute a valuation and write the .docx report
    Report {
        /// Scenario JSON file
        scenario: PathBuf,

        /// Report path (defaults to the suggested name in $CAPVAL_OUTPUT_DIR)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = CliConfig::from_env();

    match cli.command {
        Commands::Template { years } => {
            cmd::template::print_template(years)?;
        }
        Commands::Compute { scenario, format } => {
            cmd::compute::show_valuation(&scenario, format)?;
        }
        Commands::Report { scenario, output } => {
            cmd::report::write_report(&scenario, output, &config)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
