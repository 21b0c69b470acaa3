//! cvgen - ConVenuence project generators
//!
//! Scaffolds the CVCore Swift package and writes Xcode color asset catalogs.
//!
//! # Usage
//!
//! ```bash
//! # Create ./CVCore with its folders, placeholder sources and Package.swift
//! cvgen scaffold
//!
//! # Write colorsets into the default asset catalog
//! cvgen assets --out-dir ConVenuence/ConVenuence/Assets.xcassets/Colors
//!
//! # Inspect a conversion
//! cvgen convert "#007AFF"
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cvgen::cli::{
    AssetsArgs, CliResult, ColorsArgs, ConfigArgs, ConvertArgs, GenerateArgs, ScaffoldArgs,
};

/// cvgen - scaffold CVCore and generate color asset catalogs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the CVCore Swift package skeleton
    Scaffold(ScaffoldArgs),
    /// Generate color asset catalog entries
    Assets(AssetsArgs),
    /// Run scaffold and assets together
    Generate(GenerateArgs),
    /// Convert hex colors to sRGB components
    Convert(ConvertArgs),
    /// List palette colors
    Colors(ColorsArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Scaffold(args) => args.execute(),
            Self::Assets(args) => args.execute(),
            Self::Generate(args) => args.execute(),
            Self::Convert(args) => args.execute(),
            Self::Colors(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let filter = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = cli.command.execute() {
        tracing::debug!(exit_code = err.exit_code(), "command failed");
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}
