//! appswitch CLI - quick-switch between preferred apps
//!
//! This is the main entry point for the appswitch command-line interface.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    let config = cli.config.as_deref();

    // Run command
    match cli.command {
        Commands::List(args) => commands::list::run(args, config),
        Commands::Open(args) => commands::open::run(args, config).await,
        Commands::Last => commands::last::run(config).await,
        Commands::SetDefault(args) => commands::set_default::run(args, config).await,
        Commands::Path(args) => commands::path::run(args, config),
        Commands::Doctor(args) => commands::doctor::run(args, config).await,
        Commands::Config(args) => commands::config::run(args, config).await,
        Commands::Completions(args) => commands::completions::run(args),
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose == 0 {
        // Command output is the primary channel; logs only surface problems
        // unless RUST_LOG or -v asks for more
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        match verbose {
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
