//! Vendr - front-end bundle fetcher
//!
//! Fetches the bundles a project declares into a shared per-user repository and
//! installs them into the project's vendor directory.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod archive;
mod bundler;
mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod fetcher;
mod hash;
mod installer;
mod progress;
mod repository;
mod source;
#[cfg(test)]
mod test_fixtures;
mod verifier;

use cli::{Cli, Commands};

/// Log to stderr; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let default = if verbose { "vendr=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let result = match cli.command {
        Commands::Check => commands::check::run(&cli.global),
        Commands::Install(args) => commands::install::run(&cli.global, args),
        Commands::Cache(args) => commands::cache::run(&cli.global, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
