//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Vendr - front-end bundle fetcher
///
/// Fetch declared front-end bundles into a shared repository and vendor them into a project.
#[derive(Parser, Debug)]
#[command(
    name = "vendr",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Fetch and vendor front-end bundles",
    long_about = "Vendr reads the bundles declared in vendr.yaml, fetches each one into a \
                  shared per-user repository and installs it into the project's vendor \
                  directory, extracting gzip-tar and zip archives on the way.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  vendr check\n    \
                  vendr install\n    \
                  vendr install --force\n    \
                  vendr cache list"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Project directory containing vendr.yaml (defaults to current directory)
    #[arg(long, short = 'p', global = true)]
    pub project: Option<PathBuf>,

    /// Bundle repository directory (defaults to ~/.vendr/bundles)
    #[arg(long, global = true, env = "VENDR_REPOSITORY")]
    pub repository: Option<PathBuf>,

    /// Vendor directory, relative to the project (overrides vendr.yaml)
    #[arg(long, global = true)]
    pub vendor: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that every declared bundle is installed
    Check,

    /// Fetch and vendor declared bundles
    Install(InstallArgs),

    /// Inspect the shared bundle repository
    Cache(CacheArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the install command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                   Install what is missing:\n    vendr install\n\n\
                   Re-run every bundle through the installer:\n    vendr install --force\n\n\
                   Install into another vendor directory:\n    vendr install --vendor public/lib")]
pub struct InstallArgs {
    /// Skip the up-front check and run the installer even when everything looks installed
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Arguments for the cache command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show repository size:\n    vendr cache\n\n\
                  List cached bundles:\n    vendr cache list")]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: Option<CacheCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CacheCommand {
    /// List cached bundles with their versions
    List,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    vendr completions --shell bash > ~/.bash_completion.d/vendr\n\n\
                  Generate zsh completions:\n    vendr completions --shell zsh > ~/.zfunc/_vendr")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, value_enum)]
    pub shell: clap_complete::Shell,
}
