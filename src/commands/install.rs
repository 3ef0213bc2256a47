//! Install command implementation
//!
//! Runs check, install and verify; `--force` sends every bundle through the
//! installer even when the check passes.

use console::Style;
use tracing::warn;

use crate::bundler::{Bundler, PerformOutcome};
use crate::cli::{GlobalArgs, InstallArgs};
use crate::error::Result;
use crate::installer::BundleOutcome;
use crate::progress::ProgressDisplay;

use super::helpers::load_bundler;

/// Run install command
pub fn run(global: &GlobalArgs, args: InstallArgs) -> Result<()> {
    let bundler = load_bundler(global)?;
    if bundler.registry().is_empty() {
        warn!("no bundles declared in vendr.yaml");
    }
    let progress = progress_for(&bundler, global.verbose);

    let outcome = if args.force {
        let report = bundler.install(Some(&progress))?;
        match bundler
            .check()
            .into_error(bundler.registry().repository_root())
        {
            Some(err) => return Err(err),
            None => PerformOutcome::Installed(report),
        }
    } else {
        bundler.perform(Some(&progress))?
    };

    print_outcome(&outcome, global.verbose);
    Ok(())
}

/// Verbose runs log each bundle instead of drawing a bar
fn progress_for(bundler: &Bundler, verbose: bool) -> ProgressDisplay {
    let total = bundler.registry().len() as u64;
    if verbose || !console::Term::stderr().is_term() {
        ProgressDisplay::hidden(total)
    } else {
        ProgressDisplay::new(total)
    }
}

fn print_outcome(outcome: &PerformOutcome, verbose: bool) {
    if let (true, PerformOutcome::Installed(report)) = (verbose, outcome) {
        for (name, result) in &report.outcomes {
            let label = match result {
                BundleOutcome::Skipped => Style::new().dim().apply_to("up to date"),
                BundleOutcome::Copied => Style::new().green().apply_to("copied"),
                BundleOutcome::Extracted => Style::new().green().apply_to("extracted"),
            };
            println!("  {} {label}", Style::new().bold().apply_to(name));
        }
    }

    println!("{}", Style::new().green().bold().apply_to(outcome.message()));
}
