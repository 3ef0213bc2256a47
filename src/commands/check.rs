//! Check command implementation
//!
//! Reports whether every declared bundle is installed, without touching disk.

use console::Style;

use crate::cli::GlobalArgs;
use crate::error::Result;

use super::helpers::load_bundler;

/// Run check command
pub fn run(global: &GlobalArgs) -> Result<()> {
    let bundler = load_bundler(global)?;
    let outcome = bundler.check();

    match outcome.clone().into_error(bundler.registry().repository_root()) {
        Some(err) => Err(err),
        None => {
            println!("{}", Style::new().green().apply_to(outcome.message()));
            Ok(())
        }
    }
}
