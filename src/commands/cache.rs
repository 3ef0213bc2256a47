//! Cache command implementation
//!
//! Shows what the shared bundle repository holds. Read-only.

use console::Style;

use crate::cli::{CacheArgs, CacheCommand, GlobalArgs};
use crate::error::Result;
use crate::repository::{self, list_bundles, repository_stats};

/// Run cache command
pub fn run(global: &GlobalArgs, args: CacheArgs) -> Result<()> {
    let root = repository::repository_dir(global.repository.as_deref())?;

    match args.command {
        Some(CacheCommand::List) => {
            let bundles = list_bundles(&root)?;
            if bundles.is_empty() {
                println!("No cached bundles.");
                return Ok(());
            }

            println!("Cached bundles ({}):", bundles.len());
            println!();
            for bundle in &bundles {
                println!(
                    "  {} {}",
                    Style::new().bold().yellow().apply_to(&bundle.name),
                    Style::new().dim().apply_to(bundle.formatted_size())
                );
                println!("    {}", bundle.versions.join(", "));
            }
        }
        None => {
            let stats = repository_stats(&root)?;
            println!("{} {}", Style::new().bold().apply_to("Repository:"), root.display());
            println!("{} {}", Style::new().bold().apply_to("Bundles:"), stats.bundles);
            println!("{} {}", Style::new().bold().apply_to("Versions:"), stats.versions);
            println!("{} {}", Style::new().bold().apply_to("Size:"), stats.formatted_size());
        }
    }

    Ok(())
}
