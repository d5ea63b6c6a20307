//! Static export command.

use std::path::Path;

use console::style;

use crate::config::Settings;
use crate::export::export_site;

/// Render the site into `out`.
pub fn cmd_build(settings: &Settings, out: &Path) -> anyhow::Result<()> {
    let catalog = settings.load_catalog()?;

    println!(
        "{} Exporting {} services to {}",
        style("→").cyan(),
        catalog.len(),
        out.display()
    );

    match export_site(settings, &catalog, out) {
        Ok(summary) => {
            println!(
                "  {} {} pages, {} media files",
                style("✓").green(),
                summary.pages,
                summary.media_files
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("  {} Export failed: {}", style("✗").red(), e);
            Err(e.into())
        }
    }
}
