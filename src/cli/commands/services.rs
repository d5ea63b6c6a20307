//! Service listing command.

use console::style;

use crate::config::Settings;
use crate::page;

/// Print every service key with its page path, title and sections.
pub fn cmd_services(settings: &Settings) -> anyhow::Result<()> {
    let catalog = settings.load_catalog()?;

    match settings.content_file {
        Some(ref path) => println!("{} {}", style("Content:").bold(), path.display()),
        None => println!("{} built-in", style("Content:").bold()),
    }
    println!();

    for record in catalog.iter() {
        let composed = page::compose(&catalog, &record.key)?;
        let sections: Vec<&str> = composed.sections.iter().map(|s| s.name()).collect();
        println!(
            "  {:<16} {:<28} {}",
            style(&record.key).cyan(),
            record.path(),
            style(&record.meta.title).dim()
        );
        println!("  {:<16} {}", "", sections.join(" → "));
    }
    println!();
    println!("{} services", catalog.len());

    Ok(())
}
