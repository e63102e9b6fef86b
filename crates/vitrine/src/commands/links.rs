//! Link report command.

use std::path::Path;

use anyhow::{Context, Result};
use vitrine_site::load_site;
use vitrine_static::{link_report, LinkEntry};

/// Log every outbound link, warning about the ones that render as
/// "not configured" notices.
pub fn run(config_path: &Path) -> Result<()> {
    let site = load_site(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    let entries = link_report(&site);
    let (resolved, hidden) = summarize(&entries);

    for entry in &entries {
        match &entry.href {
            Some(href) => tracing::info!("{:<8} {:<18} {}", entry.section, entry.name, href),
            None => tracing::warn!("{:<8} {:<18} not configured", entry.section, entry.name),
        }
    }

    tracing::info!("{} links resolved, {} hidden", resolved, hidden);

    Ok(())
}

fn summarize(entries: &[LinkEntry]) -> (usize, usize) {
    let resolved = entries.iter().filter(|e| e.href.is_some()).count();
    (resolved, entries.len() - resolved)
}
