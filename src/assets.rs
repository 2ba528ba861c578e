//! CSS and favicon asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const HEADER: &str = include_str!("../assets/components/header.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");

const INDEX_PAGE: &str = include_str!("../assets/page-index.css");
const CONTACT_PAGE: &str = include_str!("../assets/page-contact.css");

const FAVICON: &str = include_str!("../assets/favicon.svg");

/// Writes all bundled static assets to the assets directory
///
/// Each page gets one stylesheet bundled from the base sheet, the shared
/// component sheets, and its page-specific sheet. The favicon ships as SVG.
///
/// # Errors
///
/// Returns error if any asset file cannot be written
pub fn write_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, "index.css", &[BASE, HEADER, LAYOUT, INDEX_PAGE])?;
    write_bundled(
        assets_dir,
        "contact.css",
        &[BASE, HEADER, LAYOUT, CONTACT_PAGE],
    )?;

    fs::write(assets_dir.join("favicon.svg"), FAVICON)
        .context("Failed to write favicon asset")?;

    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
