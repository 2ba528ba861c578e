//! Site generation: rendering pages and writing them to disk.

use anyhow::{Context, Result};
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::write_assets;
use crate::config::Config;
use crate::pages;

/// Writes one rendered page to the output directory.
///
/// # Arguments
///
/// * `dir`: Output directory
/// * `file_name`: Page file name, e.g. `index.html`
/// * `markup`: Rendered page markup
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_page(dir: &Path, file_name: &str, markup: Markup) -> Result<()> {
    fs::write(dir.join(file_name), markup.into_string())
        .with_context(|| format!("Failed to write page: {}", file_name))?;
    Ok(())
}

/// Generates the complete site into the configured output directory.
///
/// Creates the output tree, writes static assets, then renders and writes
/// every page.
///
/// # Arguments
///
/// * `config`: Generation configuration
///
/// # Returns
///
/// Path of the generated index page
///
/// # Errors
///
/// Returns error if directory creation or any write fails
pub fn generate_site(config: &Config) -> Result<PathBuf> {
    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output.display()
        )
    })?;

    write_assets(&assets_dir)?;

    write_page(&config.output, "index.html", pages::index::render(&config.lang))?;
    write_page(
        &config.output,
        "contact.html",
        pages::contact::render(&config.lang),
    )?;

    Ok(config.output.join("index.html"))
}
