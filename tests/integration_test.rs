//! Integration tests for the site generator.
//!
//! Tests full site generation into a temporary directory and checks that
//! the written pages carry their metadata literals.

use anyhow::Result;
use chintai_site::{Config, PageMetadata, generate_site, page_wrapper};
use maud::html;
use std::fs;
use tempfile::TempDir;

/// Builds a generation config pointed at a fresh temp directory.
fn test_config(dir: &TempDir) -> Config {
    Config {
        output: dir.path().join("dist"),
        lang: "ja".to_string(),
        no_open: true,
    }
}

#[test]
fn test_generate_site_produces_expected_files() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let config = test_config(&dir);

    // Act
    let index_path = generate_site(&config)?;

    // Assert
    assert!(index_path.exists(), "index.html should be written");
    assert!(
        config.output.join("contact.html").exists(),
        "contact.html should be written"
    );
    assert!(
        config.output.join("assets/index.css").exists(),
        "index stylesheet should be written"
    );
    assert!(
        config.output.join("assets/favicon.svg").exists(),
        "favicon should be written"
    );

    Ok(())
}

#[test]
fn test_generated_index_contains_metadata_literals() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let config = test_config(&dir);

    // Act
    let index_path = generate_site(&config)?;
    let html = fs::read_to_string(index_path)?;

    // Assert
    assert!(
        html.contains("<title>賃貸管理 | Smart賃貸</title>"),
        "Index should carry its literal title"
    );
    assert!(
        html.contains("家賃収入の最大化"),
        "Index should carry its literal description"
    );
    assert!(
        html.contains("content=\"賃貸, 管理\""),
        "Index should carry its literal keywords"
    );
    assert!(
        html.contains("<html lang=\"ja\">"),
        "Index should use the configured language"
    );

    Ok(())
}

#[test]
fn test_generated_contact_uses_favicon_variant() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let config = test_config(&dir);

    // Act
    generate_site(&config)?;
    let html = fs::read_to_string(config.output.join("contact.html"))?;

    // Assert
    assert!(
        html.contains("<title>お問い合わせ | Smart賃貸</title>"),
        "Contact page should carry its literal title"
    );
    assert!(
        html.contains("href=\"assets/favicon.svg\""),
        "Contact page should link the favicon"
    );
    assert!(
        !html.contains("name=\"description\""),
        "Contact page variant sets no description meta"
    );

    Ok(())
}

#[test]
fn test_generation_is_idempotent() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let config = test_config(&dir);

    // Act
    let index_path = generate_site(&config)?;
    let first = fs::read_to_string(&index_path)?;
    generate_site(&config)?;
    let second = fs::read_to_string(&index_path)?;

    // Assert
    assert_eq!(first, second, "Regenerating should produce identical pages");

    Ok(())
}

#[test]
fn test_wrapper_forwards_arbitrary_content() {
    // Arrange
    let meta = PageMetadata::titled("テスト");
    let inner = html! { article { p { "自由な本文" } } };
    let inner_string = inner.clone().into_string();

    // Act
    let html = page_wrapper(&meta, "ja", &[], move || inner).into_string();

    // Assert
    assert!(
        html.contains(&inner_string),
        "Wrapper should embed caller content verbatim"
    );
}

#[test]
fn test_config_validate_rejects_file_as_output() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let file_path = dir.path().join("occupied");
    fs::write(&file_path, "not a directory")?;
    let config = Config {
        output: file_path,
        lang: "ja".to_string(),
        no_open: true,
    };

    // Act
    let result = config.validate();

    // Assert
    assert!(
        result.is_err(),
        "Output path occupied by a file should fail validation"
    );

    Ok(())
}
