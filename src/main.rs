use anyhow::{Context, Result};
use chintai_site::{Config, generate_site};

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    let index_path = generate_site(&config)?;

    println!("Site generated at {}", config.output.display());

    if !config.no_open {
        open::that(&index_path)
            .with_context(|| format!("Failed to open {}", index_path.display()))?;
    }

    Ok(())
}
