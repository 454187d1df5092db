use std::path::Path;

use anyhow::{anyhow, Result};

use driftdeck_core::Deck;

pub fn run(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(anyhow!("{} already exists", path.display()));
    }

    let deck = Deck::sample();
    let content = toml::to_string_pretty(&deck)?;
    std::fs::write(path, content)?;

    println!("Wrote sample deck to {}", path.display());
    println!("Present it with: driftdeck run {}", path.display());
    Ok(())
}
