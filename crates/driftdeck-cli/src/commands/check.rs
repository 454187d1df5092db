use std::path::Path;

use anyhow::Result;

use driftdeck_core::Deck;

pub fn run(path: &Path) -> Result<()> {
    let deck = Deck::from_path(path)?;
    println!(
        "{}: ok ({} slides{})",
        path.display(),
        deck.len(),
        deck.theme
            .as_deref()
            .map(|t| format!(", theme {}", t))
            .unwrap_or_default()
    );
    Ok(())
}
