use std::path::Path;

use tracing::debug;

use super::models::{Deck, Slide};
use crate::{Error, Result};

impl Deck {
    /// Load and validate a deck from a TOML file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Deck(format!("cannot read {}: {}", path.display(), e))
        })?;
        let deck = Self::from_toml(&content)?;
        debug!("loaded deck '{}' with {} slides", deck.title, deck.len());
        Ok(deck)
    }

    /// Parse and validate a deck from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let deck: Deck =
            toml::from_str(content).map_err(|e| Error::Deck(e.to_string()))?;
        deck.validate()?;
        Ok(deck)
    }

    /// Check deck invariants: at least one slide, non-empty titles,
    /// parseable background colors
    pub fn validate(&self) -> Result<()> {
        if self.slides.is_empty() {
            return Err(Error::Deck("deck has no slides".to_string()));
        }
        for (i, slide) in self.slides.iter().enumerate() {
            if slide.title.trim().is_empty() {
                return Err(Error::Deck(format!("slide {} has an empty title", i + 1)));
            }
            if let Some(bg) = &slide.background {
                let hex = bg.trim_start_matches('#');
                if !matches!(hex.len(), 3 | 6) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(Error::Deck(format!(
                        "slide {} has an invalid background color '{}'",
                        i + 1,
                        bg
                    )));
                }
            }
        }
        Ok(())
    }

    /// Built-in deck used when no file is given
    pub fn sample() -> Self {
        let slides = vec![
            Slide {
                title: "Scroll down".to_string(),
                body: vec!["wheel, drag, or j/k".to_string()],
                background: None,
                label: Some("start".to_string()),
            },
            Slide::new("Panels wipe in"),
            Slide {
                title: "Headings reveal".to_string(),
                body: vec!["character by character".to_string()],
                background: None,
                label: None,
            },
            Slide::new("Backgrounds drift"),
            Slide {
                title: "And it wraps around".to_string(),
                body: vec!["scroll past the end to start over".to_string()],
                background: None,
                label: Some("end".to_string()),
            },
        ];
        Self {
            title: "driftdeck".to_string(),
            theme: None,
            slides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_deck_is_valid() {
        let deck = Deck::sample();
        assert!(deck.validate().is_ok());
        assert_eq!(deck.len(), 5);
    }

    #[test]
    fn test_parse_minimal_deck() {
        let deck = Deck::from_toml(
            r##"
            title = "demo"

            [[slides]]
            title = "One"

            [[slides]]
            title = "Two"
            body = ["a line"]
            background = "#282828"
            "##,
        )
        .unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.slides[1].body.len(), 1);
    }

    #[test]
    fn test_empty_deck_rejected() {
        let err = Deck::from_toml("title = \"empty\"\nslides = []").unwrap_err();
        assert!(matches!(err, Error::Deck(_)));
    }

    #[test]
    fn test_blank_title_rejected() {
        let err = Deck::from_toml(
            r#"
            [[slides]]
            title = "  "
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Deck(_)));
    }

    #[test]
    fn test_bad_background_rejected() {
        let err = Deck::from_toml(
            r#"
            [[slides]]
            title = "One"
            background = "red-ish"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Deck(_)));
    }
}
