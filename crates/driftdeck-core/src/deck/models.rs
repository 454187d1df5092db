use serde::{Deserialize, Serialize};

/// A single full-screen section of the show
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    /// Heading revealed character by character during the transition
    pub title: String,
    /// Body lines rendered under the heading
    #[serde(default)]
    pub body: Vec<String>,
    /// Background color as a hex string; cycles through the theme palette when absent
    #[serde(default)]
    pub background: Option<String>,
    /// Short label for the navigation bar; slide number when absent
    #[serde(default)]
    pub label: Option<String>,
}

impl Slide {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Vec::new(),
            background: None,
            label: None,
        }
    }

    /// Label shown in the navigation bar (1-based slide number fallback)
    pub fn nav_label(&self, index: usize) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| (index + 1).to_string())
    }
}

/// A loaded slide deck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Show title, used for the terminal title
    #[serde(default)]
    pub title: String,
    /// Theme name override for this deck
    #[serde(default)]
    pub theme: Option<String>,
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Number of slides
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_label_fallback() {
        let slide = Slide::new("Intro");
        assert_eq!(slide.nav_label(0), "1");
        assert_eq!(slide.nav_label(3), "4");

        let mut labeled = Slide::new("Intro");
        labeled.label = Some("intro".to_string());
        assert_eq!(labeled.nav_label(0), "intro");
    }
}
