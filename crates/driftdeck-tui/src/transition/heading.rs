//! Per-character heading segmentation
//!
//! Each slide title is split once at startup into grapheme clusters, the
//! animatable units of the heading reveal. The cache is never rebuilt.

use rand::seq::SliceRandom;
use rand::Rng;
use unicode_segmentation::UnicodeSegmentation;

/// Immutable per-slide collection of heading graphemes
#[derive(Debug, Clone)]
pub struct SplitHeading {
    graphemes: Vec<String>,
}

impl SplitHeading {
    pub fn new(title: &str) -> Self {
        Self {
            graphemes: title.graphemes(true).map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.graphemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphemes.is_empty()
    }

    pub fn graphemes(&self) -> &[String] {
        &self.graphemes
    }

    /// Randomized reveal order: a shuffled permutation of grapheme indices
    pub fn shuffled_order<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.graphemes.len()).collect();
        order.shuffle(rng);
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_grapheme_split() {
        let heading = SplitHeading::new("Scroll down");
        assert_eq!(heading.len(), 11);
        assert_eq!(heading.graphemes()[0], "S");
        assert_eq!(heading.graphemes()[6], " ");
    }

    #[test]
    fn test_combining_marks_stay_together() {
        let heading = SplitHeading::new("año");
        assert_eq!(heading.len(), 3);
    }

    #[test]
    fn test_shuffled_order_is_permutation() {
        let heading = SplitHeading::new("Backgrounds drift");
        let mut rng = StdRng::seed_from_u64(7);
        let mut order = heading.shuffled_order(&mut rng);
        order.sort_unstable();
        assert_eq!(order, (0..heading.len()).collect::<Vec<_>>());
    }
}
