//! Scramble preview command
//!
//! Samples scrambled renderings of a single word to show what players
//! would be asked to unscramble.

use crate::core::{Word, WordError, scramble};
use rustc_hash::FxHashSet;

/// Result of sampling scrambled renderings of one word
pub struct ScramblePreview {
    pub word: String,
    pub sample: String,
    pub samples: usize,
    pub distinct: usize,
    pub identical_to_original: usize,
}

/// Scramble `word` `samples` times and summarize the renderings
///
/// # Errors
/// Returns `WordError` if `word` is not a valid bank word.
pub fn preview_scrambles(word: &str, samples: usize) -> Result<ScramblePreview, WordError> {
    let word = Word::new(word)?;
    let mut rng = rand::rng();

    let mut renderings: FxHashSet<String> = FxHashSet::default();
    let mut identical_to_original = 0;
    let mut sample = String::new();

    for _ in 0..samples {
        let rendering = scramble(word.text(), &mut rng);
        if rendering == word.text() {
            identical_to_original += 1;
        }
        if sample.is_empty() {
            sample.clone_from(&rendering);
        }
        renderings.insert(rendering);
    }

    Ok(ScramblePreview {
        word: word.text().to_string(),
        sample,
        samples,
        distinct: renderings.len(),
        identical_to_original,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_samples_differing_permutations() {
        let result = preview_scrambles("listen", 100).unwrap();

        assert_eq!(result.word, "listen");
        assert_eq!(result.samples, 100);
        assert!(result.distinct >= 2);
        assert_eq!(result.identical_to_original, 0);
        assert_ne!(result.sample, "listen");
    }

    #[test]
    fn preview_normalizes_case() {
        let result = preview_scrambles("LISTEN", 10).unwrap();
        assert_eq!(result.word, "listen");
    }

    #[test]
    fn preview_reports_unscrambleable_words() {
        // "aa" has no differing permutation; every rendering is the original
        let result = preview_scrambles("aa", 25).unwrap();

        assert_eq!(result.distinct, 1);
        assert_eq!(result.identical_to_original, 25);
        assert_eq!(result.sample, "aa");
    }

    #[test]
    fn preview_rejects_invalid_words() {
        assert!(preview_scrambles("a", 10).is_err());
        assert!(preview_scrambles("w0rd", 10).is_err());
    }

    #[test]
    fn preview_with_zero_samples() {
        let result = preview_scrambles("listen", 0).unwrap();

        assert_eq!(result.distinct, 0);
        assert_eq!(result.identical_to_original, 0);
        assert!(result.sample.is_empty());
    }
}
