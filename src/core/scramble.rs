//! Scrambled renderings
//!
//! Produces a uniformly random character permutation of a word, guaranteed
//! to differ from the original string whenever a differing permutation exists.

use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffle attempts before falling back to a deterministic swap.
const MAX_SHUFFLE_ATTEMPTS: usize = 32;

/// Scramble a word into a random permutation that differs from the input
///
/// Uses rejection sampling: reshuffle until the permutation differs from the
/// original. The attempt count is bounded; if every shuffle lands on the
/// original ordering, the first adjacent differing pair is swapped instead.
/// Words with fewer than two distinct characters have no differing
/// permutation and are returned unchanged.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use unscramble::core::scramble;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let scrambled = scramble("listen", &mut rng);
/// assert_ne!(scrambled, "listen");
/// ```
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let original: Vec<char> = word.chars().collect();
    if !can_scramble(word) {
        return word.to_string();
    }

    let mut letters = original.clone();
    for _ in 0..MAX_SHUFFLE_ATTEMPTS {
        letters.shuffle(rng);
        if letters != original {
            return letters.into_iter().collect();
        }
    }

    // All attempts reproduced the original ordering; swap the first
    // adjacent differing pair so the result still differs.
    let mut letters = original;
    for i in 0..letters.len() - 1 {
        if letters[i] != letters[i + 1] {
            letters.swap(i, i + 1);
            break;
        }
    }
    letters.into_iter().collect()
}

/// Whether any permutation of `word` differs from `word` itself
///
/// True iff the word contains at least two distinct characters.
#[must_use]
pub fn can_scramble(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => chars.any(|c| c != first),
        None => false,
    }
}
