//! The word bank
//!
//! Provides the embedded word bank compiled into the binary, plus loading
//! utilities for custom banks.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::can_scramble;
    use crate::game::MAX_ROUNDS;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn bank_fills_a_session() {
        assert!(WORDS.len() >= MAX_ROUNDS as usize);
    }

    #[test]
    fn words_are_valid_bank_entries() {
        // All entries should be lowercase ASCII, at least 2 letters
        for &word in WORDS {
            assert!(word.len() >= 2, "Word '{word}' is too short");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_all_scrambleable() {
        // No entry may be a fixed point of the scrambler
        for &word in WORDS {
            assert!(can_scramble(word), "Word '{word}' cannot be scrambled");
        }
    }

    #[test]
    fn words_have_no_duplicates() {
        let distinct: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(distinct.len(), WORDS.len());
    }

    #[test]
    fn words_avoid_command_names() {
        // The simple mode reserves these as in-game commands
        for reserved in ["skip", "restart", "quit", "exit"] {
            assert!(!WORDS.contains(&reserved), "'{reserved}' is reserved");
        }
    }

    #[test]
    fn expected_count() {
        assert_eq!(WORDS_COUNT, 139, "Expected 139 bank words");
    }
}
