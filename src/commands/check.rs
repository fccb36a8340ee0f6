//! Bank audit command
//!
//! Verifies the scramble invariants across the whole bank: every rendering
//! must be a character permutation of its word, and must differ from the
//! word whenever a differing permutation exists.

use crate::core::{Word, can_scramble, scramble};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Audit result for a single bank word
#[derive(Debug, Clone)]
pub struct WordAudit {
    pub word: String,
    pub distinct_renderings: usize,
    pub violations: usize,
    pub fixed_point: bool,
}

/// Audit result for the whole bank
pub struct BankAudit {
    pub words_checked: usize,
    pub trials_per_word: usize,
    pub violations: Vec<WordAudit>,
    pub fixed_points: Vec<String>,
    pub duration: Duration,
}

impl BankAudit {
    /// True when every rendering satisfied the invariants
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Run `trials` scramble trials for every word in `bank`
///
/// Words are audited in parallel; the returned audits are in bank order.
#[must_use]
pub fn run_bank_audit(bank: &[Word], trials: usize) -> BankAudit {
    let start = Instant::now();

    let pb = ProgressBar::new(bank.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let audits: Vec<WordAudit> = bank
        .par_iter()
        .map(|word| {
            let audit = audit_word(word, trials);
            pb.inc(1);
            audit
        })
        .collect();

    pb.finish_and_clear();

    let violations = audits.iter().filter(|a| a.violations > 0).cloned().collect();
    let fixed_points = audits
        .iter()
        .filter(|a| a.fixed_point)
        .map(|a| a.word.clone())
        .collect();

    BankAudit {
        words_checked: bank.len(),
        trials_per_word: trials,
        violations,
        fixed_points,
        duration: start.elapsed(),
    }
}

fn audit_word(word: &Word, trials: usize) -> WordAudit {
    let mut rng = rand::rng();
    let scrambleable = can_scramble(word.text());

    let mut renderings: FxHashSet<String> = FxHashSet::default();
    let mut violations = 0;

    for _ in 0..trials {
        let rendering = scramble(word.text(), &mut rng);
        let permutation = is_permutation(word.text(), &rendering);
        if !permutation || (scrambleable && rendering == word.text()) {
            violations += 1;
        }
        renderings.insert(rendering);
    }

    WordAudit {
        word: word.text().to_string(),
        distinct_renderings: renderings.len(),
        violations,
        fixed_point: !scrambleable,
    }
}

fn is_permutation(a: &str, b: &str) -> bool {
    let mut a: Vec<char> = a.chars().collect();
    let mut b: Vec<char> = b.chars().collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank::WORDS;
    use crate::wordbank::loader::words_from_slice;

    #[test]
    fn embedded_bank_audit_is_clean() {
        let bank = words_from_slice(WORDS);
        let audit = run_bank_audit(&bank, 50);

        assert!(audit.is_clean());
        assert!(audit.fixed_points.is_empty());
        assert_eq!(audit.words_checked, bank.len());
        assert_eq!(audit.trials_per_word, 50);
    }

    #[test]
    fn audit_reports_fixed_point_words() {
        let bank = words_from_slice(&["animal", "aa"]);
        let audit = run_bank_audit(&bank, 10);

        assert!(audit.is_clean());
        assert_eq!(audit.fixed_points, vec!["aa".to_string()]);
    }

    #[test]
    fn audit_counts_distinct_renderings() {
        // "ox" has exactly one differing permutation
        let word = Word::new("ox").unwrap();
        let audit = audit_word(&word, 10);

        assert_eq!(audit.distinct_renderings, 1);
        assert_eq!(audit.violations, 0);
        assert!(!audit.fixed_point);
    }

    #[test]
    fn audit_with_empty_bank() {
        let audit = run_bank_audit(&[], 10);

        assert_eq!(audit.words_checked, 0);
        assert!(audit.is_clean());
        assert!(audit.fixed_points.is_empty());
    }

    #[test]
    fn is_permutation_checks_character_counts() {
        assert!(is_permutation("listen", "silent"));
        assert!(is_permutation("", ""));
        assert!(!is_permutation("listen", "listens"));
        assert!(!is_permutation("aab", "abb"));
    }
}
