//! The round engine
//!
//! Owns all game state for one session: word selection, scrambling, guess
//! verification, and round/score progression. A presentation layer reads the
//! published observables and drives the engine through `submit_guess`,
//! `advance`, and `restart`.

use crate::core::{Word, scramble};
use crate::game::Observable;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// Number of words presented per session
pub const MAX_ROUNDS: u32 = 10;

/// Points awarded for each correct answer
pub const SCORE_INCREASE: u32 = 20;

/// Error type for engine construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The bank cannot fill a session without repeating a word.
    BankTooSmall { distinct: usize },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BankTooSmall { distinct } => write!(
                f,
                "Word bank has {distinct} distinct words, need at least {MAX_ROUNDS}"
            ),
        }
    }
}

impl std::error::Error for EngineError {}

/// Round engine for one game session
///
/// Two logical states: in-round while fewer than `MAX_ROUNDS` words have
/// been presented, finished once the count reaches `MAX_ROUNDS`. `advance`
/// moves between rounds and reports which state applies; `restart` is the
/// only way out of the finished state. Guess submission never changes state
/// beyond the score.
pub struct RoundEngine<'a> {
    bank: &'a [Word],
    used_words: FxHashSet<String>,
    current: usize,
    score: Observable<u32>,
    round: Observable<u32>,
    scrambled: Observable<String>,
}

impl<'a> RoundEngine<'a> {
    /// Create an engine over `bank` and select the first word
    ///
    /// The `round` observable is 1 once construction returns.
    ///
    /// # Errors
    /// Returns `EngineError::BankTooSmall` if the bank holds fewer than
    /// `MAX_ROUNDS` distinct words. With at least that many, the
    /// repeat-avoiding redraw in word selection always finds a fresh word.
    pub fn new(bank: &'a [Word]) -> Result<Self, EngineError> {
        let distinct = bank.iter().map(Word::text).collect::<FxHashSet<_>>().len();
        if distinct < MAX_ROUNDS as usize {
            return Err(EngineError::BankTooSmall { distinct });
        }

        let mut engine = Self {
            bank,
            used_words: FxHashSet::default(),
            current: 0,
            score: Observable::new(0),
            round: Observable::new(0),
            scrambled: Observable::new(String::new()),
        };
        engine.select_next_word();
        Ok(engine)
    }

    /// Pick a fresh word, publish its scrambled rendering, and count the round
    ///
    /// Redraws uniformly until the pick is not in `used_words`. Callers
    /// guarantee fewer than `MAX_ROUNDS` words are used when this runs, so a
    /// fresh word always exists.
    fn select_next_word(&mut self) {
        let mut rng = rand::rng();
        loop {
            let candidate = rng.random_range(0..self.bank.len());
            if !self.used_words.contains(self.bank[candidate].text()) {
                self.current = candidate;
                break;
            }
        }

        let word = self.bank[self.current].text();
        self.used_words.insert(word.to_string());
        self.scrambled.set(scramble(word, &mut rng));

        let round = *self.round.get() + 1;
        self.round.set(round);
    }

    /// Check a guess against the current word, scoring on success
    ///
    /// Comparison ignores ASCII case and uses the input as-is. Returns true
    /// and adds `SCORE_INCREASE` to the score on a match; a wrong guess
    /// returns false and changes nothing. Never advances the round.
    pub fn submit_guess(&mut self, guess: &str) -> bool {
        if self.bank[self.current].matches_guess(guess) {
            let score = *self.score.get() + SCORE_INCREASE;
            self.score.set(score);
            true
        } else {
            false
        }
    }

    /// Advance to the next word if any rounds remain
    ///
    /// Returns true and presents a fresh word while fewer than `MAX_ROUNDS`
    /// words have been shown; returns false with no state change once the
    /// session is complete. Callers score via `submit_guess` before
    /// advancing; skipping is just an advance without a submission.
    pub fn advance(&mut self) -> bool {
        if *self.round.get() < MAX_ROUNDS {
            self.select_next_word();
            true
        } else {
            false
        }
    }

    /// Reset the session in place and select a fresh first word
    ///
    /// Score and round return to their initial values and previously used
    /// words become eligible again. External handles to the engine stay
    /// valid.
    pub fn restart(&mut self) {
        self.score.set(0);
        self.round.set(0);
        self.used_words.clear();
        self.select_next_word();
    }

    /// Current score
    #[must_use]
    pub fn score(&self) -> u32 {
        *self.score.get()
    }

    /// Words presented so far this session, including the current one
    #[must_use]
    pub fn round(&self) -> u32 {
        *self.round.get()
    }

    /// Scrambled rendering of the current word
    #[must_use]
    pub fn scrambled_word(&self) -> &str {
        self.scrambled.get()
    }

    /// True once the final word of the session has been presented
    ///
    /// `advance` returns false from here until `restart`.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        *self.round.get() >= MAX_ROUNDS
    }

    /// The secret answer for the current round
    ///
    /// A deliberate reveal for skip messages, summaries, and simulation;
    /// the observable surface never carries it.
    #[must_use]
    pub fn answer(&self) -> &str {
        self.bank[self.current].text()
    }

    /// Observe score changes
    pub fn watch_score<F: Fn(&u32) + 'static>(&mut self, callback: F) {
        self.score.subscribe(callback);
    }

    /// Observe round-count changes
    pub fn watch_round<F: Fn(&u32) + 'static>(&mut self, callback: F) {
        self.round.subscribe(callback);
    }

    /// Observe scrambled-word changes
    pub fn watch_scrambled<F: Fn(&String) + 'static>(&mut self, callback: F) {
        self.scrambled.subscribe(callback);
    }
}
