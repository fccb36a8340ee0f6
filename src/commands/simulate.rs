//! Session simulation command
//!
//! Auto-plays full sessions against the bank to profile score outcomes.

use crate::core::Word;
use crate::game::{EngineError, RoundEngine};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a simulation run
pub struct SimulationResult {
    pub sessions: usize,
    pub skip_chance: f64,
    pub average_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub distribution: HashMap<u32, usize>,
    pub duration: Duration,
    pub sessions_per_second: f64,
}

/// Auto-play `sessions` full sessions over `bank`
///
/// Each round the simulated player answers correctly, except with
/// probability `skip_chance` (clamped to `[0, 1]`) the word is skipped
/// unanswered. Sessions drive the same submit-then-advance flow a real
/// player does.
///
/// # Errors
/// Returns `EngineError` if the bank cannot fill a session.
pub fn run_simulation(
    bank: &[Word],
    sessions: usize,
    skip_chance: f64,
) -> Result<SimulationResult, EngineError> {
    let skip_chance = skip_chance.clamp(0.0, 1.0);
    let start = Instant::now();
    let mut rng = rand::rng();

    let mut distribution: HashMap<u32, usize> = HashMap::new();
    let mut total: u64 = 0;
    let mut min_score = u32::MAX;
    let mut max_score = 0;

    let mut engine = RoundEngine::new(bank)?;
    for session in 0..sessions {
        if session > 0 {
            engine.restart();
        }

        loop {
            if !rng.random_bool(skip_chance) {
                let answer = engine.answer().to_string();
                engine.submit_guess(&answer);
            }
            if !engine.advance() {
                break;
            }
        }

        let score = engine.score();
        total += u64::from(score);
        min_score = min_score.min(score);
        max_score = max_score.max(score);
        *distribution.entry(score).or_insert(0) += 1;
    }

    if sessions == 0 {
        min_score = 0;
    }

    let duration = start.elapsed();

    Ok(SimulationResult {
        sessions,
        skip_chance,
        average_score: if sessions > 0 {
            total as f64 / sessions as f64
        } else {
            0.0
        },
        min_score,
        max_score,
        distribution,
        duration,
        sessions_per_second: sessions as f64 / duration.as_secs_f64(),
    })
}
