//! Game state
//!
//! The round engine that owns a session, and the observable cells it
//! publishes score, round count, and the scrambled word through.

mod engine;
mod observe;

pub use engine::{EngineError, MAX_ROUNDS, RoundEngine, SCORE_INCREASE};
pub use observe::Observable;
