//! Unscramble
//!
//! A terminal word-unscrambling game: each round shows a shuffled word, and
//! guessing it scores points across a ten-round session.
//!
//! # Quick Start
//!
//! ```rust
//! use unscramble::game::RoundEngine;
//! use unscramble::wordbank::{WORDS, loader::words_from_slice};
//!
//! let bank = words_from_slice(WORDS);
//! let mut engine = RoundEngine::new(&bank).unwrap();
//!
//! // The first word is on screen already
//! assert_eq!(engine.round(), 1);
//! assert_ne!(engine.scrambled_word(), engine.answer());
//! ```

// Core domain types
pub mod core;

// Round engine and observables
pub mod game;

// Word bank
pub mod wordbank;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
