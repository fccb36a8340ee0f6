//! Unscramble - CLI
//!
//! Terminal word-unscrambling game with TUI and CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use unscramble::{
    commands::{preview_scrambles, run_bank_audit, run_simple, run_simulation},
    core::Word,
    output::{print_bank_audit, print_scramble_preview, print_simulation_result},
    wordbank::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "unscramble",
    about = "Terminal word-unscrambling game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain CLI mode without the TUI
    Simple,

    /// Preview scrambled renderings of a word
    Scramble {
        /// Word to scramble
        word: String,

        /// Number of renderings to sample
        #[arg(short = 'n', long, default_value = "100")]
        samples: usize,
    },

    /// Auto-play sessions and report score statistics
    Simulate {
        /// Number of sessions to play
        #[arg(short = 'n', long, default_value = "1000")]
        sessions: usize,

        /// Probability of skipping a word instead of answering it
        #[arg(short = 's', long, default_value = "0.3")]
        skip_chance: f64,
    },

    /// Audit the word bank against the scramble invariants
    Check {
        /// Scramble trials per word
        #[arg(short = 't', long, default_value = "200")]
        trials: usize,
    },
}

/// Load the word bank based on the -w flag
///
/// - "embedded": the bank compiled into the binary
/// - "<path>": load a custom bank from file
fn load_wordbank(mode: &str) -> Result<Vec<Word>> {
    match mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let bank = load_wordbank(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&bank),
        Commands::Simple => run_simple(&bank).map_err(|e| anyhow::anyhow!(e)),
        Commands::Scramble { word, samples } => {
            let result = preview_scrambles(&word, samples)?;
            print_scramble_preview(&result);
            Ok(())
        }
        Commands::Simulate {
            sessions,
            skip_chance,
        } => {
            let result = run_simulation(&bank, sessions, skip_chance)?;
            print_simulation_result(&result);
            Ok(())
        }
        Commands::Check { trials } => {
            let result = run_bank_audit(&bank, trials);
            print_bank_audit(&result);
            Ok(())
        }
    }
}

fn run_play_command(bank: &[Word]) -> Result<()> {
    use unscramble::interactive::{App, run_tui};

    let app = App::new(bank)?;
    run_tui(app)
}
