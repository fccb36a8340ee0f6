//! Simple interactive CLI mode
//!
//! Text-based game session without the TUI.

use crate::core::Word;
use crate::game::{MAX_ROUNDS, RoundEngine};
use crate::output::formatters::spaced_letters;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the bank cannot fill a session or if there's an I/O
/// error reading user input.
pub fn run_simple(bank: &[Word]) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Unscramble - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Unscramble each word and press Enter. Wrong guesses keep the");
    println!("same word on screen, so keep trying or move on.\n");
    println!("Commands: 'skip' to pass a word, 'restart' for a new game, 'quit' to exit\n");

    let mut engine = RoundEngine::new(bank).map_err(|e| e.to_string())?;
    engine.watch_score(|score| {
        println!("{}", format!("✨ Score: {score}").bright_yellow());
    });

    loop {
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Word {} of {MAX_ROUNDS}  |  score {}",
            engine.round(),
            engine.score()
        );
        println!(
            "\n   {}\n",
            spaced_letters(engine.scrambled_word()).bold().cyan()
        );

        let input = get_user_input("Your guess ('skip', 'restart', 'quit')")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "restart" => {
                engine.restart();
                println!("\n🔄 New game started!\n");
            }
            "skip" => {
                println!(
                    "\nThe word was {}\n",
                    engine.answer().to_uppercase().bright_white().bold()
                );
                if !engine.advance() && !show_summary(&mut engine)? {
                    return Ok(());
                }
            }
            guess => {
                if engine.submit_guess(guess) {
                    println!("\n{}", "✅ Correct!".green().bold());
                    if !engine.advance() && !show_summary(&mut engine)? {
                        return Ok(());
                    }
                } else {
                    println!("\n{}", "❌ Try again!".red());
                }
            }
        }
    }
}

/// Print the final-score banner and offer another session
///
/// Returns true if the engine was restarted for another game.
fn show_summary(engine: &mut RoundEngine) -> Result<bool, String> {
    let score = engine.score();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "        🎉 ✨  C O N G R A T U L A T I O N S !  ✨ 🎉        "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let solved = score / crate::game::SCORE_INCREASE;
    let verdict = match solved {
        10 => "Perfect game!",
        7..=9 => "Great unscrambling!",
        4..=6 => "Nice work!",
        1..=3 => "Warming up!",
        _ => "The words won this time!",
    };

    println!("\n  {}", verdict.bright_yellow().bold());
    println!(
        "  You scored {} points ({solved} of {MAX_ROUNDS} words)",
        score.to_string().bright_cyan().bold()
    );
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();

    match get_user_input("Play again? (yes/no)")?
        .to_lowercase()
        .as_str()
    {
        "yes" | "y" => {
            engine.restart();
            println!("\n🔄 New game started!\n");
            Ok(true)
        }
        _ => {
            println!("\n👋 Thanks for playing!\n");
            Ok(false)
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
