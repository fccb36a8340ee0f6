//! Display functions for command results

use crate::commands::{BankAudit, ScramblePreview, SimulationResult};
use crate::game::{MAX_ROUNDS, SCORE_INCREASE};
use colored::Colorize;

/// Print the result of a scramble preview
pub fn print_scramble_preview(result: &ScramblePreview) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCRAMBLE PREVIEW:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n🔀 Sample rendering: {}",
        result.sample.to_uppercase().bright_white().bold()
    );
    println!("   Samples:           {}", result.samples);
    println!("   Distinct:          {}", result.distinct);

    if result.identical_to_original > 0 {
        println!(
            "   {}",
            format!(
                "{} of {} renderings matched the original: this word cannot be scrambled",
                result.identical_to_original, result.samples
            )
            .yellow()
        );
    } else if result.samples > 0 {
        println!("   {}", "Every rendering differed from the original".green());
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Sessions:".bright_cyan().bold());
    println!("   Played:           {}", result.sessions);
    println!("   Skip chance:      {:.0}%", result.skip_chance * 100.0);
    println!(
        "   Average score:    {}",
        format!("{:.1}", result.average_score)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best:             {}",
        format!("{}", result.max_score).green()
    );
    println!(
        "   Worst:            {}",
        format!("{}", result.min_score).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Sessions/second:  {:.1}", result.sessions_per_second);

    // Score distribution, one row per possible score
    println!("\n📈 {}", "Score Distribution".bright_cyan().bold());
    let max_count = *result.distribution.values().max().unwrap_or(&1);
    for solved in 0..=MAX_ROUNDS {
        let score = solved * SCORE_INCREASE;
        let count = result.distribution.get(&score).unwrap_or(&0);
        if result.sessions > 0 {
            let percentage = *count as f64 / result.sessions as f64 * 100.0;
            let bar_len = if max_count > 0 {
                (*count * 40 / max_count).max(usize::from(*count > 0))
            } else {
                0
            };
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );

            println!("  {score:3} pts: {bar} {count:4} ({percentage:5.1}%)");
        }
    }
}

/// Print the result of a bank audit
pub fn print_bank_audit(result: &BankAudit) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BANK AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n🔍 Checked {} words × {} trials in {:.2}s",
        result.words_checked,
        result.trials_per_word,
        result.duration.as_secs_f64()
    );

    if result.is_clean() {
        println!(
            "\n{}",
            "✅ Every rendering was a differing permutation of its word"
                .green()
                .bold()
        );
    } else {
        println!(
            "\n{}",
            format!("❌ {} words violated the scramble invariants", result.violations.len())
                .red()
                .bold()
        );
        for audit in &result.violations {
            println!(
                "   {}: {} of {} renderings invalid",
                audit.word.to_uppercase().red(),
                audit.violations,
                result.trials_per_word
            );
        }
    }

    if !result.fixed_points.is_empty() {
        println!(
            "\n{}",
            "⚠️  Words with no differing permutation (remove them from the bank):".yellow()
        );
        for word in &result.fixed_points {
            println!("   {}", word.to_uppercase().yellow());
        }
    }
}
