//! Formatting utilities for terminal output

/// Render a word with spaced uppercase letters
///
/// Assistive readers announce the result letter by letter instead of trying
/// to pronounce the scramble as a word. The underlying value is untouched;
/// this is a presentation-only rendering.
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    let mut result = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c.to_ascii_uppercase());
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render session progress as a bar over the round count
#[must_use]
pub fn round_bar(round: u32, max_rounds: u32, width: usize) -> String {
    create_progress_bar(f64::from(round), f64::from(max_rounds), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_letters_uppercases_and_spaces() {
        assert_eq!(spaced_letters("tilsne"), "T I L S N E");
    }

    #[test]
    fn spaced_letters_single_char() {
        assert_eq!(spaced_letters("a"), "A");
    }

    #[test]
    fn spaced_letters_empty() {
        assert_eq!(spaced_letters(""), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn round_bar_tracks_rounds() {
        assert_eq!(round_bar(1, 10, 10), "█░░░░░░░░░");
        assert_eq!(round_bar(10, 10, 10), "██████████");
    }
}
