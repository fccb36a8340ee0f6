//! TUI application state and logic

use crate::core::Word;
use crate::game::{EngineError, RoundEngine};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub engine: RoundEngine<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// A round is on screen and the player is typing a guess.
    Guessing,
    /// The session is over; the summary is on screen.
    Summary,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Running totals across sessions in this process
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub sessions_completed: usize,
    pub best_score: u32,
    pub words_solved: usize,
    pub words_skipped: usize,
}

impl<'a> App<'a> {
    /// Create the app with a fresh session over `bank`
    ///
    /// # Errors
    /// Returns `EngineError` if the bank cannot fill a session.
    pub fn new(bank: &'a [Word]) -> Result<Self, EngineError> {
        let engine = RoundEngine::new(bank)?;

        Ok(Self {
            engine,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Unscramble the word and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Tab skips a word; Esc quits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            input_mode: InputMode::Guessing,
            stats: Statistics::default(),
            should_quit: false,
        })
    }

    /// Submit the typed guess
    ///
    /// Correct guesses score and move to the next round (or the summary);
    /// wrong guesses leave the round on screen with the buffer intact for
    /// editing.
    pub fn submit(&mut self) {
        if self.input_buffer.is_empty() {
            return;
        }

        let guess = self.input_buffer.clone();
        if self.engine.submit_guess(&guess) {
            self.stats.words_solved += 1;
            self.input_buffer.clear();
            self.add_message("Correct!", MessageStyle::Success);
            self.finish_round();
        } else {
            self.add_message("Try again!", MessageStyle::Error);
        }
    }

    /// Skip the current word, revealing the answer
    pub fn skip(&mut self) {
        self.stats.words_skipped += 1;
        let answer = self.engine.answer().to_uppercase();
        self.add_message(
            &format!("The word was {answer}"),
            MessageStyle::Info,
        );
        self.input_buffer.clear();
        self.finish_round();
    }

    /// Start a fresh session from the summary screen
    pub fn play_again(&mut self) {
        self.engine.restart();
        self.input_mode = InputMode::Guessing;
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    fn finish_round(&mut self) {
        if !self.engine.advance() {
            self.stats.sessions_completed += 1;
            self.stats.best_score = self.stats.best_score.max(self.engine.score());
            self.input_mode = InputMode::Summary;
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Summary => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('p') => {
                        app.play_again();
                    }
                    _ => {
                        // In the summary, ignore other keys
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Tab => {
                        app.skip();
                    }
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                        app.input_buffer.push(c.to_ascii_lowercase());
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{MAX_ROUNDS, SCORE_INCREASE};

    fn bank() -> Vec<Word> {
        [
            "animal", "balloon", "basket", "camera", "candle", "dragon", "elephant", "feather",
            "garden", "harbor", "island", "jacket",
        ]
        .iter()
        .map(|w| Word::new(*w).unwrap())
        .collect()
    }

    #[test]
    fn app_starts_in_guessing_mode() {
        let bank = bank();
        let app = App::new(&bank).unwrap();

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.engine.round(), 1);
        assert!(!app.should_quit);
    }

    #[test]
    fn submit_wrong_guess_keeps_buffer_for_editing() {
        let bank = bank();
        let mut app = App::new(&bank).unwrap();
        app.input_buffer = "wrongword".to_string();

        app.submit();

        assert_eq!(app.input_buffer, "wrongword");
        assert_eq!(app.engine.round(), 1);
        assert_eq!(app.engine.score(), 0);
    }

    #[test]
    fn submit_correct_guess_scores_and_advances() {
        let bank = bank();
        let mut app = App::new(&bank).unwrap();
        app.input_buffer = app.engine.answer().to_string();

        app.submit();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.engine.round(), 2);
        assert_eq!(app.engine.score(), SCORE_INCREASE);
        assert_eq!(app.stats.words_solved, 1);
    }

    #[test]
    fn skip_advances_without_scoring() {
        let bank = bank();
        let mut app = App::new(&bank).unwrap();

        app.skip();

        assert_eq!(app.engine.round(), 2);
        assert_eq!(app.engine.score(), 0);
        assert_eq!(app.stats.words_skipped, 1);
    }

    #[test]
    fn session_end_switches_to_summary() {
        let bank = bank();
        let mut app = App::new(&bank).unwrap();

        for _ in 0..MAX_ROUNDS {
            app.skip();
        }

        assert_eq!(app.input_mode, InputMode::Summary);
        assert_eq!(app.stats.sessions_completed, 1);
    }

    #[test]
    fn play_again_resets_the_session() {
        let bank = bank();
        let mut app = App::new(&bank).unwrap();
        for _ in 0..MAX_ROUNDS {
            app.skip();
        }

        app.play_again();

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.engine.round(), 1);
        assert_eq!(app.engine.score(), 0);
        // Cross-session stats survive the restart
        assert_eq!(app.stats.words_skipped, MAX_ROUNDS as usize);
    }

    #[test]
    fn best_score_tracks_across_sessions() {
        let bank = bank();
        let mut app = App::new(&bank).unwrap();

        // Solve every word of the first session
        for _ in 0..MAX_ROUNDS {
            app.input_buffer = app.engine.answer().to_string();
            app.submit();
        }
        assert_eq!(app.stats.best_score, MAX_ROUNDS * SCORE_INCREASE);

        // A skipped-out second session must not lower it
        app.play_again();
        for _ in 0..MAX_ROUNDS {
            app.skip();
        }
        assert_eq!(app.stats.best_score, MAX_ROUNDS * SCORE_INCREASE);
    }

    #[test]
    fn message_log_is_bounded() {
        let bank = bank();
        let mut app = App::new(&bank).unwrap();

        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }

        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }
}
