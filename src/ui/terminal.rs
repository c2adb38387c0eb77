//! Interactive terminal UI.

use std::io::Write;

use console::Term;
use dialoguer::Confirm;

use crate::error::{MwmanError, Result};

use super::{should_use_colors, MwmanTheme, OutputMode, UserInterface};

/// Convert dialoguer errors to MwmanError.
fn map_dialoguer_err(e: dialoguer::Error) -> MwmanError {
    MwmanError::Io(e.into())
}

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: MwmanTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            MwmanTheme::new()
        } else {
            MwmanTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn highlight(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_highlight(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact_on(&self.term)
            .map_err(map_dialoguer_err)
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}
