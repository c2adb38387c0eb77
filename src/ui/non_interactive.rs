//! Non-interactive UI for piped/headless environments.

use crate::error::Result;

use super::{OutputMode, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Confirmation prompts are never shown; they resolve to their default
/// answer, so destructive commands require an explicit `--yes`.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn highlight(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("Warning: {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("FATAL: {}", msg);
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        let answer = if default { "yes" } else { "no" };
        if self.mode.shows_status() {
            println!("{} -> assuming '{}' (non-interactive)", question, answer);
        }
        Ok(default)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_resolves_to_default() {
        let mut ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert!(!ui.confirm("Remove everything?", false).unwrap());
        assert!(ui.confirm("Continue?", true).unwrap());
    }

    #[test]
    fn never_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }
}
