//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Confirmation answers can be queued
//! ahead of time.
//!
//! # Example
//!
//! ```
//! use mwman::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_confirm(true);
//!
//! // Use ui in code under test...
//! ui.message("Installing Cite...");
//! ui.success("Cite installed successfully.");
//!
//! // Assert on captured interactions
//! assert!(ui.messages()[0].contains("Cite"));
//! assert_eq!(ui.successes().len(), 1);
//! ```

use std::collections::VecDeque;

use crate::error::Result;

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    highlights: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    confirms_shown: Vec<String>,
    confirm_answers: VecDeque<bool>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Queue an answer for the next confirmation prompt.
    ///
    /// When the queue is exhausted, `confirm` falls back to the prompt's
    /// default answer.
    pub fn queue_confirm(&mut self, answer: bool) {
        self.confirm_answers.push_back(answer);
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured highlighted messages.
    pub fn highlights(&self) -> &[String] {
        &self.highlights
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get the questions shown by `confirm`.
    pub fn confirms_shown(&self) -> &[String] {
        &self.confirms_shown
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn highlight(&mut self, msg: &str) {
        self.highlights.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        self.confirms_shown.push(question.to_string());
        Ok(self.confirm_answers.pop_front().unwrap_or(default))
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_all_message_kinds() {
        let mut ui = MockUI::new();
        ui.message("m");
        ui.highlight("h");
        ui.success("s");
        ui.warning("w");
        ui.error("e");

        assert_eq!(ui.messages(), ["m"]);
        assert_eq!(ui.highlights(), ["h"]);
        assert_eq!(ui.successes(), ["s"]);
        assert_eq!(ui.warnings(), ["w"]);
        assert_eq!(ui.errors(), ["e"]);
    }

    #[test]
    fn queued_confirm_answers_in_order() {
        let mut ui = MockUI::new();
        ui.queue_confirm(true);
        ui.queue_confirm(false);

        assert!(ui.confirm("first?", false).unwrap());
        assert!(!ui.confirm("second?", true).unwrap());
        // Queue exhausted, falls back to the default.
        assert!(ui.confirm("third?", true).unwrap());

        assert_eq!(ui.confirms_shown().len(), 3);
    }
}
