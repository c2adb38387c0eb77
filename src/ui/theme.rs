//! Visual theme and styling.

use console::Style;

/// mwman's visual theme.
#[derive(Debug, Clone)]
pub struct MwmanTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red).
    pub error: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
}

impl Default for MwmanTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl MwmanTheme {
    /// Create the default mwman theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red(),
            highlight: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            highlight: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a success message.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(msg))
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("Warning: {}", msg)))
    }

    /// Format a fatal error line: bold prefix, red message.
    pub fn format_error(&self, msg: &str) -> String {
        format!(
            "{}{}",
            self.highlight.apply_to("FATAL: "),
            self.error.apply_to(msg)
        )
    }

    /// Format a highlighted informational message.
    pub fn format_highlight(&self, msg: &str) -> String {
        format!("{}", self.highlight.apply_to(msg))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_formats_without_escapes() {
        let theme = MwmanTheme::plain();
        assert_eq!(theme.format_success("done"), "done");
        assert_eq!(theme.format_error("boom"), "FATAL: boom");
        assert_eq!(theme.format_highlight("note"), "note");
    }

    #[test]
    fn warning_carries_prefix() {
        let theme = MwmanTheme::plain();
        assert_eq!(theme.format_warning("careful"), "Warning: careful");
    }
}
