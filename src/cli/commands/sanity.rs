//! The `check-sanity` command.

use crate::error::MwmanError;
use crate::shell;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// External tools mwman shells out to.
const REQUIRED_TOOLS: [&str; 3] = ["npm", "php", "composer"];

/// The check-sanity command implementation.
pub struct CheckSanityCommand;

impl CheckSanityCommand {
    /// Create a new check-sanity command.
    pub fn new() -> Self {
        Self
    }
}

impl Default for CheckSanityCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for CheckSanityCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        for tool in REQUIRED_TOOLS {
            ui.message(&format!("Checking for {}...", tool));

            if !shell::execute_check(&format!("{} -v", tool), None) {
                return Err(MwmanError::MissingTool {
                    tool: tool.to_string(),
                });
            }
        }

        ui.success("All OK.");
        Ok(CommandResult::success())
    }
}
