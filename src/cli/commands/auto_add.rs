//! The `auto-add` command.

use crate::bootstrap;
use crate::cli::args::AutoAddArgs;
use crate::installation::Installation;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The auto-add command implementation.
pub struct AutoAddCommand {
    args: AutoAddArgs,
}

impl AutoAddCommand {
    /// Create a new auto-add command.
    pub fn new(args: AutoAddArgs) -> Self {
        Self { args }
    }
}

impl Command for AutoAddCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let installation = Installation::open(&self.args.destination)?;
        bootstrap::auto_add(&installation, self.args.yes, ui)?;
        Ok(CommandResult::success())
    }
}
