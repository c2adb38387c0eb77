//! The `install-mediawiki` command.

use crate::bootstrap;
use crate::cli::args::InstallMediawikiArgs;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install-mediawiki command implementation.
pub struct InstallMediawikiCommand {
    args: InstallMediawikiArgs,
}

impl InstallMediawikiCommand {
    /// Create a new install-mediawiki command.
    pub fn new(args: InstallMediawikiArgs) -> Self {
        Self { args }
    }
}

impl Command for InstallMediawikiCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        bootstrap::install_mediawiki(&self.args.version, &self.args.destination, ui)?;
        Ok(CommandResult::success())
    }
}
