//! The `maintenance` command.

use crate::cli::args::MaintenanceArgs;
use crate::engine::hooks;
use crate::installation::Installation;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The maintenance command implementation.
pub struct MaintenanceCommand {
    args: MaintenanceArgs,
}

impl MaintenanceCommand {
    /// Create a new maintenance command.
    pub fn new(args: MaintenanceArgs) -> Self {
        Self { args }
    }
}

impl Command for MaintenanceCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let installation = Installation::open(&self.args.destination)?;

        ui.message(&format!("Running maintenance script {}...", self.args.script));
        hooks::run_maintenance(installation.root(), &self.args.script, &self.args.params)?;

        Ok(CommandResult::success())
    }
}
