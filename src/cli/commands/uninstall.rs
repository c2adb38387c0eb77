//! The `uninstall` command.

use crate::catalog::CatalogStore;
use crate::cli::args::UninstallArgs;
use crate::engine::PackageEngine;
use crate::installation::Installation;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The uninstall command implementation.
pub struct UninstallCommand {
    catalog: CatalogStore,
    args: UninstallArgs,
}

impl UninstallCommand {
    /// Create a new uninstall command.
    pub fn new(catalog: CatalogStore, args: UninstallArgs) -> Self {
        Self { catalog, args }
    }
}

impl Command for UninstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let installation = Installation::open(&self.args.destination)?;
        let engine = PackageEngine::new(&self.catalog, installation);

        engine.uninstall(&self.args.packages, self.args.yes, ui)?;
        Ok(CommandResult::success())
    }
}
