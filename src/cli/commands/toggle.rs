//! The `activate` and `deactivate` commands.

use crate::catalog::CatalogStore;
use crate::cli::args::PackageArgs;
use crate::engine::PackageEngine;
use crate::installation::Installation;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The activate/deactivate command implementation.
pub struct ToggleCommand {
    catalog: CatalogStore,
    args: PackageArgs,
    active: bool,
}

impl ToggleCommand {
    /// Create an activate command.
    pub fn activate(catalog: CatalogStore, args: PackageArgs) -> Self {
        Self {
            catalog,
            args,
            active: true,
        }
    }

    /// Create a deactivate command.
    pub fn deactivate(catalog: CatalogStore, args: PackageArgs) -> Self {
        Self {
            catalog,
            args,
            active: false,
        }
    }
}

impl Command for ToggleCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let installation = Installation::open(&self.args.destination)?;
        let engine = PackageEngine::new(&self.catalog, installation);

        if self.active {
            engine.activate(&self.args.packages, ui)?;
        } else {
            engine.deactivate(&self.args.packages, ui)?;
        }
        Ok(CommandResult::success())
    }
}
