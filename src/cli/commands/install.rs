//! The `install` command.

use crate::catalog::CatalogStore;
use crate::cli::args::PackageArgs;
use crate::engine::PackageEngine;
use crate::installation::Installation;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    catalog: CatalogStore,
    args: PackageArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(catalog: CatalogStore, args: PackageArgs) -> Self {
        Self { catalog, args }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let installation = Installation::open(&self.args.destination)?;
        let engine = PackageEngine::new(&self.catalog, installation);

        engine.install(&self.args.packages, ui)?;
        Ok(CommandResult::success())
    }
}
