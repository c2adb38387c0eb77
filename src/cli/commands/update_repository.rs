//! The `update-repository` command.

use crate::catalog::CatalogStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The update-repository command implementation.
pub struct UpdateRepositoryCommand {
    catalog: CatalogStore,
}

impl UpdateRepositoryCommand {
    /// Create a new update-repository command.
    pub fn new(catalog: CatalogStore) -> Self {
        Self { catalog }
    }
}

impl Command for UpdateRepositoryCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        if self.catalog.is_cloned() {
            ui.message("Updating repository...");
        } else {
            ui.message("No package repository present, cloning now...");
        }

        self.catalog.refresh()?;

        ui.success("Package catalog is up to date.");
        Ok(CommandResult::success())
    }
}
