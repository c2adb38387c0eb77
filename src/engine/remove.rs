//! Package removal.

use crate::error::{MwmanError, Result};
use crate::fsutil;
use crate::ledger::Ledger;
use crate::ui::UserInterface;

use super::PackageEngine;

impl PackageEngine<'_> {
    /// Uninstall packages after a single confirmation for the whole batch.
    ///
    /// Every requested name is processed; a failure aborts the remaining
    /// names but already-removed packages stay removed.
    pub fn uninstall(
        &self,
        names: &[String],
        assume_yes: bool,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let confirmed = assume_yes
            || ui.confirm(
                &format!("Are you sure you want to remove {}?", names.join(", ")),
                false,
            )?;

        if !confirmed {
            ui.message("Aborting...");
            return Err(MwmanError::Aborted);
        }

        for name in names {
            self.uninstall_one(name, ui)?;
        }
        Ok(())
    }

    fn uninstall_one(&self, name: &str, ui: &mut dyn UserInterface) -> Result<()> {
        let pkg = self.catalog.find(name)?;
        let install_path = self.installation.package_dir(pkg.kind, &pkg.name);

        if !install_path.is_dir() {
            return Err(MwmanError::PackageNotPresent {
                name: name.to_string(),
            });
        }

        fsutil::remove_tree_force(&install_path)?;

        let ledger_path = self.installation.ledger_path();
        let mut ledger = Ledger::load(&ledger_path)?;
        ledger.remove(pkg.kind, &pkg.name);
        ledger.save(&ledger_path)?;

        ui.success(&format!("Removed {} successfully.", name));
        Ok(())
    }
}
