//! Activation flag toggling.
//!
//! Activate and deactivate are cheap metadata flips: they touch only the
//! ledger, never the package files. The MWMan.php loader reads the flags
//! at wiki runtime to decide what to load.

use crate::error::{MwmanError, Result};
use crate::ledger::Ledger;
use crate::ui::UserInterface;

use super::PackageEngine;

impl PackageEngine<'_> {
    /// Mark packages active.
    pub fn activate(&self, names: &[String], ui: &mut dyn UserInterface) -> Result<()> {
        self.set_active(names, true, ui)
    }

    /// Mark packages inactive.
    pub fn deactivate(&self, names: &[String], ui: &mut dyn UserInterface) -> Result<()> {
        self.set_active(names, false, ui)
    }

    fn set_active(&self, names: &[String], active: bool, ui: &mut dyn UserInterface) -> Result<()> {
        let verb = if active { "activated" } else { "deactivated" };

        for name in names {
            let pkg = self.catalog.find(name)?;

            let ledger_path = self.installation.ledger_path();
            let mut ledger = Ledger::load(&ledger_path)?;

            if !ledger.has_section(pkg.kind) {
                return Err(MwmanError::NoSuchSection {
                    section: pkg.kind.section().to_string(),
                });
            }

            let Some(current) = ledger.status(pkg.kind, &pkg.name) else {
                return Err(MwmanError::PackageNotPresent {
                    name: name.to_string(),
                });
            };

            if current == active {
                ui.highlight(&format!("Package {} already {}.", name, verb));
                continue;
            }

            ledger.set_status(pkg.kind, &pkg.name, active)?;
            ledger.save(&ledger_path)?;

            ui.success(&format!("{} {}.", name, verb));
        }

        Ok(())
    }
}
