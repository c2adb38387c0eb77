//! Package operation engine.
//!
//! The engine drives the four package operations: install, uninstall,
//! activate, and deactivate. Each operation validates the installation up
//! front (the [`Installation`] it holds is already validated), resolves
//! names through the catalog, and keeps the ledger and the package
//! directories in lock-step: every operation either fully commits or rolls
//! back its filesystem changes for the current package.

pub mod hooks;

mod install;
mod remove;
mod toggle;

use crate::catalog::CatalogStore;
use crate::installation::Installation;

/// Orchestrates package operations against one installation.
pub struct PackageEngine<'a> {
    catalog: &'a CatalogStore,
    installation: Installation,
}

impl<'a> PackageEngine<'a> {
    /// Create an engine for a validated installation.
    pub fn new(catalog: &'a CatalogStore, installation: Installation) -> Self {
        Self {
            catalog,
            installation,
        }
    }

    pub fn installation(&self) -> &Installation {
        &self.installation
    }
}
