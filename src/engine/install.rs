//! Package installation with dependency expansion and rollback.

use std::path::Path;

use crate::catalog::PackageDescriptor;
use crate::error::{MwmanError, Result};
use crate::fsutil;
use crate::git;
use crate::ledger::Ledger;
use crate::ui::UserInterface;

use super::{hooks, PackageEngine};

impl PackageEngine<'_> {
    /// Install packages in order.
    ///
    /// Names are processed sequentially; the first failure aborts the
    /// remaining names. Work completed for earlier names is kept — only
    /// the failing package's partial filesystem changes are rolled back.
    /// An already-installed package is reported and skipped, and later
    /// names are still processed.
    pub fn install(&self, names: &[String], ui: &mut dyn UserInterface) -> Result<()> {
        for name in names {
            let mut stack = Vec::new();
            self.install_one(name, &mut stack, ui)?;
        }
        Ok(())
    }

    fn install_one(
        &self,
        name: &str,
        stack: &mut Vec<String>,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let pkg = self.catalog.find(name)?;
        let install_path = self.installation.package_dir(pkg.kind, &pkg.name);

        if install_path.is_dir() {
            ui.highlight(&format!("Package {} already installed", name));
            return Ok(());
        }

        // Source kind is checked before dependency expansion so that an
        // unsupported kind fails before any filesystem mutation.
        if !pkg.source.is_git() {
            return Err(MwmanError::UnsupportedSource {
                package: pkg.name.clone(),
                kind: pkg.source.kind.clone(),
            });
        }

        if stack.iter().any(|n| n == name) {
            let mut cycle = stack.join(" -> ");
            cycle.push_str(" -> ");
            cycle.push_str(name);
            return Err(MwmanError::CyclicDependency { cycle });
        }

        ui.message(&format!(
            "==> Installing {} by {}",
            pkg.name,
            pkg.authors_joined()
        ));

        stack.push(name.to_string());
        for dependency in &pkg.depends {
            self.install_one(dependency, stack, ui)?;
        }
        stack.pop();

        ui.message(&format!(
            "Cloning git repository from {}...",
            pkg.source.url
        ));
        git::clone_shallow(&pkg.source.url, &pkg.source.branch, &install_path)?;

        // Hooks run before the ledger commit; a hook failure removes the
        // clone and leaves the ledger untouched, so filesystem and ledger
        // never disagree.
        if let Err(e) = self.run_post_install(&pkg, &install_path, ui) {
            rollback_clone(&install_path);
            return Err(e);
        }

        if let Err(e) = self.commit_ledger(&pkg) {
            rollback_clone(&install_path);
            return Err(e);
        }

        ui.success(&format!("{} installed successfully.", name));
        Ok(())
    }

    fn run_post_install(
        &self,
        pkg: &PackageDescriptor,
        install_path: &Path,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let Some(directives) = &pkg.install else {
            return Ok(());
        };

        if directives.update {
            ui.message("Updating MediaWiki...");
            hooks::run_maintenance(self.installation.root(), "update", &["--quick".to_string()])?;
        }

        if directives.composer {
            ui.message("Running composer...");
            hooks::composer_update(install_path)?;
        }

        if !directives.script.is_empty() {
            ui.message("Running install script...");
            hooks::run_install_script(&directives.script, install_path, &pkg.name)?;
        }

        Ok(())
    }

    fn commit_ledger(&self, pkg: &PackageDescriptor) -> Result<()> {
        let ledger_path = self.installation.ledger_path();
        let mut ledger = Ledger::load(&ledger_path)?;
        ledger.insert(pkg.kind, &pkg.name, true);
        ledger.save(&ledger_path)
    }
}

fn rollback_clone(install_path: &Path) {
    if let Err(e) = fsutil::remove_tree_force(install_path) {
        tracing::warn!(
            "could not remove {} during rollback: {}",
            install_path.display(),
            e
        );
    }
}
