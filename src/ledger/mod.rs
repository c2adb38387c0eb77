//! Per-installation package ledger.
//!
//! The ledger records, per package type, which packages are installed and
//! whether each is active. It is the only persisted state mwman keeps
//! about an installation, and the engine keeps it in lock-step with the
//! package directories on disk: a name appears in the ledger iff its files
//! are present under the matching type directory.

pub mod format;

use std::fs;
use std::path::Path;

use crate::catalog::PackageType;
use crate::error::{MwmanError, Result};

/// In-memory ledger value.
///
/// Loaded at the start of a mutation and saved immediately after it, so a
/// failure later in the operation cannot lose the recorded state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    sections: format::Sections,
}

impl Ledger {
    /// Empty ledger with no sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger for a fresh installation: both type sections present, empty.
    pub fn bootstrap() -> Self {
        let mut ledger = Self::new();
        for kind in [PackageType::Extension, PackageType::Skin] {
            ledger.ensure_section(kind);
        }
        ledger
    }

    /// Load a ledger from disk. A missing file yields an empty ledger.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)?;
        let sections = format::parse(&content).map_err(|message| MwmanError::LedgerParse {
            path: path.to_path_buf(),
            message,
        })?;

        Ok(Self { sections })
    }

    /// Save the ledger using an atomic whole-file write.
    ///
    /// Write-to-temp-then-rename, so the wiki never observes a partially
    /// written ledger (teacher pattern for state files).
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = format::serialize(&self.sections);

        let temp_path = path.with_extension("ini.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Whether the section for a package type exists.
    pub fn has_section(&self, kind: PackageType) -> bool {
        self.sections.contains_key(kind.section())
    }

    /// Create the section for a package type if absent.
    pub fn ensure_section(&mut self, kind: PackageType) {
        self.sections.entry(kind.section().to_string()).or_default();
    }

    /// Active flag for a package, or `None` if it is not recorded.
    pub fn status(&self, kind: PackageType, name: &str) -> Option<bool> {
        self.sections.get(kind.section())?.get(name).copied()
    }

    /// Set the active flag for a recorded package.
    ///
    /// Fails with [`MwmanError::NoSuchSection`] if the type section does
    /// not exist, which means nothing of this type was ever installed
    /// through mwman.
    pub fn set_status(&mut self, kind: PackageType, name: &str, active: bool) -> Result<()> {
        let section =
            self.sections
                .get_mut(kind.section())
                .ok_or_else(|| MwmanError::NoSuchSection {
                    section: kind.section().to_string(),
                })?;

        section.insert(name.to_string(), active);
        Ok(())
    }

    /// Record a package, creating the section if needed (install path).
    pub fn insert(&mut self, kind: PackageType, name: &str, active: bool) {
        self.ensure_section(kind);
        self.sections
            .get_mut(kind.section())
            .expect("section was just ensured")
            .insert(name.to_string(), active);
    }

    /// Remove a package entry. Absence is not an error.
    pub fn remove(&mut self, kind: PackageType, name: &str) {
        if let Some(section) = self.sections.get_mut(kind.section()) {
            section.remove(name);
        }
    }

    /// Recorded packages of one type, in name order.
    pub fn packages(&self, kind: PackageType) -> impl Iterator<Item = (&str, bool)> {
        self.sections
            .get(kind.section())
            .into_iter()
            .flat_map(|section| section.iter().map(|(name, active)| (name.as_str(), *active)))
    }
}
