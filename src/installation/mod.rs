//! MediaWiki installation probe and paths.
//!
//! A path is recognized as an installation iff both the `extensions/` and
//! `skins/` subdirectories exist. Every operation that touches an
//! installation opens it through [`Installation::open`] first.

use std::path::{Path, PathBuf};

use crate::catalog::PackageType;
use crate::error::{MwmanError, Result};

/// Per-installation ledger file name.
pub const LEDGER_FILE: &str = "MWMan.ini";

/// Glue file loaded from LocalSettings.php at wiki runtime.
pub const GLUE_FILE: &str = "MWMan.php";

/// MediaWiki's own settings entry point.
pub const SETTINGS_FILE: &str = "LocalSettings.php";

/// A validated MediaWiki installation root.
#[derive(Debug, Clone)]
pub struct Installation {
    root: PathBuf,
}

impl Installation {
    /// Open and validate an installation root.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let root = path.into();

        for kind in [PackageType::Extension, PackageType::Skin] {
            if !root.join(kind.section()).is_dir() {
                let path = std::fs::canonicalize(&root).unwrap_or(root);
                return Err(MwmanError::InvalidInstallation { path });
            }
        }

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the MWMan.ini ledger.
    pub fn ledger_path(&self) -> PathBuf {
        self.root.join(LEDGER_FILE)
    }

    /// Path of the MWMan.php glue file.
    pub fn glue_path(&self) -> PathBuf {
        self.root.join(GLUE_FILE)
    }

    /// Path of LocalSettings.php.
    pub fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    /// Install directory for a package of the given type.
    pub fn package_dir(&self, kind: PackageType, name: &str) -> PathBuf {
        self.root.join(kind.section()).join(name)
    }
}
