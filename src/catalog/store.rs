//! Local catalog store.
//!
//! The catalog is a local clone of the package repository, organized as
//! `<type>s/<name>.yml` descriptor files. Lookup searches skins before
//! extensions; refresh is clone-if-absent / pull-if-present.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::descriptor::{PackageDescriptor, PackageType};
use crate::error::{MwmanError, Result};
use crate::git;

/// Remote repository holding the package descriptors.
pub const PACKAGE_REPO_URL: &str = "https://github.com/spycrab/mwman-packages.git";

/// A local directory of package descriptors.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    dir: PathBuf,
    auto_refresh: bool,
}

impl CatalogStore {
    /// Open the per-user catalog at `~/.mwman/packages`.
    ///
    /// The first lookup clones the catalog repository if the directory does
    /// not exist yet.
    pub fn open_default() -> Result<Self> {
        Ok(Self {
            dir: Self::default_dir()?,
            auto_refresh: true,
        })
    }

    /// Open a catalog at an explicit directory.
    ///
    /// The directory is used as-is and never refreshed implicitly.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            auto_refresh: false,
        }
    }

    /// The per-user catalog location.
    pub fn default_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("could not determine the home directory"))?;
        Ok(home.join(".mwman").join("packages"))
    }

    /// The catalog directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether the catalog has been cloned yet.
    pub fn is_cloned(&self) -> bool {
        self.dir.join(".git").is_dir()
    }

    /// Look up a package descriptor by name.
    ///
    /// Searches type directories in [`PackageType::LOOKUP_ORDER`]; the first
    /// match wins. A malformed descriptor is a fatal parse error, not a
    /// miss.
    pub fn find(&self, name: &str) -> Result<PackageDescriptor> {
        if !self.dir.is_dir() && self.auto_refresh {
            tracing::info!("no package catalog at {}, fetching", self.dir.display());
            self.refresh()?;
        }

        for kind in PackageType::LOOKUP_ORDER {
            let path = self
                .dir
                .join(kind.section())
                .join(format!("{}.yml", name));

            if !path.is_file() {
                continue;
            }

            let content = fs::read_to_string(&path)?;
            return serde_yaml::from_str(&content).map_err(|e| MwmanError::DescriptorParse {
                path,
                message: e.to_string(),
            });
        }

        Err(MwmanError::PackageNotFound {
            name: name.to_string(),
        })
    }

    /// Clone or update the catalog from [`PACKAGE_REPO_URL`].
    pub fn refresh(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        if self.is_cloned() {
            tracing::info!("updating package catalog in {}", self.dir.display());
            git::pull(&self.dir)
        } else {
            tracing::info!("cloning package catalog into {}", self.dir.display());
            git::clone_into(PACKAGE_REPO_URL, &self.dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_descriptor(dir: &Path, kind: PackageType, name: &str, yaml: &str) {
        let type_dir = dir.join(kind.section());
        fs::create_dir_all(&type_dir).unwrap();
        fs::write(type_dir.join(format!("{}.yml", name)), yaml).unwrap();
    }

    const CITE: &str = r#"
name: Cite
type: extension
authors: [Wikimedia Foundation]
source:
  type: git
  url: https://example.com/Cite.git
  branch: master
"#;

    #[test]
    fn finds_extension_descriptor() {
        let temp = TempDir::new().unwrap();
        write_descriptor(temp.path(), PackageType::Extension, "Cite", CITE);

        let store = CatalogStore::at(temp.path());
        let pkg = store.find("Cite").unwrap();

        assert_eq!(pkg.name, "Cite");
        assert_eq!(pkg.kind, PackageType::Extension);
    }

    #[test]
    fn missing_package_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = CatalogStore::at(temp.path());

        let err = store.find("Nope").unwrap_err();

        assert!(matches!(err, MwmanError::PackageNotFound { .. }));
    }

    #[test]
    fn skin_wins_on_name_collision() {
        let temp = TempDir::new().unwrap();
        write_descriptor(temp.path(), PackageType::Extension, "Twin", CITE);
        write_descriptor(
            temp.path(),
            PackageType::Skin,
            "Twin",
            r#"
name: Twin
type: skin
authors: []
source:
  type: git
  url: https://example.com/Twin.git
  branch: master
"#,
        );

        let store = CatalogStore::at(temp.path());
        let pkg = store.find("Twin").unwrap();

        assert_eq!(pkg.kind, PackageType::Skin);
    }

    #[test]
    fn malformed_descriptor_is_fatal() {
        let temp = TempDir::new().unwrap();
        write_descriptor(
            temp.path(),
            PackageType::Extension,
            "Broken",
            "name: [unclosed",
        );

        let store = CatalogStore::at(temp.path());
        let err = store.find("Broken").unwrap_err();

        assert!(matches!(err, MwmanError::DescriptorParse { .. }));
    }

    #[test]
    fn explicit_catalog_is_never_auto_refreshed() {
        let temp = TempDir::new().unwrap();
        let store = CatalogStore::at(temp.path().join("absent"));

        // Would attempt a network clone if auto-refresh applied here.
        let err = store.find("Cite").unwrap_err();

        assert!(matches!(err, MwmanError::PackageNotFound { .. }));
    }
}
