//! Package descriptor model.
//!
//! A descriptor is one YAML file in the catalog describing where a package
//! lives and how to finish installing it. Descriptors are immutable after
//! parse.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of MediaWiki package.
///
/// The variant decides both the ledger section and the install
/// subdirectory under the installation root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    Extension,
    Skin,
}

impl PackageType {
    /// Catalog lookup priority. First match wins on cross-type name
    /// collisions.
    pub const LOOKUP_ORDER: [PackageType; 2] = [PackageType::Skin, PackageType::Extension];

    /// Ledger section name, also the install and catalog subdirectory.
    pub fn section(self) -> &'static str {
        match self {
            PackageType::Extension => "extensions",
            PackageType::Skin => "skins",
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageType::Extension => write!(f, "extension"),
            PackageType::Skin => write!(f, "skin"),
        }
    }
}

/// Where a package's code comes from.
///
/// The kind is kept as data rather than a closed enum so that a descriptor
/// with an unrecognized kind still parses and fails with a distinct error
/// before any filesystem mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceSpec {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub branch: String,
}

impl SourceSpec {
    /// The only supported source kind.
    pub const GIT: &'static str = "git";

    pub fn is_git(&self) -> bool {
        self.kind == Self::GIT
    }
}

/// Post-clone install directives, executed in declaration order:
/// `update`, then `composer`, then `script`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstallDirectives {
    /// Run MediaWiki's update.php after installing.
    #[serde(default)]
    pub update: bool,

    /// Run `composer update --no-dev` in the package directory.
    #[serde(default)]
    pub composer: bool,

    /// Shell command lines run in the package directory.
    #[serde(default)]
    pub script: Vec<String>,
}

/// A catalog entry for one extension or skin.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageDescriptor {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: PackageType,

    #[serde(default)]
    pub authors: Vec<String>,

    pub source: SourceSpec,

    #[serde(default)]
    pub depends: Vec<String>,

    pub install: Option<InstallDirectives>,
}

impl PackageDescriptor {
    /// Comma-joined author list for display.
    pub fn authors_joined(&self) -> String {
        self.authors.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_descriptor() {
        let yaml = r#"
name: Vector
type: skin
authors:
  - Wikimedia Foundation
source:
  type: git
  url: https://example.com/Vector.git
  branch: master
"#;
        let pkg: PackageDescriptor = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(pkg.name, "Vector");
        assert_eq!(pkg.kind, PackageType::Skin);
        assert!(pkg.source.is_git());
        assert_eq!(pkg.source.branch, "master");
        assert!(pkg.depends.is_empty());
        assert!(pkg.install.is_none());
    }

    #[test]
    fn parses_full_descriptor() {
        let yaml = r#"
name: VisualEditor
type: extension
authors:
  - Alice
  - Bob
source:
  type: git
  url: https://example.com/VisualEditor.git
  branch: REL1_39
depends:
  - Cite
install:
  update: true
  composer: true
  script:
    - npm install
    - npm run build
"#;
        let pkg: PackageDescriptor = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(pkg.kind, PackageType::Extension);
        assert_eq!(pkg.depends, vec!["Cite".to_string()]);
        assert_eq!(pkg.authors_joined(), "Alice, Bob");

        let install = pkg.install.unwrap();
        assert!(install.update);
        assert!(install.composer);
        assert_eq!(install.script.len(), 2);
    }

    #[test]
    fn unknown_source_kind_still_parses() {
        let yaml = r#"
name: Odd
type: extension
authors: []
source:
  type: svn
"#;
        let pkg: PackageDescriptor = serde_yaml::from_str(yaml).unwrap();

        assert!(!pkg.source.is_git());
        assert_eq!(pkg.source.kind, "svn");
    }

    #[test]
    fn unknown_package_type_is_a_parse_error() {
        let yaml = r#"
name: Odd
type: gadget
authors: []
source:
  type: git
"#;
        assert!(serde_yaml::from_str::<PackageDescriptor>(yaml).is_err());
    }

    #[test]
    fn package_type_sections() {
        assert_eq!(PackageType::Extension.section(), "extensions");
        assert_eq!(PackageType::Skin.section(), "skins");
    }

    #[test]
    fn package_type_display() {
        assert_eq!(PackageType::Extension.to_string(), "extension");
        assert_eq!(PackageType::Skin.to_string(), "skin");
    }
}
