//! Package descriptors and the local catalog store.

pub mod descriptor;
pub mod store;

pub use descriptor::{InstallDirectives, PackageDescriptor, PackageType, SourceSpec};
pub use store::{CatalogStore, PACKAGE_REPO_URL};
