//! mwman - A package manager for MediaWiki.
//!
//! mwman installs, activates, deactivates, and uninstalls extensions and
//! skins for a MediaWiki installation by cloning their repositories with
//! git and toggling entries in a per-installation `MWMan.ini` ledger. It
//! can also bootstrap a fresh MediaWiki installation and keep a local
//! catalog of package descriptors in sync with the remote catalog.
//!
//! # Modules
//!
//! - [`bootstrap`] - MediaWiki bootstrap and LocalSettings.php hookup
//! - [`catalog`] - Package descriptors and the local catalog store
//! - [`cli`] - Command-line interface and argument parsing
//! - [`engine`] - Install/uninstall/activate/deactivate orchestration
//! - [`error`] - Error types and result aliases
//! - [`fsutil`] - Filesystem helpers (force removal)
//! - [`git`] - External git client wrapper
//! - [`installation`] - MediaWiki installation probe and paths
//! - [`ledger`] - Per-installation package ledger (MWMan.ini)
//! - [`shell`] - External process execution
//! - [`ui`] - Interactive prompts and terminal output
//!
//! # Example
//!
//! ```
//! use mwman::catalog::PackageType;
//! use mwman::ledger::Ledger;
//!
//! let mut ledger = Ledger::bootstrap();
//! ledger.insert(PackageType::Extension, "Cite", true);
//! assert_eq!(ledger.status(PackageType::Extension, "Cite"), Some(true));
//! ```
//!
//! For disk-backed operations, see the integration tests.

pub mod bootstrap;
pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod fsutil;
pub mod git;
pub mod installation;
pub mod ledger;
pub mod shell;
pub mod ui;

pub use error::{MwmanError, Result};
