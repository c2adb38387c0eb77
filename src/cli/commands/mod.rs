//! CLI subcommand implementations.

pub mod auto_add;
pub mod completions;
pub mod dispatcher;
pub mod install;
pub mod install_mediawiki;
pub mod maintenance;
pub mod sanity;
pub mod toggle;
pub mod uninstall;
pub mod update_repository;
