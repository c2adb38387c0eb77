//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::catalog::CatalogStore;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    catalog_override: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    ///
    /// `catalog_override` replaces the per-user catalog location when set
    /// (the `--catalog` flag).
    pub fn new(catalog_override: Option<PathBuf>) -> Self {
        Self { catalog_override }
    }

    /// Open the catalog store honoring the override.
    fn open_catalog(&self) -> Result<CatalogStore> {
        match &self.catalog_override {
            Some(dir) => Ok(CatalogStore::at(dir)),
            None => CatalogStore::open_default(),
        }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Install(args) => {
                let cmd = super::install::InstallCommand::new(self.open_catalog()?, args.clone());
                cmd.execute(ui)
            }
            Commands::Uninstall(args) => {
                let cmd =
                    super::uninstall::UninstallCommand::new(self.open_catalog()?, args.clone());
                cmd.execute(ui)
            }
            Commands::Activate(args) => {
                let cmd =
                    super::toggle::ToggleCommand::activate(self.open_catalog()?, args.clone());
                cmd.execute(ui)
            }
            Commands::Deactivate(args) => {
                let cmd =
                    super::toggle::ToggleCommand::deactivate(self.open_catalog()?, args.clone());
                cmd.execute(ui)
            }
            Commands::AutoAdd(args) => {
                let cmd = super::auto_add::AutoAddCommand::new(args.clone());
                cmd.execute(ui)
            }
            Commands::Maintenance(args) => {
                let cmd = super::maintenance::MaintenanceCommand::new(args.clone());
                cmd.execute(ui)
            }
            Commands::CheckSanity => {
                let cmd = super::sanity::CheckSanityCommand::new();
                cmd.execute(ui)
            }
            Commands::InstallMediawiki(args) => {
                let cmd = super::install_mediawiki::InstallMediawikiCommand::new(args.clone());
                cmd.execute(ui)
            }
            Commands::UpdateRepository => {
                let cmd = super::update_repository::UpdateRepositoryCommand::new(
                    self.open_catalog()?,
                );
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_honors_catalog_override() {
        let dispatcher = CommandDispatcher::new(Some(PathBuf::from("/tmp/catalog")));
        let store = dispatcher.open_catalog().unwrap();
        assert_eq!(store.dir(), std::path::Path::new("/tmp/catalog"));
    }
}
