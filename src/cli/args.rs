//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// mwman - A package manager for MediaWiki.
#[derive(Debug, Parser)]
#[command(name = "mwman")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the package catalog (overrides ~/.mwman/packages)
    #[arg(long, global = true, value_name = "DIR")]
    pub catalog: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install packages into a MediaWiki installation
    Install(PackageArgs),

    /// Uninstall packages, removing their files and ledger entries
    Uninstall(UninstallArgs),

    /// Activate installed packages
    Activate(PackageArgs),

    /// Deactivate installed packages without removing them
    Deactivate(PackageArgs),

    /// Hook the MWMan loader into LocalSettings.php
    AutoAdd(AutoAddArgs),

    /// Run a MediaWiki maintenance script
    Maintenance(MaintenanceArgs),

    /// Check that the required external tools are installed
    CheckSanity,

    /// Bootstrap a fresh MediaWiki installation
    InstallMediawiki(InstallMediawikiArgs),

    /// Clone or update the local package catalog
    UpdateRepository,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments shared by install/activate/deactivate.
#[derive(Debug, Clone, clap::Args)]
pub struct PackageArgs {
    /// Package names, as listed in the catalog
    #[arg(required = true)]
    pub packages: Vec<String>,

    /// Path to the MediaWiki installation
    #[arg(short, long, default_value = ".")]
    pub destination: PathBuf,
}

/// Arguments for the `uninstall` command.
#[derive(Debug, Clone, clap::Args)]
pub struct UninstallArgs {
    /// Package names, as listed in the catalog
    #[arg(required = true)]
    pub packages: Vec<String>,

    /// Path to the MediaWiki installation
    #[arg(short, long, default_value = ".")]
    pub destination: PathBuf,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the `auto-add` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AutoAddArgs {
    /// Path to the MediaWiki installation
    #[arg(default_value = ".")]
    pub destination: PathBuf,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the `maintenance` command.
#[derive(Debug, Clone, clap::Args)]
pub struct MaintenanceArgs {
    /// Path to the MediaWiki installation
    pub destination: PathBuf,

    /// Script name under maintenance/, without the .php suffix
    pub script: String,

    /// Parameters passed to the script
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub params: Vec<String>,
}

/// Arguments for the `install-mediawiki` command.
#[derive(Debug, Clone, clap::Args)]
#[command(disable_version_flag = true)]
pub struct InstallMediawikiArgs {
    /// MediaWiki version tag or branch (e.g. REL1_42)
    pub version: String,

    /// Directory to install into
    pub destination: PathBuf,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
