//! Error types for mwman operations.
//!
//! This module defines [`MwmanError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MwmanError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `MwmanError::Other`) for unexpected errors
//! - The core never terminates the process; errors propagate to the CLI
//!   boundary, which prints a FATAL message and exits non-zero

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for mwman operations.
#[derive(Debug, Error)]
pub enum MwmanError {
    /// The target path is not a MediaWiki installation.
    #[error("'{path}' is not a valid MediaWiki installation")]
    InvalidInstallation { path: PathBuf },

    /// No descriptor for the requested package exists in the catalog.
    #[error("No such package {name}")]
    PackageNotFound { name: String },

    /// The descriptor declares a source kind other than git.
    #[error("Unknown source '{kind}' for package {package}")]
    UnsupportedSource { package: String, kind: String },

    /// git clone exited non-zero.
    #[error("Failed to clone repository {url}")]
    CloneFailed { url: String, code: Option<i32> },

    /// composer exited non-zero.
    #[error("Failed to run composer in {path}")]
    DependencyInstallFailed { path: PathBuf },

    /// A descriptor-declared install script exited non-zero.
    #[error("Failed to run install script for {package}")]
    PostInstallScriptFailed { package: String },

    /// A MediaWiki maintenance script exited non-zero.
    #[error("Failed to run maintenance script {script}")]
    MaintenanceFailed { script: String },

    /// The ledger has no section for the package type, meaning the package
    /// was never installed through mwman.
    #[error("No such section '{section}' in the ledger")]
    NoSuchSection { section: String },

    /// The package has no install directory or ledger entry.
    #[error("Package {name} is not installed")]
    PackageNotPresent { name: String },

    /// Dependency expansion revisited a package already being installed.
    #[error("Circular dependency detected: {cycle}")]
    CyclicDependency { cycle: String },

    /// Failed to parse a catalog descriptor file.
    #[error("Failed to parse package descriptor at {path}: {message}")]
    DescriptorParse { path: PathBuf, message: String },

    /// Failed to parse a ledger file.
    #[error("Failed to parse ledger at {path}: {message}")]
    LedgerParse { path: PathBuf, message: String },

    /// auto-add requires a completed MediaWiki installation.
    #[error("No LocalSettings.php at {path}. Have you completed the installation yet?")]
    MissingLocalSettings { path: PathBuf },

    /// A required external tool is not on PATH.
    #[error("{tool} not found. Please install {tool}")]
    MissingTool { tool: String },

    /// The user declined a confirmation prompt.
    #[error("Aborted by user")]
    Aborted,

    /// External command failed to start or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for mwman operations.
pub type Result<T> = std::result::Result<T, MwmanError>;
