//! External git client wrapper.
//!
//! All repository acquisition goes through the `git` binary with inherited
//! stdio, so clone progress is shown to the user directly.

use std::path::Path;

use crate::error::{MwmanError, Result};
use crate::shell;

/// Shallow-clone a single branch into `dest`.
///
/// Matches the acquisition mode used for both packages and MediaWiki
/// itself: `git clone -b <branch> --single-branch --depth 1 <url> <dest>`.
pub fn clone_shallow(url: &str, branch: &str, dest: &Path) -> Result<()> {
    tracing::debug!("cloning {} (branch {}) into {}", url, branch, dest.display());

    let dest = dest.to_string_lossy();
    let args = [
        "clone",
        "-b",
        branch,
        "--single-branch",
        "--depth",
        "1",
        url,
        dest.as_ref(),
    ];

    let result = shell::run_program("git", &args, None)?;
    if !result.success {
        return Err(MwmanError::CloneFailed {
            url: url.to_string(),
            code: result.exit_code,
        });
    }

    Ok(())
}

/// Clone a repository into an existing directory (full history).
///
/// Used for the package catalog, which is pulled incrementally afterwards.
pub fn clone_into(url: &str, dir: &Path) -> Result<()> {
    tracing::debug!("cloning {} into {}", url, dir.display());

    let result = shell::run_program("git", &["clone", url, "."], Some(dir))?;
    if !result.success {
        return Err(MwmanError::CloneFailed {
            url: url.to_string(),
            code: result.exit_code,
        });
    }

    Ok(())
}

/// Pull the current branch of an existing clone.
pub fn pull(dir: &Path) -> Result<()> {
    tracing::debug!("pulling in {}", dir.display());

    let result = shell::run_program("git", &["pull"], Some(dir))?;
    if !result.success {
        return Err(MwmanError::CommandFailed {
            command: "git pull".to_string(),
            code: result.exit_code,
        });
    }

    Ok(())
}
