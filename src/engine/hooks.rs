//! Post-install hooks and external maintenance helpers.

use std::path::Path;

use crate::error::{MwmanError, Result};
use crate::shell;

/// Run `composer update --no-dev` in a directory.
pub fn composer_update(dir: &Path) -> Result<()> {
    let result = shell::run_program("composer", &["update", "--no-dev"], Some(dir))?;

    if !result.success {
        return Err(MwmanError::DependencyInstallFailed {
            path: dir.to_path_buf(),
        });
    }

    Ok(())
}

/// Run a MediaWiki maintenance script: `php <root>/maintenance/<script>.php`.
pub fn run_maintenance(root: &Path, script: &str, params: &[String]) -> Result<()> {
    let script_path = root.join("maintenance").join(format!("{}.php", script));

    let mut args = vec![script_path.to_string_lossy().into_owned()];
    args.extend(params.iter().cloned());

    let result = shell::run_program("php", &args, None)?;

    if !result.success {
        return Err(MwmanError::MaintenanceFailed {
            script: script.to_string(),
        });
    }

    Ok(())
}

/// Run a descriptor-declared install script in the package directory.
///
/// The lines are joined with newlines and executed as one shell
/// invocation. Installing a package executes shell code declared in its
/// descriptor; this is an explicit trust boundary.
pub fn run_install_script(lines: &[String], dir: &Path, package: &str) -> Result<()> {
    let script = lines.join("\n");
    let result = shell::run_script(&script, Some(dir))?;

    if !result.success {
        return Err(MwmanError::PostInstallScriptFailed {
            package: package.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn install_script_runs_in_package_dir() {
        let temp = TempDir::new().unwrap();
        let lines = vec!["echo done > marker.txt".to_string()];

        run_install_script(&lines, temp.path(), "Cite").unwrap();

        assert!(temp.path().join("marker.txt").exists());
    }

    #[test]
    fn failing_install_script_is_an_error() {
        let temp = TempDir::new().unwrap();
        let lines = vec!["exit 1".to_string()];

        let err = run_install_script(&lines, temp.path(), "Cite").unwrap_err();

        assert!(matches!(err, MwmanError::PostInstallScriptFailed { .. }));
    }

    #[test]
    fn script_lines_share_one_shell() {
        let temp = TempDir::new().unwrap();
        let lines = vec![
            "echo first > a.txt".to_string(),
            "echo second >> a.txt".to_string(),
        ];

        run_install_script(&lines, temp.path(), "Cite").unwrap();

        let content = std::fs::read_to_string(temp.path().join("a.txt")).unwrap();
        assert!(content.contains("first"));
        assert!(content.contains("second"));
    }
}
