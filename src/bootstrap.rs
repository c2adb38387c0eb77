//! MediaWiki bootstrap and LocalSettings.php hookup.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::engine::hooks;
use crate::error::{MwmanError, Result};
use crate::git;
use crate::installation::{Installation, GLUE_FILE, LEDGER_FILE};
use crate::ledger::Ledger;
use crate::ui::UserInterface;

/// Remote repository holding MediaWiki itself.
pub const MEDIAWIKI_REPO_URL: &str = "https://github.com/wikimedia/mediawiki.git";

/// Line appended to LocalSettings.php by `auto-add`.
pub const INCLUDE_LINE: &str = "include('MWMan.php');";

/// Glue file copied verbatim into every bootstrapped installation. It
/// reads the ledger at wiki runtime and loads the active packages.
const GLUE_TEMPLATE: &str = include_str!("../templates/MWMan.php");

/// Install MediaWiki at a version tag or branch.
///
/// There is nothing to validate beforehand and the clone is not rolled
/// back if composer fails afterwards; a partially bootstrapped directory
/// can be left behind for the user to inspect.
pub fn install_mediawiki(version: &str, destination: &Path, ui: &mut dyn UserInterface) -> Result<()> {
    git::clone_shallow(MEDIAWIKI_REPO_URL, version, destination)?;

    hooks::composer_update(destination)?;

    ui.message(&format!("Installing {}...", GLUE_FILE));
    fs::write(destination.join(GLUE_FILE), GLUE_TEMPLATE)?;

    Ledger::bootstrap().save(&destination.join(LEDGER_FILE))?;

    ui.success("Done! Visit the wiki from your browser to configure it.");
    ui.message(
        "Note: This is a barebones installation. You might want to install \
         some skins and/or extensions before using it.",
    );
    ui.message("Please run auto-add after the installation is complete for mwman to function properly.");

    Ok(())
}

/// Hook the MWMan loader into an installation's LocalSettings.php.
pub fn auto_add(
    installation: &Installation,
    assume_yes: bool,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let settings_path = installation.settings_path();

    if !settings_path.is_file() {
        return Err(MwmanError::MissingLocalSettings {
            path: settings_path,
        });
    }

    let confirmed = assume_yes
        || ui.confirm(
            &format!(
                "Are you sure you want to append \"{}\" to your LocalSettings.php?",
                INCLUDE_LINE
            ),
            false,
        )?;

    if !confirmed {
        ui.message("Aborting...");
        return Err(MwmanError::Aborted);
    }

    let mut settings = OpenOptions::new().append(true).open(&settings_path)?;
    write!(settings, "\n\n# Added by mwman\n{}\n", INCLUDE_LINE)?;

    ui.success("MWMan.php is now included from LocalSettings.php.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn make_installation(root: &Path) -> Installation {
        fs::create_dir_all(root.join("extensions")).unwrap();
        fs::create_dir_all(root.join("skins")).unwrap();
        Installation::open(root).unwrap()
    }

    #[test]
    fn glue_template_loads_both_sections() {
        assert!(GLUE_TEMPLATE.contains("parse_ini_file"));
        assert!(GLUE_TEMPLATE.contains("wfLoadExtension"));
        assert!(GLUE_TEMPLATE.contains("wfLoadSkin"));
    }

    #[test]
    fn auto_add_appends_include_line() {
        let temp = TempDir::new().unwrap();
        let installation = make_installation(temp.path());
        fs::write(installation.settings_path(), "<?php\n$wgSitename = 'Test';\n").unwrap();

        let mut ui = MockUI::new();
        ui.queue_confirm(true);
        auto_add(&installation, false, &mut ui).unwrap();

        let content = fs::read_to_string(installation.settings_path()).unwrap();
        assert!(content.starts_with("<?php"));
        assert!(content.contains("# Added by mwman"));
        assert!(content.contains(INCLUDE_LINE));
    }

    #[test]
    fn auto_add_requires_local_settings() {
        let temp = TempDir::new().unwrap();
        let installation = make_installation(temp.path());

        let mut ui = MockUI::new();
        let err = auto_add(&installation, true, &mut ui).unwrap_err();

        assert!(matches!(err, MwmanError::MissingLocalSettings { .. }));
    }

    #[test]
    fn auto_add_declined_aborts_without_writing() {
        let temp = TempDir::new().unwrap();
        let installation = make_installation(temp.path());
        fs::write(installation.settings_path(), "<?php\n").unwrap();

        let mut ui = MockUI::new();
        ui.queue_confirm(false);
        let err = auto_add(&installation, false, &mut ui).unwrap_err();

        assert!(matches!(err, MwmanError::Aborted));
        let content = fs::read_to_string(installation.settings_path()).unwrap();
        assert!(!content.contains(INCLUDE_LINE));
    }

    #[test]
    fn assume_yes_skips_the_prompt() {
        let temp = TempDir::new().unwrap();
        let installation = make_installation(temp.path());
        fs::write(installation.settings_path(), "<?php\n").unwrap();

        let mut ui = MockUI::new();
        auto_add(&installation, true, &mut ui).unwrap();

        assert!(ui.confirms_shown().is_empty());
    }
}
