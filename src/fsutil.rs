//! Filesystem helpers.

use std::fs;
use std::io;
use std::path::Path;

/// Remove a directory tree, clearing read-only attributes if needed.
///
/// Cloned repositories can contain read-only entries (notably under `.git`
/// on Windows) that make a plain `remove_dir_all` fail. On failure, every
/// entry is made writable and the removal is retried once.
pub fn remove_tree_force(path: &Path) -> io::Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(_) => {
            make_writable(path)?;
            fs::remove_dir_all(path)
        }
    }
}

#[allow(clippy::permissions_set_readonly_false)]
fn make_writable(path: &Path) -> io::Result<()> {
    let meta = fs::symlink_metadata(path)?;
    let mut perms = meta.permissions();

    if perms.readonly() {
        perms.set_readonly(false);
        fs::set_permissions(path, perms)?;
    }

    if meta.is_dir() {
        for entry in fs::read_dir(path)? {
            make_writable(&entry?.path())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn removes_plain_tree() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("tree");
        fs::create_dir_all(root.join("nested")).unwrap();
        fs::write(root.join("nested").join("file.txt"), "data").unwrap();

        remove_tree_force(&root).unwrap();

        assert!(!root.exists());
    }

    #[test]
    fn removes_tree_with_readonly_entries() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("tree");
        fs::create_dir_all(&root).unwrap();

        let file = root.join("locked.txt");
        fs::write(&file, "data").unwrap();
        let mut perms = fs::metadata(&file).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&file, perms).unwrap();

        remove_tree_force(&root).unwrap();

        assert!(!root.exists());
    }

    #[test]
    fn missing_tree_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(remove_tree_force(&temp.path().join("absent")).is_err());
    }
}
