//! Various convenience and utility functions used throughout the codebase.

use dirs_next::home_dir;
use std::io;
use std::path::{Path, PathBuf};

/// Read a whole text file, such as a configuration or a list of operations.
pub fn read_file(path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
}

/// Replace a leading `~` component with the home directory.
/// Returns `None` only if the path needs the home directory and it cannot be found.
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    let p = path.as_ref();

    match p.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home_dir(),
        Ok(rest) => home_dir().map(|home| home.join(rest)),
        Err(_) => Some(p.to_path_buf()),
    }
}
