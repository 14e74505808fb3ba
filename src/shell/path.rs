// ABOUTME: Lexical path resolution against the session working directory.
// ABOUTME: Absolute arguments pass through; relative ones are joined, never normalised.

use std::path::{Path, PathBuf};

/// Resolve a user-supplied path argument against `working_directory`.
pub fn resolve(working_directory: &Path, arg: &str) -> PathBuf {
    let path = Path::new(arg);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        working_directory.join(path)
    }
}

/// Lexical parent of `dir`. The root is its own parent.
pub fn parent_of(dir: &Path) -> PathBuf {
    dir.parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.to_path_buf())
}
