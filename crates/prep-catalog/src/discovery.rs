//! Manifest discovery.
//!
//! Finds the `prep.toml` manifest by walking up the directory tree from a
//! starting point. The directory containing the manifest is the content
//! root: entry locators resolve relative to it.

use std::path::{Path, PathBuf};

/// The manifest filename.
pub const MANIFEST_FILENAME: &str = "prep.toml";

/// Discovers the manifest relevant to the given directory.
///
/// Walks up from `cwd` to the filesystem root and returns the first
/// `prep.toml` found, or `None` if there is none.
pub fn discover_manifest(cwd: &Path) -> Option<PathBuf> {
    let mut current = Some(cwd);
    while let Some(dir) = current {
        let manifest_path = dir.join(MANIFEST_FILENAME);
        if manifest_path.is_file() {
            return Some(manifest_path);
        }
        current = dir.parent();
    }
    None
}
