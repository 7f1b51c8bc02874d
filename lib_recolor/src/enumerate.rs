use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum EnumerateError {
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Failed to walk directory tree")]
    Walk(#[from] walkdir::Error),
}

/// Recursively collects the regular files under `root` whose file name ends
/// with `suffix`.
///
/// Matching is byte-exact and case-sensitive, and only looks at the final
/// path component. Symlinks are followed, so a link is matched by its own
/// name and linked directories are searched. File contents are never opened.
/// Entries that can't be read (permissions, broken links, link loops) are
/// logged and skipped.
///
/// # Errors
/// - Returns `EnumerateError::NotADirectory` if `root` is missing or not a directory
/// - Returns `EnumerateError::Walk` if `root` itself can't be listed
pub fn find_files(root: &Path, suffix: &str) -> Result<Vec<PathBuf>, EnumerateError> {
    if !root.is_dir() {
        return Err(EnumerateError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            // Depth 0 is the root, nothing to skip to
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if has_suffix(entry.file_name().as_encoded_bytes(), suffix) {
            debug!("Matched {}", entry.path().display());
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn has_suffix(file_name: &[u8], suffix: &str) -> bool {
    file_name.ends_with(suffix.as_bytes())
}
