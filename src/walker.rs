use crate::error::{Result, TrashError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// A child of a directory, classified without following symlinks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_directory: bool,
}

impl DirectoryEntry {
    /// Exact, case-sensitive suffix match on the raw file name bytes
    ///
    /// `name` is lossily decoded for display only; matching against it would
    /// let replacement characters take part in the comparison.
    pub fn has_suffix(&self, extension: &str) -> bool {
        self.path
            .file_name()
            .is_some_and(|name| name.as_encoded_bytes().ends_with(extension.as_bytes()))
    }
}

/// List the immediate children of `path` in filesystem order
pub fn list_immediate_children(path: &Path) -> Result<Vec<DirectoryEntry>> {
    let unreadable = |source| TrashError::DirectoryUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let mut children = Vec::new();
    for entry in fs::read_dir(path).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let file_type = entry.file_type().map_err(unreadable)?;
        children.push(DirectoryEntry {
            path: entry.path(),
            name: entry.file_name().to_string_lossy().into_owned(),
            is_directory: file_type.is_dir(),
        });
    }

    debug!("Listed {} entries in {}", children.len(), path.display());
    Ok(children)
}

/// Count every non-directory entry at or below `path`
///
/// Directories that vanish or cannot be read are skipped. Classification
/// matches [`list_immediate_children`], so the count agrees with what the
/// deletion pass will visit when the tree does not change in between.
pub fn count_files_in_subtree(path: &Path) -> u64 {
    let mut count = 0u64;
    for entry in WalkDir::new(path).min_depth(1).follow_links(false) {
        match entry {
            Ok(entry) if !entry.file_type().is_dir() => count += 1,
            Ok(_) => {}
            Err(e) => warn!("Skipping unreadable entry while counting {}: {}", path.display(), e),
        }
    }
    count
}
