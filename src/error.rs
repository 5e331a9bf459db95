use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error types for bulk-trash runs
#[derive(Error, Debug)]
pub enum TrashError {
    #[error("Directory '{}' does not exist.", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Failed to read directory {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to send {} to trash: {reason}", path.display())]
    TrashOperationFailed { path: PathBuf, reason: String },
}

impl TrashError {
    /// Failure cause without the path prefix, for per-file console messages
    pub fn reason(&self) -> String {
        match self {
            TrashError::TrashOperationFailed { reason, .. } => reason.clone(),
            TrashError::DirectoryUnreadable { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for bulk-trash operations
pub type Result<T> = std::result::Result<T, TrashError>;
