use crate::error::{Result, TrashError};
use std::path::Path;
use tracing::debug;

/// Destination for files selected for deletion
///
/// Implementations must never unlink a file permanently: a successful
/// `send` leaves the file recoverable from the platform trash.
pub trait TrashSink {
    fn send(&mut self, path: &Path) -> Result<()>;
}

/// Sends files to the platform trash (freedesktop trash, Finder trash or
/// the Windows Recycle Bin)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTrash;

impl TrashSink for SystemTrash {
    fn send(&mut self, path: &Path) -> Result<()> {
        trash::delete(path).map_err(|e| TrashError::TrashOperationFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!("Moved to trash: {}", path.display());
        Ok(())
    }
}

impl<S: TrashSink + ?Sized> TrashSink for &mut S {
    fn send(&mut self, path: &Path) -> Result<()> {
        (**self).send(path)
    }
}
