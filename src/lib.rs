//! bulk-trash - send files matching an extension to the system trash
//!
//! This library walks a directory (optionally recursively), moves every file
//! whose name ends with a given suffix to the platform trash and tallies what
//! it visited and deleted.

pub mod engine;
pub mod error;
pub mod logging;
pub mod platform;
pub mod progress;
pub mod sink;
pub mod walker;

pub use engine::{run, DeletionEngine, RunTally, TraversalConfig};
pub use error::{Result, TrashError};
pub use progress::{ConsoleReporter, ProgressState, Reporter, ReportingMode, SilentReporter};
pub use sink::{SystemTrash, TrashSink};
pub use walker::{count_files_in_subtree, list_immediate_children, DirectoryEntry};
