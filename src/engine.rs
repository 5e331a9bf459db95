use crate::error::{Result, TrashError};
use crate::progress::{subtree_label, ProgressState, Reporter, ReportingMode};
use crate::sink::TrashSink;
use crate::walker::{count_files_in_subtree, list_immediate_children, DirectoryEntry};
use std::fmt;
use std::io;
use std::ops::AddAssign;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Parameters of a single run
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    pub root: PathBuf,
    /// Matched verbatim against the end of each file name
    pub extension: String,
    pub recursive: bool,
    pub reporting: ReportingMode,
}

/// Counts accumulated by a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTally {
    /// Entries visited, directories included
    pub files_processed: u64,
    pub files_deleted: u64,
}

impl RunTally {
    /// Fold a child directory's tally into this one
    pub fn absorb(&mut self, child: RunTally) {
        self.files_processed += child.files_processed;
        self.files_deleted += child.files_deleted;
    }
}

impl AddAssign for RunTally {
    fn add_assign(&mut self, rhs: RunTally) {
        self.absorb(rhs);
    }
}

impl fmt::Display for RunTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files processed, {} files deleted.",
            self.files_processed, self.files_deleted
        )
    }
}

/// What one directory level hands back to its parent
#[derive(Debug, Default, Clone, Copy)]
struct LevelOutcome {
    tally: RunTally,
    /// Non-directory entries visited at or below the level, the numerator
    /// of the parent's progress percentage
    files_visited: u64,
}

/// Walks a directory tree and sends matching files to a [`TrashSink`]
pub struct DeletionEngine<S, R> {
    config: TraversalConfig,
    sink: S,
    reporter: R,
}

impl<S: TrashSink, R: Reporter> DeletionEngine<S, R> {
    pub fn new(config: TraversalConfig, sink: S, reporter: R) -> Self {
        Self {
            config,
            sink,
            reporter,
        }
    }

    /// Run the deletion over the configured root
    ///
    /// Per-file trash failures are counted as processed but not deleted.
    /// A directory that cannot be listed aborts the run.
    pub fn run(&mut self) -> Result<RunTally> {
        let root = self.config.root.clone();
        if !root.exists() {
            info!("Directory does not exist: {}", root.display());
            return Err(TrashError::DirectoryNotFound(root));
        }

        info!(
            "Sending files ending with {:?} in {} to trash (recursive: {})",
            self.config.extension,
            root.display(),
            self.config.recursive
        );

        let outcome = self.process_directory(&root)?;

        info!(
            "Processed {} entries, deleted {} files",
            outcome.tally.files_processed, outcome.tally.files_deleted
        );
        Ok(outcome.tally)
    }

    fn process_directory(&mut self, path: &Path) -> Result<LevelOutcome> {
        let children = list_immediate_children(path)?;
        let mut progress = self.progress_for(path, &children);
        let mut outcome = LevelOutcome::default();

        for (index, entry) in children.iter().enumerate() {
            if entry.is_directory {
                if self.config.recursive {
                    let child = self.process_directory(&entry.path)?;
                    outcome.tally += child.tally;
                    outcome.files_visited += child.files_visited;
                } else {
                    debug!("Not descending into {}", entry.path.display());
                }
            } else {
                outcome.files_visited += 1;
                if entry.has_suffix(&self.config.extension) && self.trash(entry) {
                    outcome.tally.files_deleted += 1;
                }
            }
            outcome.tally.files_processed += 1;

            if let Some(state) = progress.as_mut() {
                state.files_processed_in_subtree = outcome.files_visited;
                let done = index + 1 == children.len();
                report_outcome(self.reporter.progress(state, done), path);
            }
        }

        debug!(
            "Finished {}: {} processed, {} deleted",
            path.display(),
            outcome.tally.files_processed,
            outcome.tally.files_deleted
        );
        Ok(outcome)
    }

    /// Progress denominator for a level: every file the run will visit at or
    /// below it. Only computed when progress is shown.
    fn progress_for(&self, path: &Path, children: &[DirectoryEntry]) -> Option<ProgressState> {
        if !self.config.reporting.shows_progress() {
            return None;
        }
        let total = if self.config.recursive {
            count_files_in_subtree(path)
        } else {
            children.iter().filter(|c| !c.is_directory).count() as u64
        };
        Some(ProgressState::new(subtree_label(path), total))
    }

    /// Send one file to the sink. Returns whether it was moved.
    fn trash(&mut self, entry: &DirectoryEntry) -> bool {
        match self.sink.send(&entry.path) {
            Ok(()) => {
                debug!("Sent to trash: {}", entry.path.display());
                report_outcome(self.reporter.trashed(entry), &entry.path);
                true
            }
            Err(e) => {
                warn!("{}", e);
                report_outcome(self.reporter.trash_failed(entry, &e.reason()), &entry.path);
                false
            }
        }
    }
}

/// Console output is best effort: a failed write is logged and the run goes on
fn report_outcome(result: io::Result<()>, path: &Path) {
    if let Err(e) = result {
        warn!("Failed to write console output for {}: {}", path.display(), e);
    }
}

/// Run a deletion with the given sink and reporter
pub fn run<S: TrashSink, R: Reporter>(
    config: TraversalConfig,
    sink: S,
    reporter: R,
) -> Result<RunTally> {
    DeletionEngine::new(config, sink, reporter).run()
}
