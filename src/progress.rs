use crate::engine::RunTally;
use crate::walker::DirectoryEntry;
use std::io::{self, Write};
use std::path::Path;

/// Column width the directory label is padded to, so a shorter label fully
/// overwrites a longer one on the same terminal line
const LABEL_WIDTH: usize = 64;

/// How much a run prints while it works
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportingMode {
    /// Per-file messages naming the full path, no progress lines
    #[default]
    None,
    /// Nothing per file
    Silent,
    /// Per-file messages naming the file, plus per-directory progress
    Verbose,
}

impl ReportingMode {
    pub fn shows_progress(self) -> bool {
        self == ReportingMode::Verbose
    }
}

/// Progress through one directory level
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressState {
    /// Files the run will visit at or below this level
    pub total_files_in_subtree: u64,
    /// Files visited so far at or below this level
    pub files_processed_in_subtree: u64,
    pub subtree_label: String,
}

impl ProgressState {
    pub fn new(subtree_label: String, total_files_in_subtree: u64) -> Self {
        Self {
            total_files_in_subtree,
            files_processed_in_subtree: 0,
            subtree_label,
        }
    }

    /// Percentage of files visited, or `None` when there is nothing to count
    ///
    /// Clamped to 100 since files created after the count pass are still
    /// visited by the deletion pass.
    pub fn completion_percent(&self) -> Option<f64> {
        if self.total_files_in_subtree == 0 {
            return None;
        }
        let percent =
            100.0 * self.files_processed_in_subtree as f64 / self.total_files_in_subtree as f64;
        Some(percent.min(100.0))
    }

    /// Render the line for the current state. The final line of a level is
    /// newline-terminated, every other line returns the cursor to column 0.
    pub fn render(&self, done: bool) -> Option<String> {
        let percent = self.completion_percent()?;
        let pad = LABEL_WIDTH.saturating_sub(self.subtree_label.chars().count());
        let line = format!(
            "Processed {:.2}% of files in {}{}",
            percent,
            self.subtree_label,
            " ".repeat(pad)
        );
        Some(if done {
            format!("{} - Done!\n", line)
        } else {
            format!("{}\r", line)
        })
    }
}

/// Last component of `path` for display, or the whole path when it has none
pub fn subtree_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Receives events from a deletion run
pub trait Reporter {
    fn trashed(&mut self, _entry: &DirectoryEntry) -> io::Result<()> {
        Ok(())
    }

    fn trash_failed(&mut self, _entry: &DirectoryEntry, _reason: &str) -> io::Result<()> {
        Ok(())
    }

    fn progress(&mut self, _state: &ProgressState, _done: bool) -> io::Result<()> {
        Ok(())
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn trashed(&mut self, entry: &DirectoryEntry) -> io::Result<()> {
        (**self).trashed(entry)
    }

    fn trash_failed(&mut self, entry: &DirectoryEntry, reason: &str) -> io::Result<()> {
        (**self).trash_failed(entry, reason)
    }

    fn progress(&mut self, state: &ProgressState, done: bool) -> io::Result<()> {
        (**self).progress(state, done)
    }
}

/// Reporter that prints nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {}

/// Writes per-file messages and progress lines according to a [`ReportingMode`]
pub struct ConsoleReporter<W: Write> {
    out: W,
    mode: ReportingMode,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(mode: ReportingMode) -> Self {
        Self::new(io::stdout(), mode)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, mode: ReportingMode) -> Self {
        Self { out, mode }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn describe(&self, entry: &DirectoryEntry) -> String {
        match self.mode {
            ReportingMode::Verbose => entry.name.clone(),
            _ => entry.path.display().to_string(),
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn trashed(&mut self, entry: &DirectoryEntry) -> io::Result<()> {
        if self.mode == ReportingMode::Silent {
            return Ok(());
        }
        let label = self.describe(entry);
        writeln!(self.out, "Sent to trash: {}", label)
    }

    fn trash_failed(&mut self, entry: &DirectoryEntry, reason: &str) -> io::Result<()> {
        if self.mode == ReportingMode::Silent {
            return Ok(());
        }
        let label = self.describe(entry);
        writeln!(self.out, "Error sending {} to trash: {}", label, reason)
    }

    fn progress(&mut self, state: &ProgressState, done: bool) -> io::Result<()> {
        if !self.mode.shows_progress() {
            return Ok(());
        }
        if let Some(line) = state.render(done) {
            self.out.write_all(line.as_bytes())?;
            self.out.flush()?;
        }
        Ok(())
    }
}

/// Banner printed before a run starts
pub fn start_banner(label: &str, extension: &str, os_name: &str, recursive: bool) -> String {
    format!(
        "Processing files in {} to find files ending with {} in order to send them to the {} trash{}...",
        label,
        extension,
        os_name,
        if recursive { " recursively" } else { "" }
    )
}

/// Closing lines printed after a run: completion notice and counts
pub fn finish_banner(label: &str, recursive: bool, tally: &RunTally) -> String {
    let done = if recursive {
        format!("Done deleting files in '{}' recursively.", label)
    } else {
        format!("Done deleting files in {}.", label)
    };
    format!("\n{}\n{}", done, tally)
}
