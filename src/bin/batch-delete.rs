use anyhow::{Context, Result};
use bulk_trash::{
    logging, run, ConsoleReporter, ReportingMode, SystemTrash, TrashError, TraversalConfig,
};
use clap::Parser;
use std::path::PathBuf;

/// Batch delete files with options.
#[derive(Parser, Debug)]
#[command(name = "batch-delete", version)]
struct Cli {
    /// The directory to delete files from.
    #[arg(short, long)]
    directory: PathBuf,

    /// The file extension to target.
    #[arg(short, long, allow_hyphen_values = true)]
    extension: String,

    /// Enable recursive deletion.
    #[arg(short, long)]
    recursive: bool,

    /// Enable silent mode (no progress messages).
    #[arg(short, long)]
    silent: bool,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let config = TraversalConfig {
        root: cli.directory.clone(),
        extension: cli.extension,
        recursive: cli.recursive,
        reporting: if cli.silent {
            ReportingMode::Silent
        } else {
            ReportingMode::None
        },
    };
    let reporter = ConsoleReporter::stdout(config.reporting);

    match run(config, SystemTrash, reporter) {
        Ok(_) => Ok(()),
        Err(e @ TrashError::DirectoryNotFound(_)) => {
            println!("{}", e);
            Ok(())
        }
        Err(e) => Err(e)
            .with_context(|| format!("Aborted while processing {}", cli.directory.display())),
    }
}
