use anyhow::{Context, Result};
use bulk_trash::progress::{finish_banner, start_banner, subtree_label};
use bulk_trash::{
    logging, platform, run, ConsoleReporter, ReportingMode, SystemTrash, TrashError,
    TraversalConfig,
};
use clap::Parser;
use std::path::PathBuf;

/// Bulk delete files with options.
#[derive(Parser, Debug)]
#[command(name = "bulk-delete", version)]
struct Cli {
    /// The directory to delete files from.
    directory: PathBuf,

    /// The file extension to target.
    #[arg(allow_hyphen_values = true)]
    extension: String,

    /// Enable recursive deletion.
    #[arg(short, long)]
    recursive: bool,

    /// Enable verbose mode (progress messages).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    if !cli.directory.exists() {
        println!("Directory '{}' does not exist.", cli.directory.display());
        return Ok(());
    }

    let os_name = platform::os_name();
    let label = subtree_label(&cli.directory);
    println!(
        "{}",
        start_banner(&label, &cli.extension, os_name, cli.recursive)
    );

    let config = TraversalConfig {
        root: cli.directory.clone(),
        extension: cli.extension,
        recursive: cli.recursive,
        reporting: if cli.verbose {
            ReportingMode::Verbose
        } else {
            ReportingMode::Silent
        },
    };
    let reporter = ConsoleReporter::stdout(config.reporting);

    let tally = match run(config, SystemTrash, reporter) {
        Ok(tally) => tally,
        Err(e @ TrashError::DirectoryNotFound(_)) => {
            println!("{}", e);
            return Ok(());
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Aborted while processing {}", cli.directory.display()))
        }
    };

    println!("{}", finish_banner(&label, cli.recursive, &tally));
    Ok(())
}
