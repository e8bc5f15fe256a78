use crate::cli::Args;
use crate::error::AppError;
use crate::names_file::{expand_home, permutation_output_path, read_records, write_usernames};
use crate::usernames::UsernameCollector;
use std::path::{Path, PathBuf};

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub usernames_written: usize,
    pub records_read: usize,
    pub lines_skipped: usize,
}

impl RunSummary {
    /// The success line printed to stdout.
    pub fn message(&self) -> String {
        format!(
            "[+] Wrote {} usernames to {}",
            self.usernames_written,
            self.output_path.display()
        )
    }
}

/// Resolves the names file argument to an existing regular file.
///
/// Expands a leading `~` and fails with `AppError::FileNotFound` when the
/// result is missing or not a regular file.
pub fn resolve_input(names_file: &Path) -> Result<PathBuf, AppError> {
    let input_path = expand_home(names_file);
    if input_path.is_file() {
        Ok(input_path)
    } else {
        Err(AppError::file_not_found(input_path))
    }
}

/// Runs one batch for the names file given on the command line.
pub fn run(args: &Args) -> Result<RunSummary, AppError> {
    let input_path = resolve_input(&args.names_file)?;
    process_names_file(&input_path)
}

/// Turns an already resolved names file into a deduplicated username list.
///
/// - Feeds every record's candidates through a single collector
/// - Writes the output file once, after all records are processed
pub fn process_names_file(input_path: &Path) -> Result<RunSummary, AppError> {
    let output_path = permutation_output_path(input_path);
    let outcome = read_records(input_path)?;

    let mut collector = UsernameCollector::new();
    for record in &outcome.records {
        collector.extend(record.permutations());
    }

    tracing::info!(
        records = outcome.records.len(),
        skipped = outcome.lines_skipped,
        unique = collector.len(),
        "generated username candidates"
    );

    write_usernames(&output_path, collector.as_slice())?;

    Ok(RunSummary {
        output_path,
        usernames_written: collector.len(),
        records_read: outcome.records.len(),
        lines_skipped: outcome.lines_skipped,
    })
}
