//! Reading the names file and writing the username list next to it.

use crate::constants::OUTPUT_STEM_SUFFIX;
use crate::error::AppError;
use crate::usernames::NameRecord;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};

/// Records extracted from a names file.
#[derive(Debug, Default)]
pub struct ReadOutcome {
    /// Name records in file order
    pub records: Vec<NameRecord>,
    /// Lines that had fewer than two tokens
    pub lines_skipped: usize,
}

/// Expands a leading `~` to the current user's home directory.
///
/// Only a bare `~` as the first path component is expanded (`~/names.txt`);
/// `~user/...` forms and paths without a tilde are returned unchanged, as is
/// everything when no home directory can be determined.
pub fn expand_home(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

/// Derives the output path for an input names file.
///
/// The output lives in the same directory, with `_permutation` appended to the
/// file stem and the original extension kept.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use userpermutation::names_file::permutation_output_path;
///
/// assert_eq!(
///     permutation_output_path(Path::new("lists/users.txt")),
///     Path::new("lists/users_permutation.txt")
/// );
/// assert_eq!(
///     permutation_output_path(Path::new("names")),
///     Path::new("names_permutation")
/// );
/// ```
pub fn permutation_output_path(input: &Path) -> PathBuf {
    let mut file_name: OsString = input.file_stem().unwrap_or_default().to_os_string();
    file_name.push(OUTPUT_STEM_SUFFIX);
    if let Some(extension) = input.extension() {
        file_name.push(".");
        file_name.push(extension);
    }
    input.with_file_name(file_name)
}

/// Reads name records from `path`.
///
/// Lines may end in `\n`, `\r\n` or a lone `\r`. Lines with fewer than two
/// whitespace-separated tokens are skipped without any diagnostic. Invalid
/// UTF-8 surfaces as an I/O error.
pub fn read_records(path: &Path) -> Result<ReadOutcome, AppError> {
    let text = std::fs::read_to_string(path)?;
    let mut outcome = ReadOutcome::default();

    for line in split_lines(&text) {
        match NameRecord::from_line(line) {
            Some(record) => outcome.records.push(record),
            None => outcome.lines_skipped += 1,
        }
    }

    tracing::debug!(
        path = %path.display(),
        records = outcome.records.len(),
        skipped = outcome.lines_skipped,
        "read names file"
    );
    Ok(outcome)
}

/// Splits text on `\r\n`, `\n` and lone `\r`. A trailing line break does not
/// start an extra empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(idx) => {
                let line = &rest[..idx];
                let break_len = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + break_len..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Writes `usernames` to `path`, one per line, replacing any existing file.
///
/// Every entry is followed by a newline. An empty list still produces a file
/// containing a single newline.
pub fn write_usernames(path: &Path, usernames: &[String]) -> Result<(), AppError> {
    let mut writer = BufWriter::new(File::create(path)?);

    if usernames.is_empty() {
        writeln!(writer)?;
    }
    for username in usernames {
        writeln!(writer, "{username}")?;
    }
    writer.flush()?;

    tracing::debug!(path = %path.display(), count = usernames.len(), "wrote usernames");
    Ok(())
}
