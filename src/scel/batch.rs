//! Directory conversion: discover every .scel file below a directory, parse
//! them one after another and merge the results.
//!
//! A file that fails to open or carries a bad signature is recorded in the
//! report and the batch moves on.

use std::path::{Path, PathBuf};

use log::{info, warn};
use walkdir::WalkDir;

use super::diagnostics::DiagnosticSink;
use super::merge;
use super::reader;
use super::types::error::{Result, ScelError};
use super::types::models::{ParsedDictionary, VocabularyItem};

pub const SCEL_EXTENSION: &str = "scel";

/// Progress notifications for the caller, one per file.
#[derive(Debug)]
pub enum BatchEvent<'a> {
    Converted {
        index: usize,
        total: usize,
        path: &'a Path,
        dictionary: &'a ParsedDictionary,
    },
    Failed {
        index: usize,
        total: usize,
        path: &'a Path,
        error: &'a ScelError,
    },
}

#[derive(Debug, Default)]
pub struct BatchReport {
    /// Every discovered file, in processing order.
    pub files: Vec<PathBuf>,
    /// Files that parsed, with the number of items each produced.
    pub converted: Vec<(PathBuf, usize)>,
    pub failures: Vec<(PathBuf, ScelError)>,
    /// Items before deduplication.
    pub items_read: usize,
    /// Deduplicated and sorted items.
    pub items: Vec<VocabularyItem>,
}

impl BatchReport {
    pub fn duplicates_removed(&self) -> usize {
        self.items_read - self.items.len()
    }
}

/// Case-insensitive `.scel` extension check.
pub fn has_scel_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SCEL_EXTENSION))
}

/// Recursively lists .scel files below `dir`, sorted by path.
///
/// Unreadable subdirectories are skipped with a warning; an unreadable
/// `dir` itself is an error.
pub fn discover(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ScelError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if entry.file_type().is_file() && has_scel_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }
    info!("Found {} .scel files in {}", files.len(), dir.display());
    Ok(files)
}

/// Converts every .scel file below `dir` and merges the vocabularies.
pub fn convert_directory(
    dir: impl AsRef<Path>,
    sink: &mut dyn DiagnosticSink,
    mut observer: impl FnMut(BatchEvent<'_>),
) -> Result<BatchReport> {
    let files = discover(dir)?;
    let total = files.len();
    let mut report = BatchReport::default();
    let mut all_items = Vec::new();

    for (i, path) in files.iter().enumerate() {
        let index = i + 1;
        match reader::convert_file(path, sink) {
            Ok(dictionary) => {
                observer(BatchEvent::Converted {
                    index,
                    total,
                    path,
                    dictionary: &dictionary,
                });
                report.converted.push((path.clone(), dictionary.items.len()));
                all_items.extend(dictionary.items);
            }
            Err(error) => {
                warn!("Failed to convert {}: {}", path.display(), error);
                observer(BatchEvent::Failed {
                    index,
                    total,
                    path,
                    error: &error,
                });
                report.failures.push((path.clone(), error));
            }
        }
    }

    report.items_read = all_items.len();
    report.items = merge::merge(all_items);
    report.files = files;
    info!(
        "Batch merged: {} items read, {} unique",
        report.items_read,
        report.items.len()
    );
    Ok(report)
}
