//! Text export in the ibus-libpinyin import format.
//!
//! ```text
//! word<TAB>pinyin<TAB>frequency<LF>
//! ```
//! UTF-8 without BOM, no header line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use super::types::error::Result;
use super::types::models::VocabularyItem;

/// Records between two progress messages.
const PROGRESS_INTERVAL: usize = 1000;

/// Formats one item as an output line, including the newline.
pub fn format_line(item: &VocabularyItem) -> String {
    format!("{}\t{}\t{}\n", item.word, item.pinyin, item.frequency)
}

/// Writes all items and returns how many were written.
pub fn write_items<W: Write>(writer: &mut W, items: &[VocabularyItem]) -> Result<usize> {
    let mut written = 0;
    for item in items {
        writer.write_all(format_line(item).as_bytes())?;
        written += 1;
        if written % PROGRESS_INTERVAL == 0 {
            debug!("Write progress: {}/{} items", written, items.len());
        }
    }
    writer.flush()?;
    Ok(written)
}

/// Creates (or truncates) `path` and writes all items to it.
pub fn write_file(path: impl AsRef<Path>, items: &[VocabularyItem]) -> Result<usize> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    let written = write_items(&mut writer, items)?;
    info!("Wrote {} items to {}", written, path.display());
    Ok(written)
}
