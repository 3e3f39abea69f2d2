use std::fs;
use std::path::Path;

use log::{info, warn};

use super::diagnostics::DiagnosticSink;
use super::format;
use super::types::error::Result;
use super::types::models::*;

/// The main reader for .scel dictionary files.
///
/// Holds the whole file in memory. Construction only checks the signature;
/// the sections are parsed on demand and never fail, degrading to
/// placeholders and early stops reported through the given sink.
#[derive(Debug, Clone)]
pub struct ScelReader {
    data: Vec<u8>,
    signature: Signature,
}

impl ScelReader {
    /// Read a .scel file from the given path.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file is shorter than the 16-byte header
    /// - Neither known signature matches
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening .scel file: {}", path.display());
        let data = fs::read(path)?;
        Self::from_bytes(data)
    }

    /// Wrap an in-memory buffer, checking its signature.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let signature = format::header::validate(&data)?;
        Ok(Self { data, signature })
    }

    pub fn signature(&self) -> Signature {
        self.signature
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn metadata(&self, sink: &mut dyn DiagnosticSink) -> ScelMetadata {
        format::metadata::parse(&self.data, sink)
    }

    pub fn pinyin_table(&self, sink: &mut dyn DiagnosticSink) -> PinyinTable {
        format::pinyin::parse(&self.data, sink)
    }

    /// Flattens every homophone group into vocabulary items, in file order.
    pub fn vocabulary(
        &self,
        table: &PinyinTable,
        sink: &mut dyn DiagnosticSink,
    ) -> Vec<VocabularyItem> {
        format::vocabulary::parse(&self.data, table, sink)
    }

    /// Runs the whole pipeline: metadata, pinyin table, vocabulary.
    pub fn parse(&self, sink: &mut dyn DiagnosticSink) -> ParsedDictionary {
        let metadata = self.metadata(sink);
        let pinyin_table = self.pinyin_table(sink);
        info!("Pinyin table parsed: {} syllables", pinyin_table.len());

        let items = self.vocabulary(&pinyin_table, sink);
        if items.is_empty() {
            warn!("No vocabulary items recovered");
        } else {
            info!("Vocabulary parsed: {} items", items.len());
        }

        ParsedDictionary {
            signature: self.signature,
            metadata,
            pinyin_table,
            items,
        }
    }
}

/// Reads and parses one file.
pub fn convert_file(path: impl AsRef<Path>, sink: &mut dyn DiagnosticSink) -> Result<ParsedDictionary> {
    Ok(ScelReader::new(path)?.parse(sink))
}
