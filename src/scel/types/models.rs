//! Core data structures for .scel dictionary components.
//!
//! This module defines the values produced by the parsers:
//! - Descriptive metadata from the fixed header area
//! - The pinyin index table
//! - Flat vocabulary items ready for export

use std::collections::HashMap;
use std::fmt;

/// Which of the two accepted file signatures matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    /// `40 15 00 00` at offset 0.
    Magic,
    /// ASCII `DCS` at offset 4.
    DcsMarker,
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Signature::Magic => write!(f, "magic 40 15 00 00"),
            Signature::DcsMarker => write!(f, "DCS marker"),
        }
    }
}

/// Descriptive strings stored at fixed offsets in the header area.
///
/// Informational only: nothing downstream depends on these values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScelMetadata {
    pub name: String,
    pub category: String,
    pub description: String,
    pub examples: String,
}

/// Lookup table from a 16-bit pinyin index to its syllable.
///
/// Built once per file and read-only afterwards. The first occurrence of an
/// index wins.
#[derive(Debug, Clone, Default)]
pub struct PinyinTable {
    syllables: HashMap<u16, String>,
}

impl PinyinTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a syllable unless the index is already present.
    ///
    /// Returns `false` (and leaves the table unchanged) for a duplicate index.
    pub fn insert(&mut self, index: u16, syllable: String) -> bool {
        if self.syllables.contains_key(&index) {
            return false;
        }
        self.syllables.insert(index, syllable);
        true
    }

    pub fn get(&self, index: u16) -> Option<&str> {
        self.syllables.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// Resolves a sequence of indices into an apostrophe-joined pinyin string.
    ///
    /// Unknown indices (or empty syllables) are rendered inline as
    /// `[0xNNNN]` so the position of the gap stays visible.
    pub fn spell(&self, indices: &[u16]) -> String {
        let mut pinyin = String::new();
        for &index in indices {
            if !pinyin.is_empty() {
                pinyin.push('\'');
            }
            match self.get(index).filter(|s| !s.is_empty()) {
                Some(syllable) => pinyin.push_str(syllable),
                None => pinyin.push_str(&format!("[0x{:04X}]", index)),
            }
        }
        pinyin
    }
}

/// A single converted dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyItem {
    pub word: String,
    pub pinyin: String,
    pub frequency: u32,
}

impl VocabularyItem {
    pub fn new(word: impl Into<String>, pinyin: impl Into<String>, frequency: u32) -> Self {
        Self {
            word: word.into(),
            pinyin: pinyin.into(),
            frequency,
        }
    }
}

/// Everything recovered from one .scel file.
#[derive(Debug, Clone)]
pub struct ParsedDictionary {
    pub signature: Signature,
    pub metadata: ScelMetadata,
    pub pinyin_table: PinyinTable,
    pub items: Vec<VocabularyItem>,
}
