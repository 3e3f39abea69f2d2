#![allow(dead_code)]

//! Synthetic .scel buffers for the integration tests.

use scel_reader::scel::layout::{
    CATEGORY_RANGE, DESCRIPTION_RANGE, EXAMPLES_RANGE, MAGIC, NAME_RANGE, PINYIN_TABLE_MARKER,
    PINYIN_TABLE_OFFSET, VOCABULARY_OFFSET,
};
use std::ops::Range;

pub fn utf16(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(|unit| unit.to_le_bytes()).collect()
}

pub fn u16le(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

/// Builds a dictionary laid out like a real .scel file: magic, metadata,
/// pinyin table, then homophone groups.
pub struct ScelBuilder {
    metadata: Vec<(Range<usize>, String)>,
    pinyin_offset: usize,
    pinyin_marker: bool,
    syllables: Vec<(u16, Vec<u8>)>,
    vocabulary_offset: usize,
    vocabulary: Vec<u8>,
}

impl Default for ScelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScelBuilder {
    pub fn new() -> Self {
        Self {
            metadata: Vec::new(),
            pinyin_offset: PINYIN_TABLE_OFFSET,
            pinyin_marker: true,
            syllables: Vec::new(),
            vocabulary_offset: VOCABULARY_OFFSET,
            vocabulary: Vec::new(),
        }
    }

    pub fn name(mut self, text: &str) -> Self {
        self.metadata.push((NAME_RANGE, text.to_string()));
        self
    }

    pub fn category(mut self, text: &str) -> Self {
        self.metadata.push((CATEGORY_RANGE, text.to_string()));
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.metadata.push((DESCRIPTION_RANGE, text.to_string()));
        self
    }

    pub fn examples(mut self, text: &str) -> Self {
        self.metadata.push((EXAMPLES_RANGE, text.to_string()));
        self
    }

    pub fn syllable(self, index: u16, text: &str) -> Self {
        self.raw_syllable(index, &utf16(text))
    }

    pub fn raw_syllable(mut self, index: u16, bytes: &[u8]) -> Self {
        self.syllables.push((index, bytes.to_vec()));
        self
    }

    pub fn pinyin_offset(mut self, offset: usize) -> Self {
        self.pinyin_offset = offset;
        self
    }

    /// Writes a zeroed sub-header instead of `9D 01 ..`.
    pub fn without_marker(mut self) -> Self {
        self.pinyin_marker = false;
        self
    }

    pub fn vocabulary_offset(mut self, offset: usize) -> Self {
        self.vocabulary_offset = offset;
        self
    }

    /// Appends a homophone group. A word with `Some(freq)` gets a 10-byte
    /// extension block starting with the frequency; `None` gets no extension.
    pub fn group(mut self, indices: &[u16], words: &[(&str, Option<u16>)]) -> Self {
        self.vocabulary.extend(u16le(words.len() as u16));
        self.vocabulary.extend(u16le((indices.len() * 2) as u16));
        for &index in indices {
            self.vocabulary.extend(u16le(index));
        }
        for (word, frequency) in words {
            let bytes = utf16(word);
            self.vocabulary.extend(u16le(bytes.len() as u16));
            self.vocabulary.extend(bytes);
            match frequency {
                Some(freq) => {
                    self.vocabulary.extend(u16le(10));
                    self.vocabulary.extend(u16le(*freq));
                    self.vocabulary.extend([0u8; 8]);
                }
                None => self.vocabulary.extend(u16le(0)),
            }
        }
        self
    }

    /// Appends bytes verbatim to the vocabulary section.
    pub fn raw_vocabulary(mut self, bytes: &[u8]) -> Self {
        self.vocabulary.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut table = Vec::new();
        if self.pinyin_marker {
            table.extend(PINYIN_TABLE_MARKER);
            table.extend([0, 0]);
        } else {
            table.extend([0, 0, 0, 0]);
        }
        for (index, bytes) in &self.syllables {
            table.extend(u16le(*index));
            table.extend(u16le(bytes.len() as u16));
            table.extend(bytes);
        }
        let table_end = self.pinyin_offset + table.len();

        let mut data = vec![0u8; table_end.max(self.vocabulary_offset)];
        data[..MAGIC.len()].copy_from_slice(&MAGIC);
        for (range, text) in &self.metadata {
            let bytes = utf16(text);
            assert!(bytes.len() <= range.len(), "metadata too long for its range");
            data[range.start..range.start + bytes.len()].copy_from_slice(&bytes);
        }
        data[self.pinyin_offset..table_end].copy_from_slice(&table);

        assert!(
            table_end <= self.vocabulary_offset,
            "pinyin table overlaps the vocabulary section"
        );
        data.truncate(self.vocabulary_offset);
        data.extend(self.vocabulary);
        data
    }
}
