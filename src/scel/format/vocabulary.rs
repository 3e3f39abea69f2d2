//! Vocabulary (homophone group) parsing.
//!
//! # Group Structure
//! ```text
//! [2 bytes] Homophone count (little-endian u16)
//! [2 bytes] Pinyin index list length in bytes (little-endian u16)
//! [N bytes] Pinyin indices (u16 each)
//! repeated homophone-count times:
//!   [2 bytes] Word length in bytes
//!   [N bytes] Word text
//!   [2 bytes] Extension length in bytes
//!   [N bytes] Extension (first u16 is the frequency, the rest is opaque)
//! ```
//!
//! Groups follow each other until the end of the file. Nothing marks a group
//! boundary, so implausible header values are treated as misalignment.
//!
//! # Resynchronisation
//! When a group-header field is implausible, scanning resumes at the byte
//! right after that field, so every retry advances by at least two bytes.
//! The counter of such skips is kept for the whole file; once it exceeds
//! [`MAX_CORRUPT_GROUPS`] the rest of the file is abandoned.

use std::ops::Range;

use log::{debug, trace};

use super::note_decoder;
use crate::scel::codec::text;
use crate::scel::diagnostics::{DiagnosticSink, GroupField, ParseEvent, WordReject};
use crate::scel::layout::{
    DEFAULT_FREQUENCY, MAX_CORRUPT_GROUPS, MAX_HOMOPHONES, MAX_PINYIN_INDEX_BYTES,
    MAX_VOCABULARY_ITEMS, MAX_WORD_BYTES, VOCABULARY_OFFSET, VOCABULARY_SCAN,
};
use crate::scel::types::models::{PinyinTable, VocabularyItem};
use crate::scel::utils::{self, ByteReader};

/// Finds the first offset in `window` that looks like a group header:
/// a homophone count in `1..=10` and an index length in `1..50` whose high
/// byte is zero.
///
/// This is a heuristic; a false positive only costs some garbage records.
pub fn find_start(data: &[u8], window: Range<usize>) -> Option<usize> {
    let end = window.end.min(data.len().saturating_sub(4));
    (window.start..end).find(|&i| {
        (1..=10).contains(&data[i]) && (1..50).contains(&data[i + 2]) && data[i + 3] == 0
    })
}

/// Offset of the first group: the fixed default when it fits, otherwise the
/// result of [`find_start`].
pub fn start_offset(data: &[u8], sink: &mut dyn DiagnosticSink) -> usize {
    if utils::fits(data, VOCABULARY_OFFSET, 4) {
        return VOCABULARY_OFFSET;
    }
    match find_start(data, VOCABULARY_SCAN) {
        Some(offset) => {
            sink.emit(ParseEvent::VocabularyStartRecovered { offset });
            offset
        }
        None => {
            sink.emit(ParseEvent::VocabularyStartNotFound {
                fallback: VOCABULARY_OFFSET,
            });
            VOCABULARY_OFFSET
        }
    }
}

/// Reads every homophone group and flattens them into vocabulary items,
/// in file order.
pub fn parse(
    data: &[u8],
    table: &PinyinTable,
    sink: &mut dyn DiagnosticSink,
) -> Vec<VocabularyItem> {
    let start = start_offset(data, sink);
    debug!("Reading vocabulary from {:#06x}", start);
    VocabularyParser {
        reader: ByteReader::at(data, start),
        table,
        sink,
        items: Vec::new(),
        corrupt_groups: 0,
    }
    .run()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupOutcome {
    Complete,
    /// A header field was implausible; counts towards the skip limit.
    Corrupt,
    /// A word was implausible; the rest of the group is dropped.
    Abandoned,
    LimitReached,
    EndOfData,
}

struct VocabularyParser<'a, 's> {
    reader: ByteReader<'a>,
    table: &'a PinyinTable,
    sink: &'s mut dyn DiagnosticSink,
    items: Vec<VocabularyItem>,
    corrupt_groups: usize,
}

impl VocabularyParser<'_, '_> {
    fn run(mut self) -> Vec<VocabularyItem> {
        while self.reader.has(4) {
            if self.items.len() >= MAX_VOCABULARY_ITEMS {
                self.emit_limit();
                break;
            }
            match self.read_group() {
                GroupOutcome::Complete | GroupOutcome::Abandoned => {}
                GroupOutcome::Corrupt => {
                    self.corrupt_groups += 1;
                    if self.corrupt_groups > MAX_CORRUPT_GROUPS {
                        self.sink.emit(ParseEvent::CorruptGroupLimit {
                            skipped: self.corrupt_groups,
                        });
                        break;
                    }
                }
                GroupOutcome::LimitReached => {
                    self.emit_limit();
                    break;
                }
                GroupOutcome::EndOfData => break,
            }
        }

        if self.corrupt_groups > 0 {
            debug!("Skipped {} corrupt groups", self.corrupt_groups);
        }
        self.items
    }

    fn emit_limit(&mut self) {
        self.sink.emit(ParseEvent::ItemLimitReached {
            limit: MAX_VOCABULARY_ITEMS,
        });
    }

    fn read_group(&mut self) -> GroupOutcome {
        let count_offset = self.reader.position();
        let Some(same_count) = self.reader.read_u16() else {
            return GroupOutcome::EndOfData;
        };
        if same_count > MAX_HOMOPHONES {
            self.sink.emit(ParseEvent::CorruptGroup {
                offset: count_offset,
                field: GroupField::HomophoneCount,
                value: same_count,
            });
            return GroupOutcome::Corrupt;
        }

        let length_offset = self.reader.position();
        let Some(index_bytes) = self.reader.read_u16() else {
            return GroupOutcome::EndOfData;
        };
        if index_bytes > MAX_PINYIN_INDEX_BYTES || index_bytes % 2 != 0 {
            self.sink.emit(ParseEvent::CorruptGroup {
                offset: length_offset,
                field: GroupField::PinyinIndexLength,
                value: index_bytes,
            });
            return GroupOutcome::Corrupt;
        }

        let mut indices = Vec::with_capacity(index_bytes as usize / 2);
        for _ in 0..index_bytes / 2 {
            match self.reader.read_u16() {
                Some(index) => indices.push(index),
                None => break,
            }
        }
        let pinyin = self.table.spell(&indices);
        trace!(
            "Group @ {:#06x}: {} homophones, pinyin '{}'",
            count_offset, same_count, pinyin
        );

        for _ in 0..same_count {
            if self.items.len() >= MAX_VOCABULARY_ITEMS {
                return GroupOutcome::LimitReached;
            }
            match self.read_word(&pinyin) {
                GroupOutcome::Complete => {}
                outcome => return outcome,
            }
        }
        GroupOutcome::Complete
    }

    fn read_word(&mut self, pinyin: &str) -> GroupOutcome {
        if !self.reader.has(4) {
            return GroupOutcome::EndOfData;
        }
        let length_offset = self.reader.position();
        let Some(word_len) = self.reader.read_u16() else {
            return GroupOutcome::EndOfData;
        };
        if word_len > MAX_WORD_BYTES {
            self.sink.emit(ParseEvent::WordRejected {
                offset: length_offset,
                cause: WordReject::LengthTooLarge(word_len),
            });
            return GroupOutcome::Abandoned;
        }

        let word_offset = self.reader.position();
        let Some(word_bytes) = self.reader.read_bytes(word_len as usize) else {
            self.sink.emit(ParseEvent::WordRejected {
                offset: word_offset,
                cause: WordReject::WordOverrun,
            });
            return GroupOutcome::EndOfData;
        };
        let (word, decoder) = text::decode_word(word_bytes);
        note_decoder(self.sink, word_offset, decoder, &word);

        let Some(ext_len) = self.reader.read_u16() else {
            return GroupOutcome::EndOfData;
        };
        let ext_offset = self.reader.position();
        let frequency = if ext_len >= 2 {
            self.reader
                .peek_u16()
                .map(u32::from)
                .unwrap_or(DEFAULT_FREQUENCY)
        } else {
            DEFAULT_FREQUENCY
        };
        if !self.reader.skip(ext_len as usize) {
            self.sink.emit(ParseEvent::WordRejected {
                offset: ext_offset,
                cause: WordReject::ExtensionOverrun,
            });
            return GroupOutcome::EndOfData;
        }

        self.items.push(VocabularyItem {
            word,
            pinyin: pinyin.to_string(),
            frequency,
        });
        GroupOutcome::Complete
    }
}
