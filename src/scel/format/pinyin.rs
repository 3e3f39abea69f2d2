//! Pinyin index table parsing.
//!
//! # Table Structure
//! ```text
//! [4 bytes] Sub-header (starts with 9D 01)
//! repeated:
//!   [2 bytes] Index (little-endian u16)
//!   [2 bytes] Syllable length in bytes (little-endian u16)
//!   [N bytes] Syllable text
//! ```
//!
//! The table usually sits at 0x1540 but moves between dictionary builds, so
//! the marker is searched for first and the fixed offset is the fallback.
//! There is no reliable entry count; the table ends at the first entry that
//! does not look like a syllable.

use std::ops::Range;

use log::debug;

use super::note_decoder;
use crate::scel::codec::text;
use crate::scel::diagnostics::{DiagnosticSink, ParseEvent, TableStop};
use crate::scel::layout::{
    MAX_PINYIN_ENTRIES, MAX_SYLLABLE_BYTES, PINYIN_TABLE_HEADER_LEN, PINYIN_TABLE_MARKER,
    PINYIN_TABLE_OFFSET, PINYIN_TABLE_SCAN,
};
use crate::scel::types::models::PinyinTable;
use crate::scel::utils::{self, ByteReader};

/// Finds the first `9D 01` pair inside `window`.
pub fn scan_marker(data: &[u8], window: Range<usize>) -> Option<usize> {
    let end = window.end.min(data.len().saturating_sub(2));
    (window.start..end).find(|&i| data[i..i + 2] == PINYIN_TABLE_MARKER)
}

/// Returns the offset of the table sub-header, or `None` if no usable
/// location exists.
pub fn locate(data: &[u8], sink: &mut dyn DiagnosticSink) -> Option<usize> {
    if let Some(offset) = scan_marker(data, PINYIN_TABLE_SCAN) {
        sink.emit(ParseEvent::PinyinMarkerFound { offset });
        return Some(offset);
    }

    sink.emit(ParseEvent::PinyinMarkerMissing {
        fallback: PINYIN_TABLE_OFFSET,
    });
    if !utils::fits(data, PINYIN_TABLE_OFFSET, PINYIN_TABLE_HEADER_LEN) {
        sink.emit(ParseEvent::PinyinTableOutOfRange {
            offset: PINYIN_TABLE_OFFSET,
        });
        return None;
    }
    Some(PINYIN_TABLE_OFFSET)
}

/// Locates and reads the pinyin table.
///
/// Never fails: an unusable table comes back empty, and every index will
/// later be rendered as a `[0xNNNN]` placeholder.
pub fn parse(data: &[u8], sink: &mut dyn DiagnosticSink) -> PinyinTable {
    let mut table = PinyinTable::new();
    let Some(start) = locate(data, sink) else {
        return table;
    };
    debug!("Reading pinyin table from {:#06x}", start);

    let mut reader = ByteReader::at(data, start + PINYIN_TABLE_HEADER_LEN);
    while reader.has(4) {
        if table.len() >= MAX_PINYIN_ENTRIES {
            sink.emit(ParseEvent::PinyinTableStopped {
                offset: reader.position(),
                cause: TableStop::EntryLimit,
            });
            break;
        }

        let (Some(index), Some(length)) = (reader.read_u16(), reader.read_u16()) else {
            break;
        };
        let offset = reader.position();

        if length == 0 {
            sink.emit(ParseEvent::PinyinTableStopped {
                offset,
                cause: TableStop::ZeroLength,
            });
            break;
        }
        if length > MAX_SYLLABLE_BYTES {
            sink.emit(ParseEvent::PinyinTableStopped {
                offset,
                cause: TableStop::LengthTooLarge(length),
            });
            break;
        }
        let Some(bytes) = reader.read_bytes(length as usize) else {
            sink.emit(ParseEvent::PinyinTableStopped {
                offset,
                cause: TableStop::Overrun,
            });
            break;
        };

        let (syllable, decoder) = text::decode_pinyin(bytes);
        note_decoder(sink, offset, decoder, &syllable);
        if !table.insert(index, syllable) {
            sink.emit(ParseEvent::DuplicatePinyinIndex { index, offset });
        }
    }

    debug!("Pinyin table holds {} syllables", table.len());
    table
}
