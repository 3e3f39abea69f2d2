//! Fixed offsets, scan windows and loop ceilings of the .scel layout.
//!
//! ```text
//! File Structure:
//! ┌──────────────────────┐ 0x0000
//! │  Signature           │ ← format::header::validate()
//! ├──────────────────────┤ 0x0130
//! │  Name / Category /   │ ← format::metadata::parse()
//! │  Description /       │
//! │  Examples (UTF-16LE) │
//! ├──────────────────────┤ 0x1540 (usually)
//! │  Pinyin table        │ ← format::pinyin::parse()
//! ├──────────────────────┤ 0x2628 (usually)
//! │  Homophone groups    │ ← format::vocabulary::parse()
//! └──────────────────────┘
//! ```
//!
//! Older and newer dictionary builds shift the last two sections, which is
//! why both have a scan window next to their fixed offset.

use std::ops::Range;

/// Minimum buffer length accepted by the header check.
pub const MIN_HEADER_LEN: usize = 16;

/// Signature at offset 0.
pub const MAGIC: [u8; 4] = [0x40, 0x15, 0x00, 0x00];
/// Alternative signature, ASCII `DCS` at [`DCS_MARKER_OFFSET`].
pub const DCS_MARKER: [u8; 3] = *b"DCS";
pub const DCS_MARKER_OFFSET: usize = 4;

/// UTF-16LE metadata ranges `[start, end)`.
pub const NAME_RANGE: Range<usize> = 0x130..0x338;
pub const CATEGORY_RANGE: Range<usize> = 0x338..0x540;
pub const DESCRIPTION_RANGE: Range<usize> = 0x540..0xD40;
pub const EXAMPLES_RANGE: Range<usize> = 0xD40..0x1540;

/// Default start of the pinyin table (including its 4-byte sub-header).
pub const PINYIN_TABLE_OFFSET: usize = 0x1540;
/// Bytes opening the pinyin table sub-header.
pub const PINYIN_TABLE_MARKER: [u8; 2] = [0x9D, 0x01];
pub const PINYIN_TABLE_SCAN: Range<usize> = 0x1300..0x2600;
pub const PINYIN_TABLE_HEADER_LEN: usize = 4;
/// A syllable longer than this means the read is misaligned.
pub const MAX_SYLLABLE_BYTES: u16 = 100;
pub const MAX_PINYIN_ENTRIES: usize = 500;

/// Default start of the first homophone group.
pub const VOCABULARY_OFFSET: usize = 0x2628;
pub const VOCABULARY_SCAN: Range<usize> = 0x2000..0x3000;
pub const MAX_HOMOPHONES: u16 = 1000;
pub const MAX_PINYIN_INDEX_BYTES: u16 = 200;
pub const MAX_WORD_BYTES: u16 = 500;
pub const MAX_VOCABULARY_ITEMS: usize = 100_000;
/// Corrupt group headers tolerated per file; the next one ends the scan.
pub const MAX_CORRUPT_GROUPS: usize = 10;

/// Frequency assigned when a word carries no extension block.
pub const DEFAULT_FREQUENCY: u32 = 1;
