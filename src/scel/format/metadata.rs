//! Descriptive metadata stored at fixed offsets.
//!
//! Four UTF-16LE, zero-terminated fields live in the header area. They are
//! only displayed, so every problem degrades to an empty or shortened string.

use std::ops::Range;

use encoding_rs::UTF_16LE;

use crate::scel::diagnostics::{DiagnosticSink, ParseEvent};
use crate::scel::layout::{CATEGORY_RANGE, DESCRIPTION_RANGE, EXAMPLES_RANGE, NAME_RANGE};
use crate::scel::types::models::ScelMetadata;

/// Reads name, category, description and examples.
pub fn parse(data: &[u8], sink: &mut dyn DiagnosticSink) -> ScelMetadata {
    ScelMetadata {
        name: read_range(data, NAME_RANGE, sink),
        category: read_range(data, CATEGORY_RANGE, sink),
        description: read_range(data, DESCRIPTION_RANGE, sink),
        examples: read_range(data, EXAMPLES_RANGE, sink),
    }
}

fn read_range(data: &[u8], range: Range<usize>, sink: &mut dyn DiagnosticSink) -> String {
    read_utf16_string(data, range.start, range.len(), sink)
}

/// Decodes a zero-terminated UTF-16LE string from `data[start..start + length]`.
///
/// - A start past the end yields an empty string.
/// - A span running past the end is clamped.
/// - The first `00 00` code unit ends the string.
/// - An odd byte count drops its last byte.
/// - Trailing NUL characters are trimmed.
pub fn read_utf16_string(
    data: &[u8],
    start: usize,
    length: usize,
    sink: &mut dyn DiagnosticSink,
) -> String {
    if start >= data.len() {
        sink.emit(ParseEvent::StringOutOfRange { offset: start });
        return String::new();
    }

    let mut length = length;
    if length > data.len() - start {
        length = data.len() - start;
        sink.emit(ParseEvent::StringClamped { offset: start, length });
    }

    let span = &data[start..start + length];
    if let Some(unit) = span.chunks_exact(2).position(|unit| unit == [0, 0]) {
        length = unit * 2;
    }

    if length % 2 != 0 {
        length -= 1;
        sink.emit(ParseEvent::StringOddLength { offset: start, length });
    }
    if length == 0 {
        return String::new();
    }

    let (text, _) = UTF_16LE.decode_without_bom_handling(&span[..length]);
    text.trim_end_matches('\0').to_string()
}
