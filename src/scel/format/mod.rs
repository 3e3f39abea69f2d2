//! File format parsing layer for .scel dictionaries.
//!
//! # Module Organization
//!
//! - [`header`]: signature check gating everything else
//! - [`metadata`]: fixed-offset descriptive strings
//! - [`pinyin`]: locating and reading the pinyin index table
//! - [`vocabulary`]: homophone groups into flat vocabulary items
//!
//! All parsers work on the whole file held in memory and report anomalies
//! through a [`DiagnosticSink`] rather than failing.

pub mod header;
pub mod metadata;
pub mod pinyin;
pub mod vocabulary;

use crate::scel::codec::text::TextDecoder;
use crate::scel::diagnostics::{DiagnosticSink, ParseEvent};

/// Reports strings that needed a fallback decoder.
pub(crate) fn note_decoder(
    sink: &mut dyn DiagnosticSink,
    offset: usize,
    decoder: TextDecoder,
    text: &str,
) {
    match decoder {
        TextDecoder::Utf16Le => {}
        TextDecoder::Hex => sink.emit(ParseEvent::DecodeFallback {
            offset,
            placeholder: text.to_string(),
        }),
        other => sink.emit(ParseEvent::AlternateEncoding {
            offset,
            decoder: other,
        }),
    }
}
