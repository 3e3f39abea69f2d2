//! Diagnostics emitted while parsing.
//!
//! The parsers recover from almost everything they meet, but nothing is
//! dropped silently: each recovery, relocation or early stop becomes a
//! [`ParseEvent`] handed to the caller's [`DiagnosticSink`].
//!
//! - [`LogSink`] forwards events to the `log` facade (used by the CLI).
//! - `Vec<ParseEvent>` collects events (used by tests and embedders).

use std::fmt;

use log::Level;

use super::codec::text::TextDecoder;

/// Why a pinyin-table entry ended the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStop {
    ZeroLength,
    LengthTooLarge(u16),
    Overrun,
    EntryLimit,
}

/// Which group-header field was implausible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    HomophoneCount,
    PinyinIndexLength,
}

/// Why a word record was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordReject {
    LengthTooLarge(u16),
    WordOverrun,
    ExtensionOverrun,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    /// A metadata string starts past the end of the buffer.
    StringOutOfRange { offset: usize },
    /// A metadata string was cut to `length` bytes to stay inside the buffer.
    StringClamped { offset: usize, length: usize },
    /// A metadata string had an odd byte length and lost its last byte.
    StringOddLength { offset: usize, length: usize },
    PinyinMarkerFound { offset: usize },
    PinyinMarkerMissing { fallback: usize },
    /// Even the fallback offset does not fit in the buffer.
    PinyinTableOutOfRange { offset: usize },
    PinyinTableStopped { offset: usize, cause: TableStop },
    DuplicatePinyinIndex { index: u16, offset: usize },
    /// A string only decoded as a hex placeholder.
    DecodeFallback { offset: usize, placeholder: String },
    /// A string decoded with something other than UTF-16LE.
    AlternateEncoding { offset: usize, decoder: TextDecoder },
    VocabularyStartRecovered { offset: usize },
    VocabularyStartNotFound { fallback: usize },
    CorruptGroup { offset: usize, field: GroupField, value: u16 },
    CorruptGroupLimit { skipped: usize },
    WordRejected { offset: usize, cause: WordReject },
    ItemLimitReached { limit: usize },
}

impl ParseEvent {
    /// Severity used when the event is logged.
    pub fn level(&self) -> Level {
        match self {
            ParseEvent::PinyinMarkerFound { .. } | ParseEvent::VocabularyStartRecovered { .. } => {
                Level::Info
            }
            ParseEvent::AlternateEncoding { .. } => Level::Debug,
            ParseEvent::PinyinTableStopped { cause: TableStop::ZeroLength, .. } => Level::Debug,
            _ => Level::Warn,
        }
    }
}

impl fmt::Display for ParseEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseEvent::StringOutOfRange { offset } => {
                write!(f, "string offset out of range @ {:#06x}", offset)
            }
            ParseEvent::StringClamped { offset, length } => {
                write!(f, "string @ {:#06x} clamped to {} bytes", offset, length)
            }
            ParseEvent::StringOddLength { offset, length } => {
                write!(f, "string @ {:#06x} trimmed to even length {}", offset, length)
            }
            ParseEvent::PinyinMarkerFound { offset } => {
                write!(f, "pinyin table found @ {:#06x}", offset)
            }
            ParseEvent::PinyinMarkerMissing { fallback } => {
                write!(f, "pinyin table marker not found, using default @ {:#06x}", fallback)
            }
            ParseEvent::PinyinTableOutOfRange { offset } => {
                write!(f, "pinyin table offset {:#06x} is beyond end of file", offset)
            }
            ParseEvent::PinyinTableStopped { offset, cause } => match cause {
                TableStop::ZeroLength => write!(f, "zero-length syllable @ {:#06x}, end of pinyin table", offset),
                TableStop::LengthTooLarge(len) => {
                    write!(f, "implausible syllable length {} @ {:#06x}", len, offset)
                }
                TableStop::Overrun => write!(f, "syllable data overruns file @ {:#06x}", offset),
                TableStop::EntryLimit => {
                    write!(f, "pinyin table entry limit reached @ {:#06x}", offset)
                }
            },
            ParseEvent::DuplicatePinyinIndex { index, offset } => {
                write!(f, "duplicate pinyin index {:#06x} @ {:#06x}", index, offset)
            }
            ParseEvent::DecodeFallback { offset, placeholder } => {
                write!(f, "undecodable string @ {:#06x}, emitted as {}", offset, placeholder)
            }
            ParseEvent::AlternateEncoding { offset, decoder } => {
                write!(f, "string @ {:#06x} decoded as {}", offset, decoder.name())
            }
            ParseEvent::VocabularyStartRecovered { offset } => {
                write!(f, "vocabulary start relocated to {:#06x}", offset)
            }
            ParseEvent::VocabularyStartNotFound { fallback } => {
                write!(f, "vocabulary start not found, using default @ {:#06x}", fallback)
            }
            ParseEvent::CorruptGroup { offset, field, value } => {
                let name = match field {
                    GroupField::HomophoneCount => "homophone count",
                    GroupField::PinyinIndexLength => "pinyin index length",
                };
                write!(f, "implausible {} {} @ {:#06x}", name, value, offset)
            }
            ParseEvent::CorruptGroupLimit { skipped } => {
                write!(f, "giving up after {} corrupt groups", skipped)
            }
            ParseEvent::WordRejected { offset, cause } => match cause {
                WordReject::LengthTooLarge(len) => {
                    write!(f, "implausible word length {} @ {:#06x}", len, offset)
                }
                WordReject::WordOverrun => write!(f, "word data overruns file @ {:#06x}", offset),
                WordReject::ExtensionOverrun => {
                    write!(f, "extension data overruns file @ {:#06x}", offset)
                }
            },
            ParseEvent::ItemLimitReached { limit } => {
                write!(f, "vocabulary item limit {} reached", limit)
            }
        }
    }
}

/// Receiver for parser diagnostics.
pub trait DiagnosticSink {
    fn emit(&mut self, event: ParseEvent);
}

/// Forwards every event to the `log` facade at [`ParseEvent::level`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&mut self, event: ParseEvent) {
        log::log!(event.level(), "{}", event);
    }
}

impl DiagnosticSink for Vec<ParseEvent> {
    fn emit(&mut self, event: ParseEvent) {
        self.push(event);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, event: ParseEvent) {
        (**self).emit(event);
    }
}
