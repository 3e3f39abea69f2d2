//! # scel-reader
//!
//! A reader for Sogou cell dictionaries (`.scel`) that exports their
//! vocabulary as the tab-separated text accepted by
//! `ibus-libpinyin-import-text-db`.
//!
//! The binary layout differs between dictionary builds, so parsing is
//! heuristic: fixed offsets with scanning fallbacks, several text encodings
//! tried in turn, and bounded recovery from misaligned records. Problems
//! inside a file are reported through a [`DiagnosticSink`] instead of
//! aborting the conversion.
//!
//! ```no_run
//! use scel_reader::{LogSink, ScelReader};
//!
//! let reader = ScelReader::new("computer.scel").unwrap();
//! let dictionary = reader.parse(&mut LogSink);
//! for item in &dictionary.items {
//!     println!("{}\t{}\t{}", item.word, item.pinyin, item.frequency);
//! }
//! ```
pub mod scel;

// Re-export the main types for convenience
pub use scel::{
    convert_file,
    DiagnosticSink,
    LogSink,
    ParseEvent,
    ScelError,
    ScelReader,
    types::models::{
        ParsedDictionary,
        PinyinTable,
        ScelMetadata,
        Signature,
        VocabularyItem,
    },
};
