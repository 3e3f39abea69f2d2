//! Codec layer for text decoding.
//!
//! # Submodules
//!
//! - [`text`][]: ordered decoder chains (UTF-16LE, GB18030, UTF-8, hex placeholder)

pub mod text;
