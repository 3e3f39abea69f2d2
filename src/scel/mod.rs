//! Core .scel reader module

pub mod batch;
pub mod codec;
pub mod diagnostics;
pub mod export;
pub mod format;
pub mod layout;
pub mod merge;
pub mod reader;
pub mod types;
pub mod utils;

pub use diagnostics::{DiagnosticSink, LogSink, ParseEvent};
pub use reader::{convert_file, ScelReader};
pub use types::error::{Result, ScelError};
