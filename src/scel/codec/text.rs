//! Multi-encoding text decoding with a guaranteed fallback.
//!
//! Dictionaries in the wild were produced with different text encodings and
//! carry no encoding tag, so each string is decoded by trying an ordered
//! chain of strategies:
//!
//! ```text
//! pinyin: UTF-16LE → GB18030 → UTF-8 → hex placeholder
//! word:   UTF-16LE → GB18030 →         hex placeholder
//! ```
//!
//! A strategy either yields text or fails; malformed input is a failure,
//! never replacement characters. The hex placeholder always succeeds, so
//! decoding is total.

use encoding_rs::{Encoding, GB18030, UTF_16LE, UTF_8};

/// Number of leading bytes rendered by the hex placeholder.
pub const PLACEHOLDER_BYTES: usize = 8;

/// One decoding strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDecoder {
    Utf16Le,
    Gb18030,
    Utf8,
    /// `0x` + upper-case hex of the first [`PLACEHOLDER_BYTES`] bytes.
    Hex,
}

impl TextDecoder {
    pub fn name(&self) -> &'static str {
        match self {
            TextDecoder::Utf16Le => "UTF-16LE",
            TextDecoder::Gb18030 => "GB18030",
            TextDecoder::Utf8 => "UTF-8",
            TextDecoder::Hex => "hex",
        }
    }

    /// Decode `bytes`, or `None` if they are malformed for this strategy.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            TextDecoder::Utf16Le => strict(UTF_16LE, bytes),
            TextDecoder::Gb18030 => strict(GB18030, bytes),
            TextDecoder::Utf8 => strict(UTF_8, bytes),
            TextDecoder::Hex => Some(hex_placeholder(bytes)),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        *self == TextDecoder::Hex
    }
}

/// Strategy order for pinyin syllables.
pub const PINYIN_CHAIN: &[TextDecoder] = &[
    TextDecoder::Utf16Le,
    TextDecoder::Gb18030,
    TextDecoder::Utf8,
    TextDecoder::Hex,
];

/// Strategy order for words.
pub const WORD_CHAIN: &[TextDecoder] = &[
    TextDecoder::Utf16Le,
    TextDecoder::Gb18030,
    TextDecoder::Hex,
];

fn strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}

/// Runs `chain` in order and returns the first result accepted by `accept`,
/// together with the strategy that produced it.
///
/// The placeholder strategy bypasses `accept`. A chain that does not end in
/// [`TextDecoder::Hex`] still falls back to the placeholder.
pub fn decode_with(
    chain: &[TextDecoder],
    bytes: &[u8],
    accept: impl Fn(&str) -> bool,
) -> (String, TextDecoder) {
    for decoder in chain {
        if decoder.is_placeholder() {
            break;
        }
        if let Some(text) = decoder.decode(bytes) {
            if accept(&text) {
                return (text, *decoder);
            }
        }
    }
    (hex_placeholder(bytes), TextDecoder::Hex)
}

/// Decode a pinyin syllable (see [`is_valid_pinyin`]).
pub fn decode_pinyin(bytes: &[u8]) -> (String, TextDecoder) {
    decode_with(PINYIN_CHAIN, bytes, is_valid_pinyin)
}

/// Decode a word. Any non-empty, well-formed text is accepted.
pub fn decode_word(bytes: &[u8]) -> (String, TextDecoder) {
    decode_with(WORD_CHAIN, bytes, |text| !text.is_empty())
}

/// A syllable is non-blank and made only of ASCII letters, digits and
/// `' - space : .`.
pub fn is_valid_pinyin(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    text.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '\'' | '-' | ' ' | ':' | '.'))
}

/// `0x` followed by the upper-case hex of at most the first 8 bytes.
pub fn hex_placeholder(bytes: &[u8]) -> String {
    let shown = &bytes[..bytes.len().min(PLACEHOLDER_BYTES)];
    format!("0x{}", hex::encode_upper(shown))
}
