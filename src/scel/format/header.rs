//! File signature check.
//!
//! Two on-disk variants are accepted:
//! ```text
//! [0..4]  40 15 00 00        magic
//! [4..7]  44 43 53 ("DCS")   marker
//! ```
//! Either one is enough. Nothing else in the header is validated.

use log::{debug, trace};

use crate::scel::layout::{DCS_MARKER, DCS_MARKER_OFFSET, MAGIC, MIN_HEADER_LEN};
use crate::scel::types::error::{Result, ScelError};
use crate::scel::types::models::Signature;
use crate::scel::utils;

/// Checks the buffer against both known signatures.
///
/// # Errors
/// - [`ScelError::TooSmall`] if the buffer is shorter than 16 bytes
/// - [`ScelError::InvalidSignature`] if neither signature matches
pub fn validate(data: &[u8]) -> Result<Signature> {
    if data.len() < MIN_HEADER_LEN {
        return Err(ScelError::TooSmall { len: data.len() });
    }
    trace!("Header bytes: {}", utils::hex_dump(data, MIN_HEADER_LEN));

    let signature = if data[..MAGIC.len()] == MAGIC {
        Signature::Magic
    } else if data[DCS_MARKER_OFFSET..DCS_MARKER_OFFSET + DCS_MARKER.len()] == DCS_MARKER {
        Signature::DcsMarker
    } else {
        return Err(ScelError::InvalidSignature {
            head: utils::hex_dump(data, MIN_HEADER_LEN),
        });
    };

    debug!("Signature matched: {}", signature);
    Ok(signature)
}

/// `true` if [`validate`] would accept the buffer.
pub fn is_valid(data: &[u8]) -> bool {
    validate(data).is_ok()
}
