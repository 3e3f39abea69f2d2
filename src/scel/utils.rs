//! Low-level byte reading utilities

use byteorder::{ByteOrder, LittleEndian};

/// Bounds-checked cursor over an immutable byte buffer.
///
/// Every read returns `None` instead of panicking when it would leave the
/// buffer, and a failed read never moves the cursor.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Creates a reader positioned at `position` (which may lie past the end).
    pub fn at(data: &'a [u8], position: usize) -> Self {
        Self { data, position }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn seek(&mut self, position: usize) {
        self.position = position;
    }

    /// Whether `len` more bytes can be read from the current position.
    pub fn has(&self, len: usize) -> bool {
        fits(self.data, self.position, len)
    }

    /// Read a little-endian u16 and advance.
    pub fn read_u16(&mut self) -> Option<u16> {
        let value = u16_at(self.data, self.position)?;
        self.position += 2;
        Some(value)
    }

    /// Borrow `len` bytes and advance.
    pub fn read_bytes(&mut self, len: usize) -> Option<&'a [u8]> {
        let bytes = slice_at(self.data, self.position, len)?;
        self.position += len;
        Some(bytes)
    }

    /// Advance `len` bytes if they exist.
    pub fn skip(&mut self, len: usize) -> bool {
        if !self.has(len) {
            return false;
        }
        self.position += len;
        true
    }

    /// Look at a u16 at the current position without advancing.
    pub fn peek_u16(&self) -> Option<u16> {
        u16_at(self.data, self.position)
    }
}

/// Whether `[offset, offset + len)` lies inside `data`.
pub fn fits(data: &[u8], offset: usize, len: usize) -> bool {
    offset.checked_add(len).is_some_and(|end| end <= data.len())
}

/// Read a little-endian u16 at an absolute offset.
pub fn u16_at(data: &[u8], offset: usize) -> Option<u16> {
    slice_at(data, offset, 2).map(LittleEndian::read_u16)
}

/// Borrow `[offset, offset + len)` if it lies inside `data`.
pub fn slice_at(data: &[u8], offset: usize, len: usize) -> Option<&[u8]> {
    let end = offset.checked_add(len)?;
    data.get(offset..end)
}

/// Format up to the first `limit` bytes as spaced upper-case hex (`40 15 00 00`).
pub fn hex_dump(data: &[u8], limit: usize) -> String {
    data.iter()
        .take(limit)
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
