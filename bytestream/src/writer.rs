//! Append-only byte sink for little-endian encoding.

use crate::error::{ByteError, ByteResult};
use crate::prefix::PrefixWidth;

/// An append-only writer that accumulates little-endian encoded values.
///
/// The buffer grows without bound. Call [`finish`](Self::finish) to take the
/// accumulated bytes.
#[derive(Debug, Default)]
pub struct ByteWriter {
    bytes: Vec<u8>,
}

impl ByteWriter {
    /// Creates a new empty `ByteWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `ByteWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn write_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i8(&mut self, value: i8) {
        self.write_u8(value as u8);
    }

    pub fn write_i16(&mut self, value: i16) {
        self.write_u16(value as u16);
    }

    pub fn write_i32(&mut self, value: i32) {
        self.write_u32(value as u32);
    }

    pub fn write_i64(&mut self, value: i64) {
        self.write_u64(value as u64);
    }

    /// Writes the raw IEEE-754 bit pattern of an `f32`.
    pub fn write_f32(&mut self, value: f32) {
        self.write_u32(value.to_bits());
    }

    /// Writes the raw IEEE-754 bit pattern of an `f64`.
    pub fn write_f64(&mut self, value: f64) {
        self.write_u64(value.to_bits());
    }

    /// Writes a boolean as a single byte: `1` for true, `0` for false.
    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(u8::from(value));
    }

    /// Appends bytes verbatim.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Appends exactly `N` bytes.
    pub fn write_fixed<const N: usize>(&mut self, bytes: &[u8; N]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Writes the payload length as a `prefix`-wide integer followed by the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ByteError::PayloadTooLarge`] if the length does not fit the
    /// prefix. Nothing is written in that case.
    pub fn write_prefixed(&mut self, prefix: PrefixWidth, payload: &[u8]) -> ByteResult<()> {
        let len = payload.len();
        if !prefix.fits(len) {
            return Err(ByteError::PayloadTooLarge { len, prefix });
        }
        // Checked by `fits` above.
        match prefix {
            PrefixWidth::U8 => self.write_u8(len as u8),
            PrefixWidth::U16 => self.write_u16(len as u16),
            PrefixWidth::U32 => self.write_u32(len as u32),
        }
        self.write_bytes(payload);
        Ok(())
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }

    /// Finishes writing and appends to the provided buffer.
    pub fn finish_into(mut self, buf: &mut Vec<u8>) {
        buf.append(&mut self.bytes);
    }
}
