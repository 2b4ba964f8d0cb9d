//! Bounds-checked byte source for little-endian decoding.

use crate::error::{ByteError, ByteResult};
use crate::prefix::PrefixWidth;

/// A sequential reader over an immutable byte slice.
///
/// Every read either consumes exactly the bytes it needs or fails with
/// [`ByteError::BufferUnderflow`] and leaves the position untouched.
/// The reader never panics on malformed input.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` positioned at the start of `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    pub fn read_u8(&mut self) -> ByteResult<u8> {
        let [byte] = self.read_fixed::<1>()?;
        Ok(byte)
    }

    pub fn read_u16(&mut self) -> ByteResult<u16> {
        self.read_fixed().map(u16::from_le_bytes)
    }

    pub fn read_u32(&mut self) -> ByteResult<u32> {
        self.read_fixed().map(u32::from_le_bytes)
    }

    pub fn read_u64(&mut self) -> ByteResult<u64> {
        self.read_fixed().map(u64::from_le_bytes)
    }

    pub fn read_i8(&mut self) -> ByteResult<i8> {
        self.read_u8().map(|v| v as i8)
    }

    pub fn read_i16(&mut self) -> ByteResult<i16> {
        self.read_u16().map(|v| v as i16)
    }

    pub fn read_i32(&mut self) -> ByteResult<i32> {
        self.read_u32().map(|v| v as i32)
    }

    pub fn read_i64(&mut self) -> ByteResult<i64> {
        self.read_u64().map(|v| v as i64)
    }

    /// Reads an `f32` from its raw IEEE-754 bit pattern.
    pub fn read_f32(&mut self) -> ByteResult<f32> {
        self.read_u32().map(f32::from_bits)
    }

    /// Reads an `f64` from its raw IEEE-754 bit pattern.
    pub fn read_f64(&mut self) -> ByteResult<f64> {
        self.read_u64().map(f64::from_bits)
    }

    /// Reads a one-byte boolean. Any non-zero byte is `true`.
    pub fn read_bool(&mut self) -> ByteResult<bool> {
        self.read_u8().map(|v| v != 0)
    }

    /// Reads exactly `len` bytes, borrowed from the underlying slice.
    pub fn read_bytes(&mut self, len: usize) -> ByteResult<&'a [u8]> {
        self.ensure_bytes(len)?;
        let data: &'a [u8] = self.data;
        let out = &data[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    /// Reads exactly `N` bytes into an array.
    pub fn read_fixed<const N: usize>(&mut self) -> ByteResult<[u8; N]> {
        self.ensure_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }

    /// Reads a `prefix`-wide length followed by that many payload bytes.
    ///
    /// If the payload is short, neither the prefix nor the payload is consumed.
    pub fn read_prefixed(&mut self, prefix: PrefixWidth) -> ByteResult<&'a [u8]> {
        let start = self.pos;
        let len = match prefix {
            PrefixWidth::U8 => usize::from(self.read_u8()?),
            PrefixWidth::U16 => usize::from(self.read_u16()?),
            PrefixWidth::U32 => self.read_u32()? as usize,
        };
        match self.read_bytes(len) {
            Ok(payload) => Ok(payload),
            Err(err) => {
                self.pos = start;
                Err(err)
            }
        }
    }

    fn ensure_bytes(&self, len: usize) -> ByteResult<()> {
        let available = self.remaining();
        if len > available {
            return Err(ByteError::BufferUnderflow {
                requested: len,
                available,
            });
        }
        Ok(())
    }
}
