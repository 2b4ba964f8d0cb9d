//! Length prefix widths for variable-length payloads.

/// Width of the unsigned length prefix written before a variable-length payload.
///
/// The width is a property of the field, not of the data: nothing on the wire
/// says how wide a prefix is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixWidth {
    /// One-byte prefix (payloads up to 255 bytes).
    U8,
    /// Two-byte little-endian prefix (payloads up to 65535 bytes).
    U16,
    /// Four-byte little-endian prefix.
    U32,
}

impl PrefixWidth {
    /// Number of bytes the prefix occupies on the wire.
    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 => 4,
        }
    }

    /// Largest payload length the prefix can represent.
    #[must_use]
    pub const fn max_len(self) -> usize {
        match self {
            Self::U8 => u8::MAX as usize,
            Self::U16 => u16::MAX as usize,
            Self::U32 => u32::MAX as usize,
        }
    }

    /// Returns `true` if a payload of `len` bytes can be described by this prefix.
    #[must_use]
    pub const fn fits(self, len: usize) -> bool {
        len <= self.max_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_byte_widths() {
        assert_eq!(PrefixWidth::U8.bytes(), 1);
        assert_eq!(PrefixWidth::U16.bytes(), 2);
        assert_eq!(PrefixWidth::U32.bytes(), 4);
    }

    #[test]
    fn prefix_max_lengths() {
        assert_eq!(PrefixWidth::U8.max_len(), 255);
        assert_eq!(PrefixWidth::U16.max_len(), 65_535);
        assert_eq!(PrefixWidth::U32.max_len(), 4_294_967_295);
    }

    #[test]
    fn prefix_fits_boundary() {
        assert!(PrefixWidth::U8.fits(255));
        assert!(!PrefixWidth::U8.fits(256));
        assert!(PrefixWidth::U16.fits(65_535));
        assert!(!PrefixWidth::U16.fits(65_536));
    }
}
