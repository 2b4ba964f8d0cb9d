//! Field kinds and field definitions.

use bytestream::PrefixWidth;

use crate::layout::Layout;

/// Width of a fixed-width integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    /// Number of bytes the integer occupies on the wire.
    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            Self::W8 => 1,
            Self::W16 => 2,
            Self::W32 => 4,
            Self::W64 => 8,
        }
    }

    /// Number of bits in the integer.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bytes() as u32 * 8
    }
}

/// Width of an IEEE-754 float field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    F32,
    F64,
}

impl FloatWidth {
    /// Number of bytes the float occupies on the wire.
    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            Self::F32 => 4,
            Self::F64 => 8,
        }
    }
}

/// The wire encoding of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Unsigned little-endian integer.
    UInt(IntWidth),

    /// Signed little-endian integer (two's complement).
    SInt(IntWidth),

    /// IEEE-754 float, written as its raw bit pattern.
    Float(FloatWidth),

    /// One byte: `1`/`0` on write, any non-zero byte is true on read.
    Bool,

    /// Exactly `len` raw bytes. No terminator or text encoding is implied.
    FixedBytes { len: usize },

    /// Raw bytes preceded by their length as a `prefix`-wide integer.
    Bytes { prefix: PrefixWidth },

    /// A fixed-size sub-record encoded independently and spliced in.
    Record(&'static Layout),

    /// A sequence of fixed-size sub-records; the prefix holds the total byte length.
    RecordList {
        prefix: PrefixWidth,
        layout: &'static Layout,
    },
}

impl FieldKind {
    /// Encoded size of the field, or `None` if it varies with the value.
    #[must_use]
    pub const fn wire_size(&self) -> Option<usize> {
        match self {
            Self::UInt(width) | Self::SInt(width) => Some(width.bytes()),
            Self::Float(width) => Some(width.bytes()),
            Self::Bool => Some(1),
            Self::FixedBytes { len } => Some(*len),
            Self::Record(layout) => layout.fixed_size(),
            Self::Bytes { .. } | Self::RecordList { .. } => None,
        }
    }

    /// Short human-readable name of the kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UInt(IntWidth::W8) => "u8",
            Self::UInt(IntWidth::W16) => "u16",
            Self::UInt(IntWidth::W32) => "u32",
            Self::UInt(IntWidth::W64) => "u64",
            Self::SInt(IntWidth::W8) => "i8",
            Self::SInt(IntWidth::W16) => "i16",
            Self::SInt(IntWidth::W32) => "i32",
            Self::SInt(IntWidth::W64) => "i64",
            Self::Float(FloatWidth::F32) => "f32",
            Self::Float(FloatWidth::F64) => "f64",
            Self::Bool => "bool",
            Self::FixedBytes { .. } => "fixed-bytes",
            Self::Bytes { .. } => "bytes",
            Self::Record(_) => "record",
            Self::RecordList { .. } => "record-list",
        }
    }
}

/// A named field within a layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    /// Creates a field definition.
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    #[must_use]
    pub const fn u8(name: &'static str) -> Self {
        Self::new(name, FieldKind::UInt(IntWidth::W8))
    }

    #[must_use]
    pub const fn u16(name: &'static str) -> Self {
        Self::new(name, FieldKind::UInt(IntWidth::W16))
    }

    #[must_use]
    pub const fn u32(name: &'static str) -> Self {
        Self::new(name, FieldKind::UInt(IntWidth::W32))
    }

    #[must_use]
    pub const fn u64(name: &'static str) -> Self {
        Self::new(name, FieldKind::UInt(IntWidth::W64))
    }

    #[must_use]
    pub const fn i8(name: &'static str) -> Self {
        Self::new(name, FieldKind::SInt(IntWidth::W8))
    }

    #[must_use]
    pub const fn i16(name: &'static str) -> Self {
        Self::new(name, FieldKind::SInt(IntWidth::W16))
    }

    #[must_use]
    pub const fn i32(name: &'static str) -> Self {
        Self::new(name, FieldKind::SInt(IntWidth::W32))
    }

    #[must_use]
    pub const fn i64(name: &'static str) -> Self {
        Self::new(name, FieldKind::SInt(IntWidth::W64))
    }

    #[must_use]
    pub const fn f32(name: &'static str) -> Self {
        Self::new(name, FieldKind::Float(FloatWidth::F32))
    }

    #[must_use]
    pub const fn f64(name: &'static str) -> Self {
        Self::new(name, FieldKind::Float(FloatWidth::F64))
    }

    #[must_use]
    pub const fn bool(name: &'static str) -> Self {
        Self::new(name, FieldKind::Bool)
    }

    #[must_use]
    pub const fn fixed_bytes(name: &'static str, len: usize) -> Self {
        Self::new(name, FieldKind::FixedBytes { len })
    }

    #[must_use]
    pub const fn bytes(name: &'static str, prefix: PrefixWidth) -> Self {
        Self::new(name, FieldKind::Bytes { prefix })
    }

    #[must_use]
    pub const fn record(name: &'static str, layout: &'static Layout) -> Self {
        Self::new(name, FieldKind::Record(layout))
    }

    #[must_use]
    pub const fn record_list(
        name: &'static str,
        prefix: PrefixWidth,
        layout: &'static Layout,
    ) -> Self {
        Self::new(name, FieldKind::RecordList { prefix, layout })
    }
}
