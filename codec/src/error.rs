//! Error types for codec operations.

use std::fmt;

use bytestream::ByteError;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during record encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Byte-level error: buffer underflow on read, or an oversized
    /// length-prefixed payload on write.
    Bytes(ByteError),

    /// A value does not match its field definition.
    InvalidValue {
        record: &'static str,
        field: &'static str,
        reason: ValueReason,
    },

    /// Number of values does not match the number of fields in the layout.
    FieldCountMismatch {
        record: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A nested record field refers to a layout with variable-length fields.
    UnsizedNested {
        record: &'static str,
        field: &'static str,
    },

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// Bytes remained after the last field and the limits reject them.
    TrailingBytes {
        record: &'static str,
        remaining: usize,
    },

    /// No catalog entry carries this command id.
    UnknownCommand { command_id: u8 },
}

/// Specific limit that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    VariableBytes,
    ListRecords,
}

/// Details for invalid value errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueReason {
    UnsignedOutOfRange { bits: u32, value: u64 },
    SignedOutOfRange { bits: u32, value: i64 },
    FixedLengthMismatch { expected: usize, actual: usize },
    MisalignedList { len: usize, stride: usize },
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl CodecError {
    /// Returns `true` if the input ended before a read could complete.
    #[must_use]
    pub const fn is_underflow(&self) -> bool {
        matches!(self, Self::Bytes(ByteError::BufferUnderflow { .. }))
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(e) => write!(f, "byte stream error: {e}"),
            Self::InvalidValue {
                record,
                field,
                reason,
            } => {
                write!(f, "invalid value for {record}.{field}: {reason}")
            }
            Self::FieldCountMismatch {
                record,
                expected,
                actual,
            } => {
                write!(f, "{record} expects {expected} field values, got {actual}")
            }
            Self::UnsizedNested { record, field } => {
                write!(f, "nested record {record}.{field} has no fixed size")
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
            Self::TrailingBytes { record, remaining } => {
                write!(f, "{remaining} trailing bytes after {record}")
            }
            Self::UnknownCommand { command_id } => {
                write!(f, "unknown command id 0x{command_id:02X}")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::VariableBytes => "variable-length bytes",
            Self::ListRecords => "records per list",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for ValueReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsignedOutOfRange { bits, value } => {
                write!(f, "unsigned value {value} does not fit in {bits} bits")
            }
            Self::SignedOutOfRange { bits, value } => {
                write!(f, "signed value {value} does not fit in {bits} bits")
            }
            Self::FixedLengthMismatch { expected, actual } => {
                write!(f, "expected exactly {expected} bytes, got {actual}")
            }
            Self::MisalignedList { len, stride } => {
                write!(
                    f,
                    "list span of {len} bytes is not a multiple of the {stride}-byte record size"
                )
            }
            Self::TypeMismatch { expected, found } => {
                write!(f, "expected {expected} but got {found}")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bytes(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ByteError> for CodecError {
    fn from(err: ByteError) -> Self {
        Self::Bytes(err)
    }
}
