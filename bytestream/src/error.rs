//! Error types for byte stream operations.

use std::fmt;

use crate::prefix::PrefixWidth;

/// Result type for byte stream operations.
pub type ByteResult<T> = Result<T, ByteError>;

/// Errors that can occur during byte-level encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteError {
    /// Attempted to read past the end of the buffer.
    ///
    /// The reader position is unchanged when this is returned.
    BufferUnderflow {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes remaining.
        available: usize,
    },

    /// A length-prefixed payload is longer than its prefix can describe.
    PayloadTooLarge {
        /// Payload length in bytes.
        len: usize,
        /// Width of the length prefix.
        prefix: PrefixWidth,
    },
}

impl fmt::Display for ByteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferUnderflow {
                requested,
                available,
            } => {
                write!(
                    f,
                    "buffer underflow: attempted to read {requested} bytes but only {available} bytes remain"
                )
            }
            Self::PayloadTooLarge { len, prefix } => {
                write!(
                    f,
                    "payload of {len} bytes does not fit a {}-byte length prefix (max {})",
                    prefix.bytes(),
                    prefix.max_len()
                )
            }
        }
    }
}

impl std::error::Error for ByteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_buffer_underflow() {
        let err = ByteError::BufferUnderflow {
            requested: 8,
            available: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("underflow"));
        assert!(msg.contains("8 bytes"), "should mention requested bytes");
        assert!(msg.contains("3 bytes"), "should mention available bytes");
    }

    #[test]
    fn error_display_payload_too_large() {
        let err = ByteError::PayloadTooLarge {
            len: 70_000,
            prefix: PrefixWidth::U16,
        };
        let msg = err.to_string();
        assert!(msg.contains("70000"), "should mention the payload length");
        assert!(msg.contains("2-byte"), "should mention the prefix width");
        assert!(msg.contains("65535"), "should mention the maximum");
    }

    #[test]
    fn error_equality() {
        let err1 = ByteError::BufferUnderflow {
            requested: 4,
            available: 1,
        };
        let err2 = ByteError::BufferUnderflow {
            requested: 4,
            available: 1,
        };
        let err3 = ByteError::BufferUnderflow {
            requested: 4,
            available: 2,
        };
        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<ByteError>();
    }
}
