//! Layout-driven record encoding/decoding for the devproto codec.
//!
//! This crate ties together bytestream and schema: a [`schema::Layout`]
//! describes a record's fields, and [`encode_record`] / [`decode_record`] walk
//! that description to move [`FieldValue`]s on and off the wire. Typed message
//! structs sit on top through the [`Record`] trait.
//!
//! # Features
//!
//! - Generic encode/decode driven by a declarative field list
//! - Nested fixed-size records and length-prefixed record lists
//! - Range and length validation on encode
//! - Decode limits for variable-length fields and record lists
//!
//! # Design Principles
//!
//! - **Correctness first** - A failed decode never yields a partial record.
//! - **Deterministic** - Same inputs produce same outputs.
//! - **One engine** - Every record goes through the same two functions.

mod error;
mod limits;
mod record;
mod typed;
mod value;

pub use bytestream::{ByteError, PrefixWidth};
pub use error::{CodecError, CodecResult, LimitKind, ValueReason};
pub use limits::CodecLimits;
pub use record::{decode_record, encode_record};
pub use typed::{Fields, Record};
pub use value::{FieldValue, FromFieldValue};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = CodecLimits::default();
        let _ = FieldValue::UInt(0);
        let _: CodecResult<()> = Ok(());
    }

    #[test]
    fn byte_errors_convert() {
        let err: CodecError = ByteError::BufferUnderflow {
            requested: 4,
            available: 0,
        }
        .into();
        assert!(err.is_underflow());
    }
}
