//! Little-endian byte primitives for the devproto codec.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`] for byte-level encoding
//! and decoding of fixed-width scalars, raw byte spans and length-prefixed payloads.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Floats move through their bit patterns, never through memory casts.
//! - **Atomic reads** - A failed read leaves the reader exactly where it was.
//! - **No domain knowledge** - This crate knows nothing about messages or command ids.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bytestream::{ByteReader, ByteWriter, PrefixWidth};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_u16(0xBEEF);
//! writer.write_bool(true);
//! writer.write_prefixed(PrefixWidth::U8, b"hi").unwrap();
//!
//! let bytes = writer.finish();
//! assert_eq!(bytes, [0xEF, 0xBE, 0x01, 0x02, b'h', b'i']);
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_u16().unwrap(), 0xBEEF);
//! assert!(reader.read_bool().unwrap());
//! assert_eq!(reader.read_prefixed(PrefixWidth::U8).unwrap(), b"hi");
//! ```

mod error;
mod prefix;
mod reader;
mod writer;

pub use error::{ByteError, ByteResult};
pub use prefix::PrefixWidth;
pub use reader::ByteReader;
pub use writer::ByteWriter;
