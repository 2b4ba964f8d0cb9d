//! Protocol frame header.

use codec::{CodecResult, FieldValue, Fields, Record};
use schema::{FieldDef, Layout};

/// Wire layout of [`ProtocolHeader`].
pub const HEADER_LAYOUT: Layout = Layout::new(
    "ProtocolHeader",
    &[
        FieldDef::u16("magic"),
        FieldDef::u8("version"),
        FieldDef::u8("command_id"),
        FieldDef::u32("payload_length"),
        FieldDef::u32("sequence_id"),
        FieldDef::u16("checksum"),
    ],
);

/// Fixed 14-byte header preceding every payload.
///
/// The checksum is carried verbatim; this crate never computes or checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProtocolHeader {
    pub magic: u16,
    pub version: u8,
    pub command_id: u8,
    pub payload_length: u32,
    pub sequence_id: u32,
    pub checksum: u16,
}

impl ProtocolHeader {
    /// Encoded size in bytes.
    pub const HEADER_SIZE: usize = 14;

    /// Returns a copy describing `payload`: `command_id` and `payload_length`
    /// are replaced, every other field is kept.
    ///
    /// Fails with `PayloadTooLarge` if the payload length does not fit in `u32`.
    pub fn for_payload(self, command_id: u8, payload: &[u8]) -> CodecResult<Self> {
        let payload_length =
            u32::try_from(payload.len()).map_err(|_| bytestream::ByteError::PayloadTooLarge {
                len: payload.len(),
                prefix: bytestream::PrefixWidth::U32,
            })?;
        Ok(Self {
            command_id,
            payload_length,
            ..self
        })
    }
}

impl Record for ProtocolHeader {
    const LAYOUT: &'static Layout = &HEADER_LAYOUT;

    fn to_values(&self) -> Vec<FieldValue> {
        vec![
            self.magic.into(),
            self.version.into(),
            self.command_id.into(),
            self.payload_length.into(),
            self.sequence_id.into(),
            self.checksum.into(),
        ]
    }

    fn from_fields(fields: &mut Fields) -> CodecResult<Self> {
        Ok(Self {
            magic: fields.take()?,
            version: fields.take()?,
            command_id: fields.take()?,
            payload_length: fields.take()?,
            sequence_id: fields.take()?,
            checksum: fields.take()?,
        })
    }
}
