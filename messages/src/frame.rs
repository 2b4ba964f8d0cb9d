//! Header plus payload.

use bytestream::{ByteError, ByteReader};
use codec::{CodecError, CodecLimits, CodecResult, Record};

use crate::catalog::AnyMessage;
use crate::header::ProtocolHeader;

/// A decoded header and the message it introduces.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub header: ProtocolHeader,
    pub message: AnyMessage,
}

impl Frame {
    /// Encodes header then payload.
    ///
    /// `command_id` and `payload_length` are taken from the message; the other
    /// header fields are written as stored.
    pub fn encode(&self) -> CodecResult<Vec<u8>> {
        let payload = self.message.encode()?;
        let header = self
            .header
            .for_payload(self.message.command_id(), &payload)?;
        let mut out = header.serialize()?;
        out.extend_from_slice(&payload);
        Ok(out)
    }

    /// Decodes a frame with default limits.
    pub fn decode(bytes: &[u8]) -> CodecResult<Self> {
        Self::decode_with_limits(bytes, &CodecLimits::default())
    }

    /// Decodes a frame, dispatching the payload on the header's command id.
    pub fn decode_with_limits(bytes: &[u8], limits: &CodecLimits) -> CodecResult<Self> {
        let (header, payload) = split_frame(bytes, limits)?;
        let message = AnyMessage::decode_with_limits(header.command_id, payload, limits)?;
        Ok(Self { header, message })
    }
}

/// Splits a frame into its header and the `payload_length` bytes that follow.
///
/// Fails with an underflow if fewer payload bytes are present than the header
/// declares. Extra bytes after the payload are ignored unless `limits` rejects
/// trailing bytes.
pub fn split_frame<'a>(
    bytes: &'a [u8],
    limits: &CodecLimits,
) -> CodecResult<(ProtocolHeader, &'a [u8])> {
    let mut reader = ByteReader::new(bytes);
    let header = ProtocolHeader::deserialize(reader.read_bytes(ProtocolHeader::HEADER_SIZE)?)?;
    let declared = usize::try_from(header.payload_length).map_err(|_| {
        ByteError::BufferUnderflow {
            requested: usize::MAX,
            available: reader.remaining(),
        }
    })?;
    let payload = reader.read_bytes(declared)?;
    if limits.reject_trailing_bytes && !reader.is_empty() {
        return Err(CodecError::TrailingBytes {
            record: "frame",
            remaining: reader.remaining(),
        });
    }
    Ok((header, payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PingCommand, PingResponse};

    fn frame() -> Frame {
        Frame {
            header: ProtocolHeader {
                magic: 0xCAFE,
                version: 2,
                sequence_id: 77,
                checksum: 0x1234,
                ..ProtocolHeader::default()
            },
            message: PingCommand { timestamp: 42 }.into(),
        }
    }

    #[test]
    fn encode_fills_command_id_and_length() {
        let bytes = frame().encode().unwrap();
        assert_eq!(bytes.len(), ProtocolHeader::HEADER_SIZE + 8);
        assert_eq!(bytes[3], 0x01);
        assert_eq!(&bytes[4..8], &8u32.to_le_bytes());
        assert_eq!(&bytes[12..14], &0x1234u16.to_le_bytes());
    }

    #[test]
    fn frame_roundtrip() {
        let frame = frame();
        let decoded = Frame::decode(&frame.encode().unwrap()).unwrap();
        assert_eq!(decoded.message, frame.message);
        assert_eq!(decoded.header.command_id, 0x01);
        assert_eq!(decoded.header.payload_length, 8);
        assert_eq!(decoded.header.sequence_id, 77);
    }

    #[test]
    fn short_payload_underflows() {
        let bytes = frame().encode().unwrap();
        let err = Frame::decode(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(err.is_underflow());
    }

    #[test]
    fn short_header_underflows() {
        let err = Frame::decode(&[0xFE, 0xCA, 0x02]).unwrap_err();
        assert!(err.is_underflow());
    }

    #[test]
    fn trailing_bytes_after_payload() {
        let mut bytes = frame().encode().unwrap();
        bytes.push(0);
        assert!(Frame::decode(&bytes).is_ok());
        let err = Frame::decode_with_limits(&bytes, &CodecLimits::default().strict()).unwrap_err();
        assert!(matches!(err, CodecError::TrailingBytes { remaining: 1, .. }));
    }

    #[test]
    fn payload_decoded_by_header_command_id() {
        let response = PingResponse {
            request_timestamp: 1,
            response_timestamp: 2,
        };
        let frame = Frame {
            header: ProtocolHeader::default(),
            message: response.into(),
        };
        let decoded = Frame::decode(&frame.encode().unwrap()).unwrap();
        assert_eq!(decoded.message, AnyMessage::PingResponse(response));
    }
}
