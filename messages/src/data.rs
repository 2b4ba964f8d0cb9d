use codec::{CodecResult, FieldValue, Fields, Record};
use schema::{FieldDef, Layout, PrefixWidth};

use crate::catalog::{Message, MessageKind};
use crate::command_ids;
use crate::enums::ErrorCode;

pub const SEND_DATA_COMMAND_LAYOUT: Layout = Layout::command(
    "SendDataCommand",
    command_ids::SEND_DATA_COMMAND,
    &[
        FieldDef::u8("channel"),
        FieldDef::u8("priority"),
        FieldDef::bytes("data", PrefixWidth::U16),
    ],
);

pub const SEND_DATA_RESPONSE_LAYOUT: Layout = Layout::command(
    "SendDataResponse",
    command_ids::SEND_DATA_RESPONSE,
    &[
        FieldDef::bool("success"),
        FieldDef::u8("error_code"),
        FieldDef::u32("bytes_written"),
    ],
);

/// Raw payload for a device channel. `data` holds at most 65535 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SendDataCommand {
    pub channel: u8,
    pub priority: u8,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendDataResponse {
    pub success: bool,
    pub error_code: ErrorCode,
    pub bytes_written: u32,
}

impl Record for SendDataCommand {
    const LAYOUT: &'static Layout = &SEND_DATA_COMMAND_LAYOUT;

    fn to_values(&self) -> Vec<FieldValue> {
        vec![
            self.channel.into(),
            self.priority.into(),
            self.data.as_slice().into(),
        ]
    }

    fn from_fields(fields: &mut Fields) -> CodecResult<Self> {
        Ok(Self {
            channel: fields.take()?,
            priority: fields.take()?,
            data: fields.take()?,
        })
    }
}

impl Message for SendDataCommand {
    const COMMAND_ID: u8 = command_ids::SEND_DATA_COMMAND;
    const KIND: MessageKind = MessageKind::SendDataCommand;
}

impl Record for SendDataResponse {
    const LAYOUT: &'static Layout = &SEND_DATA_RESPONSE_LAYOUT;

    fn to_values(&self) -> Vec<FieldValue> {
        vec![
            self.success.into(),
            u8::from(self.error_code).into(),
            self.bytes_written.into(),
        ]
    }

    fn from_fields(fields: &mut Fields) -> CodecResult<Self> {
        Ok(Self {
            success: fields.take()?,
            error_code: fields.take::<u8>()?.into(),
            bytes_written: fields.take()?,
        })
    }
}

impl Message for SendDataResponse {
    const COMMAND_ID: u8 = command_ids::SEND_DATA_RESPONSE;
    const KIND: MessageKind = MessageKind::SendDataResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use codec::{ByteError, CodecError};

    #[test]
    fn send_data_prefix_and_payload() {
        let command = SendDataCommand {
            channel: 2,
            priority: 7,
            data: vec![0xDE, 0xAD],
        };
        let bytes = command.serialize().unwrap();
        assert_eq!(bytes, [2, 7, 2, 0, 0xDE, 0xAD]);
        assert_eq!(SendDataCommand::deserialize(&bytes).unwrap(), command);
    }

    #[test]
    fn send_data_rejects_oversized_payload() {
        let command = SendDataCommand {
            channel: 0,
            priority: 0,
            data: vec![0; 65_536],
        };
        let err = command.serialize().unwrap_err();
        assert_eq!(
            err,
            CodecError::Bytes(ByteError::PayloadTooLarge {
                len: 65_536,
                prefix: PrefixWidth::U16
            })
        );
    }

    #[test]
    fn send_data_response_bytes() {
        let response = SendDataResponse {
            success: true,
            error_code: ErrorCode::None,
            bytes_written: 512,
        };
        assert_eq!(response.serialize().unwrap(), [1, 0, 0, 2, 0, 0]);
    }

    #[test]
    fn send_data_response_nonzero_success_byte() {
        let decoded = SendDataResponse::deserialize(&[0x02, 0x03, 0, 0, 0, 0]).unwrap();
        assert!(decoded.success);
        assert_eq!(decoded.error_code, ErrorCode::Timeout);
    }
}
