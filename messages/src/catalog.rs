//! The message catalog: every record shape, its command id, and dispatch from
//! a command id to the matching decoder.

use codec::{CodecError, CodecLimits, CodecResult, Record};
use schema::Layout;
use tracing::debug;

use crate::batch::{BatchCommand, BatchResponse, BATCH_COMMAND_LAYOUT, BATCH_RESPONSE_LAYOUT};
use crate::command_ids;
use crate::config::{
    SetConfigCommand, SetConfigResponse, SET_CONFIG_COMMAND_LAYOUT, SET_CONFIG_RESPONSE_LAYOUT,
};
use crate::data::{
    SendDataCommand, SendDataResponse, SEND_DATA_COMMAND_LAYOUT, SEND_DATA_RESPONSE_LAYOUT,
};
use crate::device::{
    DeviceInfoResponse, GetDeviceInfoCommand, DEVICE_INFO_RESPONSE_LAYOUT,
    GET_DEVICE_INFO_COMMAND_LAYOUT,
};
use crate::header::HEADER_LAYOUT;
use crate::ping::{PingCommand, PingResponse, PING_COMMAND_LAYOUT, PING_RESPONSE_LAYOUT};
use crate::sensor::{
    SensorDataResponse, SENSOR_DATA_LAYOUT, SENSOR_DATA_RESPONSE_LAYOUT, VECTOR3D_LAYOUT,
};

/// A record that travels as a payload under its own command id.
pub trait Message: Record {
    const COMMAND_ID: u8;
    const KIND: MessageKind;
}

/// Names every record in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    ProtocolHeader,
    PingCommand,
    PingResponse,
    GetDeviceInfoCommand,
    DeviceInfoResponse,
    SendDataCommand,
    SendDataResponse,
    SetConfigCommand,
    SetConfigResponse,
    BatchCommand,
    BatchResponse,
    Vector3D,
    SensorData,
    SensorDataResponse,
}

impl MessageKind {
    /// Every catalog entry, header first.
    pub const ALL: [Self; 14] = [
        Self::ProtocolHeader,
        Self::PingCommand,
        Self::PingResponse,
        Self::GetDeviceInfoCommand,
        Self::DeviceInfoResponse,
        Self::SendDataCommand,
        Self::SendDataResponse,
        Self::SetConfigCommand,
        Self::SetConfigResponse,
        Self::BatchCommand,
        Self::BatchResponse,
        Self::Vector3D,
        Self::SensorData,
        Self::SensorDataResponse,
    ];

    #[must_use]
    pub const fn layout(self) -> &'static Layout {
        match self {
            Self::ProtocolHeader => &HEADER_LAYOUT,
            Self::PingCommand => &PING_COMMAND_LAYOUT,
            Self::PingResponse => &PING_RESPONSE_LAYOUT,
            Self::GetDeviceInfoCommand => &GET_DEVICE_INFO_COMMAND_LAYOUT,
            Self::DeviceInfoResponse => &DEVICE_INFO_RESPONSE_LAYOUT,
            Self::SendDataCommand => &SEND_DATA_COMMAND_LAYOUT,
            Self::SendDataResponse => &SEND_DATA_RESPONSE_LAYOUT,
            Self::SetConfigCommand => &SET_CONFIG_COMMAND_LAYOUT,
            Self::SetConfigResponse => &SET_CONFIG_RESPONSE_LAYOUT,
            Self::BatchCommand => &BATCH_COMMAND_LAYOUT,
            Self::BatchResponse => &BATCH_RESPONSE_LAYOUT,
            Self::Vector3D => &VECTOR3D_LAYOUT,
            Self::SensorData => &SENSOR_DATA_LAYOUT,
            Self::SensorDataResponse => &SENSOR_DATA_RESPONSE_LAYOUT,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.layout().name
    }

    #[must_use]
    pub const fn command_id(self) -> Option<u8> {
        self.layout().command_id
    }
}

/// Finds the catalog entry carrying `command_id`.
#[must_use]
pub fn lookup(command_id: u8) -> Option<MessageKind> {
    MessageKind::ALL
        .into_iter()
        .find(|kind| kind.command_id() == Some(command_id))
}

/// Any message that can appear as a framed payload.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyMessage {
    PingCommand(PingCommand),
    PingResponse(PingResponse),
    GetDeviceInfoCommand(GetDeviceInfoCommand),
    DeviceInfoResponse(DeviceInfoResponse),
    SendDataCommand(SendDataCommand),
    SendDataResponse(SendDataResponse),
    SetConfigCommand(SetConfigCommand),
    SetConfigResponse(SetConfigResponse),
    BatchCommand(BatchCommand),
    BatchResponse(BatchResponse),
    SensorDataResponse(SensorDataResponse),
}

impl AnyMessage {
    /// Decodes `payload` as the message named by `command_id`, with default limits.
    pub fn decode(command_id: u8, payload: &[u8]) -> CodecResult<Self> {
        Self::decode_with_limits(command_id, payload, &CodecLimits::default())
    }

    /// Decodes `payload` as the message named by `command_id`.
    pub fn decode_with_limits(
        command_id: u8,
        payload: &[u8],
        limits: &CodecLimits,
    ) -> CodecResult<Self> {
        let message = match command_id {
            command_ids::PING_COMMAND => {
                Self::PingCommand(PingCommand::deserialize_with_limits(payload, limits)?)
            }
            command_ids::PING_RESPONSE => {
                Self::PingResponse(PingResponse::deserialize_with_limits(payload, limits)?)
            }
            command_ids::GET_DEVICE_INFO_COMMAND => Self::GetDeviceInfoCommand(
                GetDeviceInfoCommand::deserialize_with_limits(payload, limits)?,
            ),
            command_ids::DEVICE_INFO_RESPONSE => Self::DeviceInfoResponse(
                DeviceInfoResponse::deserialize_with_limits(payload, limits)?,
            ),
            command_ids::SEND_DATA_COMMAND => {
                Self::SendDataCommand(SendDataCommand::deserialize_with_limits(payload, limits)?)
            }
            command_ids::SEND_DATA_RESPONSE => {
                Self::SendDataResponse(SendDataResponse::deserialize_with_limits(payload, limits)?)
            }
            command_ids::SET_CONFIG_COMMAND => {
                Self::SetConfigCommand(SetConfigCommand::deserialize_with_limits(payload, limits)?)
            }
            command_ids::SET_CONFIG_RESPONSE => Self::SetConfigResponse(
                SetConfigResponse::deserialize_with_limits(payload, limits)?,
            ),
            command_ids::BATCH_COMMAND => {
                Self::BatchCommand(BatchCommand::deserialize_with_limits(payload, limits)?)
            }
            command_ids::BATCH_RESPONSE => {
                Self::BatchResponse(BatchResponse::deserialize_with_limits(payload, limits)?)
            }
            command_ids::SENSOR_DATA_RESPONSE => Self::SensorDataResponse(
                SensorDataResponse::deserialize_with_limits(payload, limits)?,
            ),
            other => {
                debug!(command_id = other, "no catalog entry for command id");
                return Err(CodecError::UnknownCommand { command_id: other });
            }
        };
        Ok(message)
    }

    /// Encodes the payload, without a header.
    pub fn encode(&self) -> CodecResult<Vec<u8>> {
        match self {
            Self::PingCommand(m) => m.serialize(),
            Self::PingResponse(m) => m.serialize(),
            Self::GetDeviceInfoCommand(m) => m.serialize(),
            Self::DeviceInfoResponse(m) => m.serialize(),
            Self::SendDataCommand(m) => m.serialize(),
            Self::SendDataResponse(m) => m.serialize(),
            Self::SetConfigCommand(m) => m.serialize(),
            Self::SetConfigResponse(m) => m.serialize(),
            Self::BatchCommand(m) => m.serialize(),
            Self::BatchResponse(m) => m.serialize(),
            Self::SensorDataResponse(m) => m.serialize(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        match self {
            Self::PingCommand(_) => PingCommand::KIND,
            Self::PingResponse(_) => PingResponse::KIND,
            Self::GetDeviceInfoCommand(_) => GetDeviceInfoCommand::KIND,
            Self::DeviceInfoResponse(_) => DeviceInfoResponse::KIND,
            Self::SendDataCommand(_) => SendDataCommand::KIND,
            Self::SendDataResponse(_) => SendDataResponse::KIND,
            Self::SetConfigCommand(_) => SetConfigCommand::KIND,
            Self::SetConfigResponse(_) => SetConfigResponse::KIND,
            Self::BatchCommand(_) => BatchCommand::KIND,
            Self::BatchResponse(_) => BatchResponse::KIND,
            Self::SensorDataResponse(_) => SensorDataResponse::KIND,
        }
    }

    #[must_use]
    pub const fn command_id(&self) -> u8 {
        match self {
            Self::PingCommand(_) => PingCommand::COMMAND_ID,
            Self::PingResponse(_) => PingResponse::COMMAND_ID,
            Self::GetDeviceInfoCommand(_) => GetDeviceInfoCommand::COMMAND_ID,
            Self::DeviceInfoResponse(_) => DeviceInfoResponse::COMMAND_ID,
            Self::SendDataCommand(_) => SendDataCommand::COMMAND_ID,
            Self::SendDataResponse(_) => SendDataResponse::COMMAND_ID,
            Self::SetConfigCommand(_) => SetConfigCommand::COMMAND_ID,
            Self::SetConfigResponse(_) => SetConfigResponse::COMMAND_ID,
            Self::BatchCommand(_) => BatchCommand::COMMAND_ID,
            Self::BatchResponse(_) => BatchResponse::COMMAND_ID,
            Self::SensorDataResponse(_) => SensorDataResponse::COMMAND_ID,
        }
    }
}

macro_rules! impl_from_message {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for AnyMessage {
                fn from(message: $ty) -> Self {
                    Self::$ty(message)
                }
            }
        )*
    };
}

impl_from_message!(
    PingCommand,
    PingResponse,
    GetDeviceInfoCommand,
    DeviceInfoResponse,
    SendDataCommand,
    SendDataResponse,
    SetConfigCommand,
    SetConfigResponse,
    BatchCommand,
    BatchResponse,
    SensorDataResponse
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorCode, SendDataResponse};

    #[test]
    fn catalog_has_fourteen_entries_with_unique_names() {
        let mut names: Vec<_> = MessageKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 14);
    }

    #[test]
    fn eleven_entries_carry_unique_command_ids() {
        let mut ids: Vec<u8> = MessageKind::ALL
            .iter()
            .filter_map(|k| k.command_id())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 11);
    }

    #[test]
    fn lookup_finds_each_command() {
        assert_eq!(lookup(0x01), Some(MessageKind::PingCommand));
        assert_eq!(lookup(0x90), Some(MessageKind::BatchResponse));
        assert_eq!(lookup(0x85), Some(MessageKind::SensorDataResponse));
        assert_eq!(lookup(0x7F), None);
    }

    #[test]
    fn message_constants_match_layouts() {
        fn check<M: Message>() {
            assert_eq!(M::LAYOUT.command_id, Some(M::COMMAND_ID));
            assert_eq!(M::KIND.layout(), M::LAYOUT);
        }
        check::<PingCommand>();
        check::<PingResponse>();
        check::<GetDeviceInfoCommand>();
        check::<DeviceInfoResponse>();
        check::<SendDataCommand>();
        check::<SendDataResponse>();
        check::<SetConfigCommand>();
        check::<SetConfigResponse>();
        check::<BatchCommand>();
        check::<BatchResponse>();
        check::<SensorDataResponse>();
    }

    #[test]
    fn any_message_dispatch() {
        let message = AnyMessage::from(SendDataResponse {
            success: false,
            error_code: ErrorCode::Timeout,
            bytes_written: 0,
        });
        let payload = message.encode().unwrap();
        let decoded = AnyMessage::decode(message.command_id(), &payload).unwrap();
        assert_eq!(decoded, message);
        assert_eq!(decoded.kind(), MessageKind::SendDataResponse);
    }

    #[test]
    fn unknown_command_rejected() {
        let err = AnyMessage::decode(0x55, &[]).unwrap_err();
        assert_eq!(err, CodecError::UnknownCommand { command_id: 0x55 });
    }
}
