use codec::{CodecResult, FieldValue, Fields, Record};
use schema::{FieldDef, Layout};

use crate::catalog::{Message, MessageKind};
use crate::command_ids;
use crate::enums::DeviceStatus;

/// Length of [`DeviceInfoResponse::device_name`].
pub const DEVICE_NAME_LEN: usize = 32;
/// Length of [`DeviceInfoResponse::firmware_version`].
pub const FIRMWARE_VERSION_LEN: usize = 16;

pub const GET_DEVICE_INFO_COMMAND_LAYOUT: Layout = Layout::command(
    "GetDeviceInfoCommand",
    command_ids::GET_DEVICE_INFO_COMMAND,
    &[FieldDef::bool("include_details")],
);

pub const DEVICE_INFO_RESPONSE_LAYOUT: Layout = Layout::command(
    "DeviceInfoResponse",
    command_ids::DEVICE_INFO_RESPONSE,
    &[
        FieldDef::u8("status"),
        FieldDef::fixed_bytes("device_name", DEVICE_NAME_LEN),
        FieldDef::fixed_bytes("firmware_version", FIRMWARE_VERSION_LEN),
        FieldDef::u32("uptime_seconds"),
        FieldDef::i16("temperature"),
        FieldDef::u8("battery_level"),
    ],
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetDeviceInfoCommand {
    pub include_details: bool,
}

/// Device description. The text fields are raw fixed-length byte arrays; any
/// zero fill is up to the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceInfoResponse {
    pub status: DeviceStatus,
    pub device_name: [u8; DEVICE_NAME_LEN],
    pub firmware_version: [u8; FIRMWARE_VERSION_LEN],
    pub uptime_seconds: u32,
    pub temperature: i16,
    pub battery_level: u8,
}

/// Copies `text` into a zero-filled array, truncating at `N` bytes.
#[must_use]
pub fn fixed_text<const N: usize>(text: &str) -> [u8; N] {
    let mut out = [0u8; N];
    let len = text.len().min(N);
    out[..len].copy_from_slice(&text.as_bytes()[..len]);
    out
}

impl Record for GetDeviceInfoCommand {
    const LAYOUT: &'static Layout = &GET_DEVICE_INFO_COMMAND_LAYOUT;

    fn to_values(&self) -> Vec<FieldValue> {
        vec![self.include_details.into()]
    }

    fn from_fields(fields: &mut Fields) -> CodecResult<Self> {
        Ok(Self {
            include_details: fields.take()?,
        })
    }
}

impl Message for GetDeviceInfoCommand {
    const COMMAND_ID: u8 = command_ids::GET_DEVICE_INFO_COMMAND;
    const KIND: MessageKind = MessageKind::GetDeviceInfoCommand;
}

impl Record for DeviceInfoResponse {
    const LAYOUT: &'static Layout = &DEVICE_INFO_RESPONSE_LAYOUT;

    fn to_values(&self) -> Vec<FieldValue> {
        vec![
            u8::from(self.status).into(),
            self.device_name.into(),
            self.firmware_version.into(),
            self.uptime_seconds.into(),
            self.temperature.into(),
            self.battery_level.into(),
        ]
    }

    fn from_fields(fields: &mut Fields) -> CodecResult<Self> {
        Ok(Self {
            status: fields.take::<u8>()?.into(),
            device_name: fields.take()?,
            firmware_version: fields.take()?,
            uptime_seconds: fields.take()?,
            temperature: fields.take()?,
            battery_level: fields.take()?,
        })
    }
}

impl Message for DeviceInfoResponse {
    const COMMAND_ID: u8 = command_ids::DEVICE_INFO_RESPONSE;
    const KIND: MessageKind = MessageKind::DeviceInfoResponse;
}
