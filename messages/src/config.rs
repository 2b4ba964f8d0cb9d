use codec::{CodecResult, FieldValue, Fields, Record};
use schema::{FieldDef, Layout, PrefixWidth};

use crate::catalog::{Message, MessageKind};
use crate::command_ids;
use crate::enums::ErrorCode;

pub const SET_CONFIG_COMMAND_LAYOUT: Layout = Layout::command(
    "SetConfigCommand",
    command_ids::SET_CONFIG_COMMAND,
    &[
        FieldDef::u8("config_id"),
        FieldDef::u8("value_type"),
        FieldDef::bytes("value", PrefixWidth::U8),
    ],
);

pub const SET_CONFIG_RESPONSE_LAYOUT: Layout = Layout::command(
    "SetConfigResponse",
    command_ids::SET_CONFIG_RESPONSE,
    &[FieldDef::bool("success"), FieldDef::u8("error_code")],
);

/// Sets one configuration entry. `value` is opaque here and holds at most
/// 255 bytes; `value_type` tells the device how to read it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SetConfigCommand {
    pub config_id: u8,
    pub value_type: u8,
    pub value: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetConfigResponse {
    pub success: bool,
    pub error_code: ErrorCode,
}

impl Record for SetConfigCommand {
    const LAYOUT: &'static Layout = &SET_CONFIG_COMMAND_LAYOUT;

    fn to_values(&self) -> Vec<FieldValue> {
        vec![
            self.config_id.into(),
            self.value_type.into(),
            self.value.as_slice().into(),
        ]
    }

    fn from_fields(fields: &mut Fields) -> CodecResult<Self> {
        Ok(Self {
            config_id: fields.take()?,
            value_type: fields.take()?,
            value: fields.take()?,
        })
    }
}

impl Message for SetConfigCommand {
    const COMMAND_ID: u8 = command_ids::SET_CONFIG_COMMAND;
    const KIND: MessageKind = MessageKind::SetConfigCommand;
}

impl Record for SetConfigResponse {
    const LAYOUT: &'static Layout = &SET_CONFIG_RESPONSE_LAYOUT;

    fn to_values(&self) -> Vec<FieldValue> {
        vec![self.success.into(), u8::from(self.error_code).into()]
    }

    fn from_fields(fields: &mut Fields) -> CodecResult<Self> {
        Ok(Self {
            success: fields.take()?,
            error_code: fields.take::<u8>()?.into(),
        })
    }
}

impl Message for SetConfigResponse {
    const COMMAND_ID: u8 = command_ids::SET_CONFIG_RESPONSE;
    const KIND: MessageKind = MessageKind::SetConfigResponse;
}
