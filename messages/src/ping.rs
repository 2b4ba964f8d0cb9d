use codec::{CodecResult, FieldValue, Fields, Record};
use schema::{FieldDef, Layout};

use crate::catalog::{Message, MessageKind};
use crate::command_ids;

pub const PING_COMMAND_LAYOUT: Layout = Layout::command(
    "PingCommand",
    command_ids::PING_COMMAND,
    &[FieldDef::u64("timestamp")],
);

pub const PING_RESPONSE_LAYOUT: Layout = Layout::command(
    "PingResponse",
    command_ids::PING_RESPONSE,
    &[
        FieldDef::u64("request_timestamp"),
        FieldDef::u64("response_timestamp"),
    ],
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PingCommand {
    pub timestamp: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PingResponse {
    pub request_timestamp: u64,
    pub response_timestamp: u64,
}

impl Record for PingCommand {
    const LAYOUT: &'static Layout = &PING_COMMAND_LAYOUT;

    fn to_values(&self) -> Vec<FieldValue> {
        vec![self.timestamp.into()]
    }

    fn from_fields(fields: &mut Fields) -> CodecResult<Self> {
        Ok(Self {
            timestamp: fields.take()?,
        })
    }
}

impl Message for PingCommand {
    const COMMAND_ID: u8 = command_ids::PING_COMMAND;
    const KIND: MessageKind = MessageKind::PingCommand;
}

impl Record for PingResponse {
    const LAYOUT: &'static Layout = &PING_RESPONSE_LAYOUT;

    fn to_values(&self) -> Vec<FieldValue> {
        vec![self.request_timestamp.into(), self.response_timestamp.into()]
    }

    fn from_fields(fields: &mut Fields) -> CodecResult<Self> {
        Ok(Self {
            request_timestamp: fields.take()?,
            response_timestamp: fields.take()?,
        })
    }
}

impl Message for PingResponse {
    const COMMAND_ID: u8 = command_ids::PING_RESPONSE;
    const KIND: MessageKind = MessageKind::PingResponse;
}
