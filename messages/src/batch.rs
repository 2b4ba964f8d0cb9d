use codec::{CodecResult, FieldValue, Fields, Record};
use schema::{FieldDef, Layout, PrefixWidth};

use crate::catalog::{Message, MessageKind};
use crate::command_ids;

pub const BATCH_COMMAND_LAYOUT: Layout = Layout::command(
    "BatchCommand",
    command_ids::BATCH_COMMAND,
    &[
        FieldDef::u8("command_count"),
        FieldDef::bytes("commands", PrefixWidth::U16),
    ],
);

pub const BATCH_RESPONSE_LAYOUT: Layout = Layout::command(
    "BatchResponse",
    command_ids::BATCH_RESPONSE,
    &[
        FieldDef::u8("success_count"),
        FieldDef::u8("failure_count"),
        FieldDef::bytes("results", PrefixWidth::U16),
    ],
);

/// Several commands packed into one payload.
///
/// `commands` is opaque to the codec and `command_count` is carried as given;
/// neither is checked against the other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchCommand {
    pub command_count: u8,
    pub commands: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchResponse {
    pub success_count: u8,
    pub failure_count: u8,
    pub results: Vec<u8>,
}

impl Record for BatchCommand {
    const LAYOUT: &'static Layout = &BATCH_COMMAND_LAYOUT;

    fn to_values(&self) -> Vec<FieldValue> {
        vec![self.command_count.into(), self.commands.as_slice().into()]
    }

    fn from_fields(fields: &mut Fields) -> CodecResult<Self> {
        Ok(Self {
            command_count: fields.take()?,
            commands: fields.take()?,
        })
    }
}

impl Message for BatchCommand {
    const COMMAND_ID: u8 = command_ids::BATCH_COMMAND;
    const KIND: MessageKind = MessageKind::BatchCommand;
}

impl Record for BatchResponse {
    const LAYOUT: &'static Layout = &BATCH_RESPONSE_LAYOUT;

    fn to_values(&self) -> Vec<FieldValue> {
        vec![
            self.success_count.into(),
            self.failure_count.into(),
            self.results.as_slice().into(),
        ]
    }

    fn from_fields(fields: &mut Fields) -> CodecResult<Self> {
        Ok(Self {
            success_count: fields.take()?,
            failure_count: fields.take()?,
            results: fields.take()?,
        })
    }
}

impl Message for BatchResponse {
    const COMMAND_ID: u8 = command_ids::BATCH_RESPONSE;
    const KIND: MessageKind = MessageKind::BatchResponse;
}
