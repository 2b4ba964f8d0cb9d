//! Inspection and decoding tools for devproto frames.
//!
//! This crate turns raw frames and payloads into structured reports:
//!
//! - Decode a framed buffer (header plus payload) by its command id
//! - Decode a bare payload for a given command id
//! - Describe every record layout in the catalog
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to see what went over the wire.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use codec::{decode_record, CodecError, CodecLimits, FieldValue};
use messages::{command_ids, lookup, split_frame, AnyMessage, MessageKind, ProtocolHeader};
use schema::{FieldKind, Layout};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Header fields as printed by `inspect`.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderReport {
    pub magic: u16,
    pub version: u8,
    pub command_id: u8,
    pub payload_length: u32,
    pub sequence_id: u32,
    pub checksum: u16,
}

impl From<ProtocolHeader> for HeaderReport {
    fn from(header: ProtocolHeader) -> Self {
        Self {
            magic: header.magic,
            version: header.version,
            command_id: header.command_id,
            payload_length: header.payload_length,
            sequence_id: header.sequence_id,
            checksum: header.checksum,
        }
    }
}

/// A decoded payload.
#[derive(Debug, Clone, Serialize)]
pub struct DecodeReport {
    pub message: &'static str,
    pub command_id: u8,
    pub is_response: bool,
    pub payload_bytes: usize,
    pub fields: Value,
}

/// A decoded frame.
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub header: HeaderReport,
    pub frame_bytes: usize,
    pub payload: DecodeReport,
}

/// One catalog entry as printed by `catalog`.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    pub name: &'static str,
    pub command_id: Option<u8>,
    pub fixed_size: Option<usize>,
    pub fields: Vec<FieldReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldReport {
    pub name: &'static str,
    pub kind: &'static str,
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested: Option<&'static str>,
}

/// Decodes a complete frame: header, then the payload named by its command id.
pub fn inspect_frame(bytes: &[u8], limits: &CodecLimits) -> Result<InspectReport> {
    let (header, payload) = split_frame(bytes, limits).context("split frame")?;
    let payload = decode_payload(header.command_id, payload, limits)?;
    Ok(InspectReport {
        header: header.into(),
        frame_bytes: bytes.len(),
        payload,
    })
}

/// Decodes a bare payload for `command_id`.
pub fn decode_payload(command_id: u8, payload: &[u8], limits: &CodecLimits) -> Result<DecodeReport> {
    let kind = lookup(command_id).ok_or(CodecError::UnknownCommand { command_id })?;
    // The typed decode checks the payload the same way an application would.
    AnyMessage::decode_with_limits(command_id, payload, limits)
        .with_context(|| format!("decode {}", kind.name()))?;
    let layout = kind.layout();
    let values = decode_record(layout, payload, limits)
        .with_context(|| format!("decode {} fields", kind.name()))?;
    debug!(message = kind.name(), bytes = payload.len(), "decoded payload");
    Ok(DecodeReport {
        message: kind.name(),
        command_id,
        is_response: command_ids::is_response(command_id),
        payload_bytes: payload.len(),
        fields: values_json(layout, &values),
    })
}

/// Describes every layout in the catalog.
#[must_use]
pub fn describe_catalog() -> Vec<CatalogReport> {
    MessageKind::ALL
        .iter()
        .map(|kind| {
            let layout = kind.layout();
            CatalogReport {
                name: layout.name,
                command_id: layout.command_id,
                fixed_size: layout.fixed_size(),
                fields: layout
                    .fields
                    .iter()
                    .map(|field| FieldReport {
                        name: field.name,
                        kind: field.kind.name(),
                        size: field.kind.wire_size(),
                        nested: match field.kind {
                            FieldKind::Record(nested) | FieldKind::RecordList { layout: nested, .. } => {
                                Some(nested.name)
                            }
                            _ => None,
                        },
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Converts decoded values into a JSON object keyed by field name.
///
/// Byte fields are rendered as lowercase hex; non-finite floats become `null`.
#[must_use]
pub fn values_json(layout: &Layout, values: &[FieldValue]) -> Value {
    let mut map = Map::new();
    for (field, value) in layout.fields.iter().zip(values) {
        map.insert(field.name.to_string(), value_json(field.kind, value));
    }
    Value::Object(map)
}

fn value_json(kind: FieldKind, value: &FieldValue) -> Value {
    match (kind, value) {
        (_, FieldValue::UInt(v)) => Value::from(*v),
        (_, FieldValue::SInt(v)) => Value::from(*v),
        (_, FieldValue::F32(v)) => Value::from(f64::from(*v)),
        (_, FieldValue::F64(v)) => Value::from(*v),
        (_, FieldValue::Bool(v)) => Value::from(*v),
        (_, FieldValue::FixedBytes(bytes) | FieldValue::Bytes(bytes)) => Value::from(hex(bytes)),
        (FieldKind::Record(nested), FieldValue::Record(values)) => values_json(nested, values),
        (FieldKind::RecordList { layout, .. }, FieldValue::RecordList(items)) => Value::Array(
            items
                .iter()
                .map(|values| values_json(layout, values))
                .collect(),
        ),
        (_, FieldValue::Record(_) | FieldValue::RecordList(_)) => Value::Null,
    }
}

fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Renders a decode report as indented text.
#[must_use]
pub fn format_decode_pretty(report: &DecodeReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} (0x{:02X}, {} payload bytes)",
        report.message, report.command_id, report.payload_bytes
    );
    write_pretty(&mut out, &report.fields, 1);
    out
}

/// Renders an inspect report as indented text.
#[must_use]
pub fn format_inspect_pretty(report: &InspectReport) -> String {
    let header = &report.header;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "magic: 0x{:04X} version: {} command_id: 0x{:02X}",
        header.magic, header.version, header.command_id
    );
    let _ = writeln!(
        out,
        "sequence_id: {} payload_length: {} checksum: 0x{:04X} (not verified)",
        header.sequence_id, header.payload_length, header.checksum
    );
    out.push_str(&format_decode_pretty(&report.payload));
    out
}

/// Renders the catalog as a table.
#[must_use]
pub fn format_catalog_pretty(catalog: &[CatalogReport]) -> String {
    let mut out = String::new();
    for entry in catalog {
        let id = entry
            .command_id
            .map_or_else(|| "----".to_string(), |id| format!("0x{id:02X}"));
        let size = entry
            .fixed_size
            .map_or_else(|| "variable".to_string(), |size| format!("{size} bytes"));
        let _ = writeln!(out, "{id} {} ({size})", entry.name);
        for field in &entry.fields {
            let nested = field.nested.map(|name| format!(" of {name}")).unwrap_or_default();
            let _ = writeln!(out, "       {}: {}{nested}", field.name, field.kind);
        }
    }
    out
}

fn write_pretty(out: &mut String, value: &Value, depth: usize) {
    let indent = "  ".repeat(depth);
    match value {
        Value::Object(map) => {
            for (name, value) in map {
                if value.is_object() || value.is_array() {
                    let _ = writeln!(out, "{indent}{name}:");
                    write_pretty(out, value, depth + 1);
                } else {
                    let _ = writeln!(out, "{indent}{name}: {value}");
                }
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let _ = writeln!(out, "{indent}[{index}]");
                write_pretty(out, item, depth + 1);
            }
        }
        other => {
            let _ = writeln!(out, "{indent}{other}");
        }
    }
}
