//! Layout-driven record encoding/decoding.

use bytestream::{ByteReader, ByteWriter};
use schema::{FieldDef, FieldKind, FloatWidth, IntWidth, Layout};
use tracing::{debug, trace};

use crate::error::{CodecError, CodecResult, LimitKind, ValueReason};
use crate::limits::CodecLimits;
use crate::value::FieldValue;

/// Encodes one value per layout field, in layout order.
///
/// Nested records are encoded independently and their bytes spliced into the
/// parent. Fails with [`bytestream::ByteError::PayloadTooLarge`] (wrapped in
/// [`CodecError::Bytes`]) when a variable-length value does not fit its prefix.
pub fn encode_record(layout: &Layout, values: &[FieldValue]) -> CodecResult<Vec<u8>> {
    let mut writer = ByteWriter::with_capacity(layout.fixed_size().unwrap_or(64));
    match write_record(layout, values, &mut writer) {
        Ok(()) => {
            trace!(record = layout.name, bytes = writer.len(), "encoded record");
            Ok(writer.finish())
        }
        Err(err) => {
            debug!(record = layout.name, error = %err, "record encode failed");
            Err(err)
        }
    }
}

/// Decodes a record, returning one value per layout field.
///
/// No partial value list is ever returned: the first failing read ends decoding.
pub fn decode_record(
    layout: &Layout,
    bytes: &[u8],
    limits: &CodecLimits,
) -> CodecResult<Vec<FieldValue>> {
    let mut reader = ByteReader::new(bytes);
    let result = read_record(layout, &mut reader, limits).and_then(|values| {
        if limits.reject_trailing_bytes && !reader.is_empty() {
            return Err(CodecError::TrailingBytes {
                record: layout.name,
                remaining: reader.remaining(),
            });
        }
        Ok(values)
    });
    match &result {
        Ok(_) => trace!(
            record = layout.name,
            bytes = reader.position(),
            "decoded record"
        ),
        Err(err) => debug!(record = layout.name, error = %err, "record decode failed"),
    }
    result
}

fn write_record(layout: &Layout, values: &[FieldValue], writer: &mut ByteWriter) -> CodecResult<()> {
    if values.len() != layout.fields.len() {
        return Err(CodecError::FieldCountMismatch {
            record: layout.name,
            expected: layout.fields.len(),
            actual: values.len(),
        });
    }
    for (field, value) in layout.fields.iter().zip(values) {
        write_field(layout, field, value, writer)?;
    }
    Ok(())
}

fn write_field(
    layout: &Layout,
    field: &FieldDef,
    value: &FieldValue,
    writer: &mut ByteWriter,
) -> CodecResult<()> {
    match (field.kind, value) {
        (FieldKind::UInt(width), FieldValue::UInt(v)) => {
            validate_uint(layout, field, width, *v)?;
            write_uint(writer, width, *v);
        }
        (FieldKind::SInt(width), FieldValue::SInt(v)) => {
            validate_sint(layout, field, width, *v)?;
            write_sint(writer, width, *v);
        }
        (FieldKind::Float(FloatWidth::F32), FieldValue::F32(v)) => writer.write_f32(*v),
        (FieldKind::Float(FloatWidth::F64), FieldValue::F64(v)) => writer.write_f64(*v),
        (FieldKind::Bool, FieldValue::Bool(v)) => writer.write_bool(*v),
        (FieldKind::FixedBytes { len }, FieldValue::FixedBytes(bytes)) => {
            if bytes.len() != len {
                return Err(invalid(
                    layout,
                    field,
                    ValueReason::FixedLengthMismatch {
                        expected: len,
                        actual: bytes.len(),
                    },
                ));
            }
            writer.write_bytes(bytes);
        }
        (FieldKind::Bytes { prefix }, FieldValue::Bytes(bytes)) => {
            writer.write_prefixed(prefix, bytes)?;
        }
        (FieldKind::Record(nested), FieldValue::Record(values)) => {
            let encoded = encode_nested(layout, field, nested, values)?;
            writer.write_bytes(&encoded);
        }
        (
            FieldKind::RecordList {
                prefix,
                layout: nested,
            },
            FieldValue::RecordList(items),
        ) => {
            let stride = nested_size(layout, field, nested)?;
            let mut span = ByteWriter::with_capacity(stride * items.len());
            for values in items {
                span.write_bytes(&encode_nested(layout, field, nested, values)?);
            }
            writer.write_prefixed(prefix, span.as_bytes())?;
        }
        (kind, value) => {
            return Err(invalid(
                layout,
                field,
                ValueReason::TypeMismatch {
                    expected: kind.name(),
                    found: value.kind_name(),
                },
            ));
        }
    }
    Ok(())
}

fn encode_nested(
    parent: &Layout,
    field: &FieldDef,
    nested: &Layout,
    values: &[FieldValue],
) -> CodecResult<Vec<u8>> {
    let size = nested_size(parent, field, nested)?;
    let mut writer = ByteWriter::with_capacity(size);
    write_record(nested, values, &mut writer)?;
    debug_assert_eq!(writer.len(), size);
    Ok(writer.finish())
}

fn read_record(
    layout: &Layout,
    reader: &mut ByteReader<'_>,
    limits: &CodecLimits,
) -> CodecResult<Vec<FieldValue>> {
    layout
        .fields
        .iter()
        .map(|field| read_field(layout, field, reader, limits))
        .collect()
}

fn read_field(
    layout: &Layout,
    field: &FieldDef,
    reader: &mut ByteReader<'_>,
    limits: &CodecLimits,
) -> CodecResult<FieldValue> {
    let value = match field.kind {
        FieldKind::UInt(width) => FieldValue::UInt(read_uint(reader, width)?),
        FieldKind::SInt(width) => FieldValue::SInt(read_sint(reader, width)?),
        FieldKind::Float(FloatWidth::F32) => FieldValue::F32(reader.read_f32()?),
        FieldKind::Float(FloatWidth::F64) => FieldValue::F64(reader.read_f64()?),
        FieldKind::Bool => FieldValue::Bool(reader.read_bool()?),
        FieldKind::FixedBytes { len } => FieldValue::FixedBytes(reader.read_bytes(len)?.to_vec()),
        FieldKind::Bytes { prefix } => {
            let payload = reader.read_prefixed(prefix)?;
            check_variable_len(payload.len(), limits)?;
            FieldValue::Bytes(payload.to_vec())
        }
        FieldKind::Record(nested) => {
            let size = nested_size(layout, field, nested)?;
            let span = reader.read_bytes(size)?;
            FieldValue::Record(decode_nested(nested, span, limits)?)
        }
        FieldKind::RecordList {
            prefix,
            layout: nested,
        } => {
            let stride = nested_size(layout, field, nested)?;
            let span = reader.read_prefixed(prefix)?;
            check_variable_len(span.len(), limits)?;
            FieldValue::RecordList(decode_list(layout, field, nested, stride, span, limits)?)
        }
    };
    Ok(value)
}

fn decode_nested(
    nested: &Layout,
    span: &[u8],
    limits: &CodecLimits,
) -> CodecResult<Vec<FieldValue>> {
    let mut reader = ByteReader::new(span);
    read_record(nested, &mut reader, limits)
}

fn decode_list(
    parent: &Layout,
    field: &FieldDef,
    nested: &Layout,
    stride: usize,
    span: &[u8],
    limits: &CodecLimits,
) -> CodecResult<Vec<Vec<FieldValue>>> {
    if span.is_empty() {
        return Ok(Vec::new());
    }
    if stride == 0 || span.len() % stride != 0 {
        return Err(invalid(
            parent,
            field,
            ValueReason::MisalignedList {
                len: span.len(),
                stride,
            },
        ));
    }
    let count = span.len() / stride;
    if count > limits.max_list_records {
        return Err(CodecError::LimitsExceeded {
            kind: LimitKind::ListRecords,
            limit: limits.max_list_records,
            actual: count,
        });
    }
    span.chunks_exact(stride)
        .map(|chunk| decode_nested(nested, chunk, limits))
        .collect()
}

fn nested_size(parent: &Layout, field: &FieldDef, nested: &Layout) -> CodecResult<usize> {
    nested.fixed_size().ok_or(CodecError::UnsizedNested {
        record: parent.name,
        field: field.name,
    })
}

fn check_variable_len(len: usize, limits: &CodecLimits) -> CodecResult<()> {
    if len > limits.max_variable_bytes {
        return Err(CodecError::LimitsExceeded {
            kind: LimitKind::VariableBytes,
            limit: limits.max_variable_bytes,
            actual: len,
        });
    }
    Ok(())
}

fn validate_uint(layout: &Layout, field: &FieldDef, width: IntWidth, value: u64) -> CodecResult<()> {
    let bits = width.bits();
    if bits < 64 && value >> bits != 0 {
        return Err(invalid(
            layout,
            field,
            ValueReason::UnsignedOutOfRange { bits, value },
        ));
    }
    Ok(())
}

fn validate_sint(layout: &Layout, field: &FieldDef, width: IntWidth, value: i64) -> CodecResult<()> {
    let bits = width.bits();
    if bits == 64 {
        return Ok(());
    }
    let min = -(1i64 << (bits - 1));
    let max = (1i64 << (bits - 1)) - 1;
    if value < min || value > max {
        return Err(invalid(
            layout,
            field,
            ValueReason::SignedOutOfRange { bits, value },
        ));
    }
    Ok(())
}

// Callers validate the range first, so the narrowing casts are lossless.
fn write_uint(writer: &mut ByteWriter, width: IntWidth, value: u64) {
    match width {
        IntWidth::W8 => writer.write_u8(value as u8),
        IntWidth::W16 => writer.write_u16(value as u16),
        IntWidth::W32 => writer.write_u32(value as u32),
        IntWidth::W64 => writer.write_u64(value),
    }
}

fn write_sint(writer: &mut ByteWriter, width: IntWidth, value: i64) {
    match width {
        IntWidth::W8 => writer.write_i8(value as i8),
        IntWidth::W16 => writer.write_i16(value as i16),
        IntWidth::W32 => writer.write_i32(value as i32),
        IntWidth::W64 => writer.write_i64(value),
    }
}

fn read_uint(reader: &mut ByteReader<'_>, width: IntWidth) -> CodecResult<u64> {
    let value = match width {
        IntWidth::W8 => u64::from(reader.read_u8()?),
        IntWidth::W16 => u64::from(reader.read_u16()?),
        IntWidth::W32 => u64::from(reader.read_u32()?),
        IntWidth::W64 => reader.read_u64()?,
    };
    Ok(value)
}

fn read_sint(reader: &mut ByteReader<'_>, width: IntWidth) -> CodecResult<i64> {
    let value = match width {
        IntWidth::W8 => i64::from(reader.read_i8()?),
        IntWidth::W16 => i64::from(reader.read_i16()?),
        IntWidth::W32 => i64::from(reader.read_i32()?),
        IntWidth::W64 => reader.read_i64()?,
    };
    Ok(value)
}

fn invalid(layout: &Layout, field: &FieldDef, reason: ValueReason) -> CodecError {
    CodecError::InvalidValue {
        record: layout.name,
        field: field.name,
        reason,
    }
}
