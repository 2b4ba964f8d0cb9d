//! Typed records on top of the layout-driven codec.

use schema::{FieldDef, Layout};

use crate::error::{CodecError, CodecResult, ValueReason};
use crate::limits::CodecLimits;
use crate::record::{decode_record, encode_record};
use crate::value::{FieldValue, FromFieldValue};

/// A Rust type with a fixed wire layout.
///
/// Implementors describe how to flatten themselves into [`FieldValue`]s in
/// layout order and how to rebuild themselves from a [`Fields`] cursor. The
/// byte work is done by [`encode_record`] and [`decode_record`].
pub trait Record: Sized {
    /// Wire layout of the record.
    const LAYOUT: &'static Layout;

    /// Flattens the record into one value per layout field.
    fn to_values(&self) -> Vec<FieldValue>;

    /// Rebuilds the record from decoded values.
    fn from_fields(fields: &mut Fields) -> CodecResult<Self>;

    /// Encodes the record into a new byte buffer.
    fn serialize(&self) -> CodecResult<Vec<u8>> {
        encode_record(Self::LAYOUT, &self.to_values())
    }

    /// Decodes a record with default limits.
    fn deserialize(bytes: &[u8]) -> CodecResult<Self> {
        Self::deserialize_with_limits(bytes, &CodecLimits::default())
    }

    /// Decodes a record with explicit limits.
    fn deserialize_with_limits(bytes: &[u8], limits: &CodecLimits) -> CodecResult<Self> {
        let values = decode_record(Self::LAYOUT, bytes, limits)?;
        Self::from_values(values)
    }

    /// Rebuilds the record from a complete value list.
    fn from_values(values: Vec<FieldValue>) -> CodecResult<Self> {
        let mut fields = Fields::new(Self::LAYOUT, values);
        let record = Self::from_fields(&mut fields)?;
        fields.finish()?;
        Ok(record)
    }

    /// Encoded size if the layout is fixed.
    fn fixed_size() -> Option<usize> {
        Self::LAYOUT.fixed_size()
    }
}

/// Sequential cursor over decoded values, paired with their field definitions.
#[derive(Debug)]
pub struct Fields {
    layout: &'static Layout,
    values: std::vec::IntoIter<FieldValue>,
    index: usize,
}

impl Fields {
    /// Creates a cursor over `values`, which must be in `layout` order.
    #[must_use]
    pub fn new(layout: &'static Layout, values: Vec<FieldValue>) -> Self {
        Self {
            layout,
            values: values.into_iter(),
            index: 0,
        }
    }

    /// Takes the next value as a scalar, byte array or byte vector.
    pub fn take<T: FromFieldValue>(&mut self) -> CodecResult<T> {
        let (field, value) = self.next_value()?;
        T::from_field_value(value).map_err(|found| self.mismatch(field, T::EXPECTED, &found))
    }

    /// Takes the next value as a nested record.
    pub fn record<R: Record>(&mut self) -> CodecResult<R> {
        let (field, value) = self.next_value()?;
        match value {
            FieldValue::Record(values) => R::from_values(values),
            other => Err(self.mismatch(field, "record", &other)),
        }
    }

    /// Takes the next value as a list of nested records.
    pub fn records<R: Record>(&mut self) -> CodecResult<Vec<R>> {
        let (field, value) = self.next_value()?;
        match value {
            FieldValue::RecordList(items) => items.into_iter().map(R::from_values).collect(),
            other => Err(self.mismatch(field, "record-list", &other)),
        }
    }

    /// Fails if any values were left unconsumed.
    pub fn finish(self) -> CodecResult<()> {
        if self.values.len() > 0 {
            return Err(self.count_mismatch());
        }
        Ok(())
    }

    fn next_value(&mut self) -> CodecResult<(&'static FieldDef, FieldValue)> {
        let layout = self.layout;
        let Some(field) = layout.fields.get(self.index) else {
            return Err(CodecError::FieldCountMismatch {
                record: layout.name,
                expected: layout.fields.len(),
                actual: self.index + 1 + self.values.len(),
            });
        };
        let Some(value) = self.values.next() else {
            return Err(self.count_mismatch());
        };
        self.index += 1;
        Ok((field, value))
    }

    fn count_mismatch(&self) -> CodecError {
        CodecError::FieldCountMismatch {
            record: self.layout.name,
            expected: self.layout.fields.len(),
            actual: self.index + self.values.len(),
        }
    }

    fn mismatch(&self, field: &FieldDef, expected: &'static str, found: &FieldValue) -> CodecError {
        CodecError::InvalidValue {
            record: self.layout.name,
            field: field.name,
            reason: ValueReason::TypeMismatch {
                expected,
                found: found.kind_name(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::PrefixWidth;

    #[derive(Debug, Clone, PartialEq)]
    struct Reading {
        id: u8,
        level: i16,
        tag: [u8; 4],
        blob: Vec<u8>,
    }

    const READING: Layout = Layout::new(
        "Reading",
        &[
            FieldDef::u8("id"),
            FieldDef::i16("level"),
            FieldDef::fixed_bytes("tag", 4),
            FieldDef::bytes("blob", PrefixWidth::U8),
        ],
    );

    impl Record for Reading {
        const LAYOUT: &'static Layout = &READING;

        fn to_values(&self) -> Vec<FieldValue> {
            vec![
                self.id.into(),
                self.level.into(),
                self.tag.into(),
                self.blob.clone().into(),
            ]
        }

        fn from_fields(fields: &mut Fields) -> CodecResult<Self> {
            Ok(Self {
                id: fields.take()?,
                level: fields.take()?,
                tag: fields.take()?,
                blob: fields.take()?,
            })
        }
    }

    fn sample() -> Reading {
        Reading {
            id: 9,
            level: -40,
            tag: *b"ab\0\0",
            blob: vec![1, 2, 3],
        }
    }

    #[test]
    fn typed_roundtrip() {
        let reading = sample();
        let bytes = reading.serialize().unwrap();
        assert_eq!(bytes.len(), 1 + 2 + 4 + 1 + 3);
        assert_eq!(Reading::deserialize(&bytes).unwrap(), reading);
    }

    #[test]
    fn variable_layout_has_no_fixed_size() {
        assert_eq!(Reading::fixed_size(), None);
    }

    #[test]
    fn from_values_rejects_wrong_kind() {
        let values = vec![
            FieldValue::Bool(true),
            FieldValue::SInt(0),
            FieldValue::FixedBytes(vec![0; 4]),
            FieldValue::Bytes(vec![]),
        ];
        let err = Reading::from_values(values).unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidValue {
                record: "Reading",
                field: "id",
                reason: ValueReason::TypeMismatch {
                    expected: "uint",
                    found: "bool"
                },
            }
        );
    }

    #[test]
    fn from_values_rejects_missing_values() {
        let values = vec![FieldValue::UInt(1), FieldValue::SInt(0)];
        let err = Reading::from_values(values).unwrap_err();
        assert_eq!(
            err,
            CodecError::FieldCountMismatch {
                record: "Reading",
                expected: 4,
                actual: 2,
            }
        );
    }

    #[test]
    fn from_values_rejects_extra_values() {
        let mut values = sample().to_values();
        values.push(FieldValue::Bool(false));
        let err = Reading::from_values(values).unwrap_err();
        assert_eq!(
            err,
            CodecError::FieldCountMismatch {
                record: "Reading",
                expected: 4,
                actual: 5,
            }
        );
    }
}
