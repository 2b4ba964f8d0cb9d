//! Field values in decoded form.

use crate::typed::Record;

/// A field value in decoded form.
///
/// Integers are widened to 64 bits; the field's [`schema::FieldKind`] decides
/// how many bytes reach the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    UInt(u64),
    SInt(i64),
    F32(f32),
    F64(f64),
    Bool(bool),
    FixedBytes(Vec<u8>),
    Bytes(Vec<u8>),
    /// Values of a nested record, in its layout order.
    Record(Vec<FieldValue>),
    /// One value list per nested record.
    RecordList(Vec<Vec<FieldValue>>),
}

impl FieldValue {
    /// Converts a typed record into a nested record value.
    pub fn record<R: Record>(record: &R) -> Self {
        Self::Record(record.to_values())
    }

    /// Converts a slice of typed records into a record list value.
    pub fn records<R: Record>(records: &[R]) -> Self {
        Self::RecordList(records.iter().map(Record::to_values).collect())
    }

    /// Short human-readable name of the variant.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::UInt(_) => "uint",
            Self::SInt(_) => "sint",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Bool(_) => "bool",
            Self::FixedBytes(_) => "fixed-bytes",
            Self::Bytes(_) => "bytes",
            Self::Record(_) => "record",
            Self::RecordList(_) => "record-list",
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    Self::UInt(u64::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    Self::SInt(i64::from(value))
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64);
impl_from_signed!(i8, i16, i32, i64);

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        Self::F32(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<const N: usize> From<[u8; N]> for FieldValue {
    fn from(value: [u8; N]) -> Self {
        Self::FixedBytes(value.to_vec())
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&[u8]> for FieldValue {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

/// Extraction of a typed scalar or byte value from a [`FieldValue`].
///
/// On mismatch the original value is handed back so the caller can report
/// what was found.
pub trait FromFieldValue: Sized {
    /// Name of the expected value kind, used in error messages.
    const EXPECTED: &'static str;

    fn from_field_value(value: FieldValue) -> Result<Self, FieldValue>;
}

macro_rules! impl_from_field_value_int {
    ($variant:ident, $name:literal, $($ty:ty),*) => {
        $(
            impl FromFieldValue for $ty {
                const EXPECTED: &'static str = $name;

                fn from_field_value(value: FieldValue) -> Result<Self, FieldValue> {
                    match value {
                        FieldValue::$variant(raw) => <$ty>::try_from(raw).map_err(|_| value),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

impl_from_field_value_int!(UInt, "uint", u8, u16, u32, u64);
impl_from_field_value_int!(SInt, "sint", i8, i16, i32, i64);

impl FromFieldValue for f32 {
    const EXPECTED: &'static str = "f32";

    fn from_field_value(value: FieldValue) -> Result<Self, FieldValue> {
        match value {
            FieldValue::F32(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl FromFieldValue for f64 {
    const EXPECTED: &'static str = "f64";

    fn from_field_value(value: FieldValue) -> Result<Self, FieldValue> {
        match value {
            FieldValue::F64(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl FromFieldValue for bool {
    const EXPECTED: &'static str = "bool";

    fn from_field_value(value: FieldValue) -> Result<Self, FieldValue> {
        match value {
            FieldValue::Bool(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl<const N: usize> FromFieldValue for [u8; N] {
    const EXPECTED: &'static str = "fixed-bytes";

    fn from_field_value(value: FieldValue) -> Result<Self, FieldValue> {
        match value {
            FieldValue::FixedBytes(bytes) => {
                <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| FieldValue::FixedBytes(bytes))
            }
            other => Err(other),
        }
    }
}

impl FromFieldValue for Vec<u8> {
    const EXPECTED: &'static str = "bytes";

    fn from_field_value(value: FieldValue) -> Result<Self, FieldValue> {
        match value {
            FieldValue::Bytes(bytes) => Ok(bytes),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_integers_widens() {
        assert_eq!(FieldValue::from(7u8), FieldValue::UInt(7));
        assert_eq!(FieldValue::from(u64::MAX), FieldValue::UInt(u64::MAX));
        assert_eq!(FieldValue::from(-5i16), FieldValue::SInt(-5));
    }

    #[test]
    fn from_arrays_and_vecs_pick_distinct_variants() {
        assert_eq!(
            FieldValue::from([1u8, 2]),
            FieldValue::FixedBytes(vec![1, 2])
        );
        assert_eq!(FieldValue::from(vec![1u8, 2]), FieldValue::Bytes(vec![1, 2]));
    }

    #[test]
    fn extract_narrow_integer() {
        assert_eq!(u8::from_field_value(FieldValue::UInt(255)), Ok(255));
        assert_eq!(i16::from_field_value(FieldValue::SInt(-300)), Ok(-300));
    }

    #[test]
    fn extract_out_of_range_hands_value_back() {
        let err = u8::from_field_value(FieldValue::UInt(256)).unwrap_err();
        assert_eq!(err, FieldValue::UInt(256));
    }

    #[test]
    fn extract_wrong_kind_hands_value_back() {
        let err = bool::from_field_value(FieldValue::UInt(1)).unwrap_err();
        assert_eq!(err.kind_name(), "uint");
    }

    #[test]
    fn extract_fixed_array_requires_exact_length() {
        assert_eq!(
            <[u8; 3]>::from_field_value(FieldValue::FixedBytes(vec![1, 0, 3])),
            Ok([1, 0, 3])
        );
        assert!(<[u8; 3]>::from_field_value(FieldValue::FixedBytes(vec![1, 2])).is_err());
    }

    #[test]
    fn extract_f32_keeps_bits() {
        let nan = f32::from_bits(0x7FC0_1234);
        let value = f32::from_field_value(FieldValue::F32(nan)).unwrap();
        assert_eq!(value.to_bits(), 0x7FC0_1234);
    }
}
