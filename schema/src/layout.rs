//! Record layouts: ordered field lists with an optional command id.

use crate::field::FieldDef;

/// The wire layout of one record type.
///
/// Fields are encoded in declaration order with no padding between them.
/// Reordering fields is a breaking change to the wire format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Record type name.
    pub name: &'static str,
    /// Command identifier carried in the protocol header, if any.
    pub command_id: Option<u8>,
    /// Fields in wire order.
    pub fields: &'static [FieldDef],
}

impl Layout {
    /// Creates a layout with no command id.
    #[must_use]
    pub const fn new(name: &'static str, fields: &'static [FieldDef]) -> Self {
        Self {
            name,
            command_id: None,
            fields,
        }
    }

    /// Creates a layout tagged with a command id.
    #[must_use]
    pub const fn command(name: &'static str, command_id: u8, fields: &'static [FieldDef]) -> Self {
        Self {
            name,
            command_id: Some(command_id),
            fields,
        }
    }

    /// Total encoded size, or `None` if any field is variable-length.
    #[must_use]
    pub const fn fixed_size(&self) -> Option<usize> {
        let mut total = 0;
        let mut i = 0;
        while i < self.fields.len() {
            match self.fields[i].kind.wire_size() {
                Some(size) => total += size,
                None => return None,
            }
            i += 1;
        }
        Some(total)
    }

    /// Returns `true` if every value of this record encodes to the same length.
    #[must_use]
    pub const fn is_fixed_size(&self) -> bool {
        self.fixed_size().is_some()
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Byte offset of a field, if every field before it is fixed-size.
    #[must_use]
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        let mut offset = 0;
        for field in self.fields {
            if field.name == name {
                return Some(offset);
            }
            offset += field.kind.wire_size()?;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytestream::PrefixWidth;

    const POINT: Layout = Layout::new(
        "Point",
        &[FieldDef::f32("x"), FieldDef::f32("y"), FieldDef::f32("z")],
    );

    const SAMPLE: Layout = Layout::new(
        "Sample",
        &[
            FieldDef::u64("timestamp"),
            FieldDef::u8("id"),
            FieldDef::record("point", &POINT),
            FieldDef::f32("value"),
        ],
    );

    const PACKET: Layout = Layout::command(
        "Packet",
        0x03,
        &[
            FieldDef::u8("channel"),
            FieldDef::bytes("data", PrefixWidth::U16),
            FieldDef::u8("trailer"),
        ],
    );

    #[test]
    fn fixed_size_sums_fields() {
        assert_eq!(POINT.fixed_size(), Some(12));
        assert_eq!(SAMPLE.fixed_size(), Some(8 + 1 + 12 + 4));
    }

    #[test]
    fn fixed_size_is_const_evaluable() {
        const SIZE: Option<usize> = SAMPLE.fixed_size();
        assert_eq!(SIZE, Some(25));
    }

    #[test]
    fn variable_layout_has_no_fixed_size() {
        assert_eq!(PACKET.fixed_size(), None);
        assert!(!PACKET.is_fixed_size());
        assert!(POINT.is_fixed_size());
    }

    #[test]
    fn command_id_is_recorded() {
        assert_eq!(PACKET.command_id, Some(0x03));
        assert_eq!(POINT.command_id, None);
    }

    #[test]
    fn field_lookup() {
        assert_eq!(SAMPLE.field("id").map(|f| f.name), Some("id"));
        assert!(SAMPLE.field("missing").is_none());
    }

    #[test]
    fn offsets_follow_declaration_order() {
        assert_eq!(SAMPLE.offset_of("timestamp"), Some(0));
        assert_eq!(SAMPLE.offset_of("id"), Some(8));
        assert_eq!(SAMPLE.offset_of("point"), Some(9));
        assert_eq!(SAMPLE.offset_of("value"), Some(21));
    }

    #[test]
    fn offset_after_variable_field_is_unknown() {
        assert_eq!(PACKET.offset_of("data"), Some(1));
        assert_eq!(PACKET.offset_of("trailer"), None);
    }
}
