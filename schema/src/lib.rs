//! Declarative record layouts for the devproto codec.
//!
//! A [`Layout`] is an ordered list of [`FieldDef`]s. Each field names one
//! [`FieldKind`]: a fixed-width integer, a float, a boolean, a fixed-length
//! byte array, a length-prefixed byte span, or a nested record. The codec
//! crate walks these descriptions to encode and decode; adding a record type
//! means adding a layout, not a new pair of functions.
//!
//! # Design Principles
//!
//! - **Compile-time layouts** - Layouts are `const` values; sizes are `const fn`.
//! - **Explicit wire order** - Field order in a layout is the byte order on the wire.
//! - **No values** - This crate describes shapes only.

mod field;
mod layout;

pub use bytestream::PrefixWidth;
pub use field::{FieldDef, FieldKind, FloatWidth, IntWidth};
pub use layout::Layout;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = FieldDef::bool("flag");
        let _ = FieldKind::Bool;
        let _ = IntWidth::W8;
        let _ = FloatWidth::F32;
        let _ = PrefixWidth::U16;
        let _ = Layout::new("Empty", &[]);
    }

    #[test]
    fn empty_layout_is_zero_sized() {
        const EMPTY: Layout = Layout::new("Empty", &[]);
        assert_eq!(EMPTY.fixed_size(), Some(0));
    }
}
