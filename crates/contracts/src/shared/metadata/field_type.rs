//! Field kind enumeration for the metadata system

use crate::domain::common::EntityKind;

/// Widget and coercion rule of a single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, kept as typed
    Text,
    /// Whole number, parsed like `parseInt`
    Integer,
    /// Floating point amount
    Decimal,
    /// Calendar date, `YYYY-MM-DD` in the form
    Date,
    /// Checkbox
    Boolean,
    /// Fixed list of `(value, label)` pairs
    Choice(&'static [(&'static str, &'static str)]),
    /// Foreign key into another entity's collection
    Reference(EntityKind),
}

impl FieldKind {
    /// HTML `type` attribute for kinds rendered as `<input>`
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Integer | Self::Decimal => "number",
            Self::Date => "date",
            Self::Boolean => "checkbox",
            Self::Text | Self::Choice(_) | Self::Reference(_) => "text",
        }
    }
}
