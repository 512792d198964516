//! Validation rules for metadata fields

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub required: bool,
}

impl ValidationRules {
    /// Optional field, no constraints
    pub const fn none() -> Self {
        Self { required: false }
    }

    /// Field must be non-empty before submit
    pub const fn required() -> Self {
        Self { required: true }
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }
}
