//! Core metadata types for entities and their fields
//!
//! All types use 'static lifetimes so schemas live in `const` items.

use super::field_type::FieldKind;
use super::validation::ValidationRules;
use crate::domain::common::EntityKind;

// ============================================================================
// Entity-level metadata
// ============================================================================

/// Registry entry for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMetadataInfo {
    pub kind: EntityKind,
    /// Index in the registry, e.g. "a001"
    pub entity_index: &'static str,
    /// REST resource path without slashes, e.g. "clients"
    pub collection_path: &'static str,
    pub ui: EntityUiMetadata,
}

/// UI metadata for an entity screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityUiMetadata {
    /// Singular name, e.g. "Client"
    pub element_name: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
}

// ============================================================================
// Field-level metadata
// ============================================================================

/// Metadata for a single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMetadata {
    /// Wire/draft key
    pub name: &'static str,
    pub kind: FieldKind,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
}

impl FieldMetadata {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            ui: FieldUiMetadata {
                label,
                placeholder: None,
            },
            validation: ValidationRules::none(),
        }
    }

    pub const fn required(mut self) -> Self {
        self.validation = ValidationRules::required();
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.ui.placeholder = Some(placeholder);
        self
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    /// Input placeholder, or the empty option text of a select
    pub placeholder: Option<&'static str>,
}

/// Look a field up by its wire name
pub fn find_field<'a>(fields: &'a [FieldMetadata], name: &str) -> Option<&'a FieldMetadata> {
    fields.iter().find(|f| f.name == name)
}
