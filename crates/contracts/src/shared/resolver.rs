//! Reference resolution: foreign key -> human readable label
//!
//! Foreign keys are stored raw on every record and resolved at render time
//! against whatever related collection the screen currently holds. A missing
//! or not yet loaded collection is not an error: the raw key is shown.

use std::collections::HashMap;
use std::fmt::Display;

use crate::domain::common::{EntityId, EntityKind};

/// Resolve `key` against `items`.
///
/// Returns the label of the first item whose key equals `key`, or the key
/// itself rendered as text.
pub fn resolve_label<T, K, FK, FL>(key: &K, items: &[T], key_of: FK, label_of: FL) -> String
where
    K: PartialEq + Display,
    FK: Fn(&T) -> K,
    FL: Fn(&T) -> String,
{
    items
        .iter()
        .find(|item| key_of(item) == *key)
        .map(label_of)
        .unwrap_or_else(|| key.to_string())
}

/// One record of a related collection, reduced to what a select or a table
/// cell needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceOption {
    pub id: EntityId,
    pub label: String,
    /// Secondary text shown next to the label in selects
    pub detail: Option<String>,
}

impl ReferenceOption {
    pub fn new(id: EntityId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        self.detail = if detail.trim().is_empty() { None } else { Some(detail) };
        self
    }

    /// "Label - detail", or just the label
    pub fn option_text(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{} - {}", self.label, detail),
            None => self.label.clone(),
        }
    }
}

/// Related collections held by a screen, keyed by entity kind
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RelatedCollections {
    collections: HashMap<EntityKind, Vec<ReferenceOption>>,
}

impl RelatedCollections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection of `kind` wholesale
    pub fn set(&mut self, kind: EntityKind, options: Vec<ReferenceOption>) {
        self.collections.insert(kind, options);
    }

    /// Options of `kind`; empty while not loaded
    pub fn options(&self, kind: EntityKind) -> &[ReferenceOption] {
        self.collections
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn lookup(&self, kind: EntityKind, id: EntityId) -> Option<&ReferenceOption> {
        self.options(kind).iter().find(|o| o.id == id)
    }

    /// Label of `id` in the `kind` collection, falling back to the raw id
    pub fn resolve(&self, kind: EntityKind, id: EntityId) -> String {
        resolve_label(&id, self.options(kind), |o| o.id, |o| o.label.clone())
    }

    /// Like [`resolve`](Self::resolve) for optional keys; `None` gives `placeholder`
    pub fn resolve_opt(&self, kind: EntityKind, id: Option<EntityId>, placeholder: &str) -> String {
        match id {
            Some(id) => self.resolve(kind, id),
            None => placeholder.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grades() -> Vec<ReferenceOption> {
        vec![
            ReferenceOption::new(1, "Junior"),
            ReferenceOption::new(2, "Senior"),
        ]
    }

    #[test]
    fn test_resolve_label_found() {
        let label = resolve_label(&2, &grades(), |g| g.id, |g| g.label.clone());
        assert_eq!(label, "Senior");
    }

    #[test]
    fn test_resolve_label_missing_key_falls_back_to_raw_key() {
        let label = resolve_label(&42, &grades(), |g| g.id, |g| g.label.clone());
        assert_eq!(label, "42");
    }

    #[test]
    fn test_resolve_against_empty_collection() {
        let empty: Vec<ReferenceOption> = Vec::new();
        assert_eq!(resolve_label(&7, &empty, |g| g.id, |g| g.label.clone()), "7");
    }

    #[test]
    fn test_related_collections_before_load() {
        let related = RelatedCollections::new();
        assert!(related.options(EntityKind::StaffGrade).is_empty());
        assert_eq!(related.resolve(EntityKind::StaffGrade, 3), "3");
        assert_eq!(related.resolve_opt(EntityKind::StaffGrade, None, "-"), "-");
    }

    #[test]
    fn test_related_collections_after_load() {
        let mut related = RelatedCollections::new();
        related.set(EntityKind::StaffGrade, grades());
        assert_eq!(related.options(EntityKind::StaffGrade).len(), 2);
        assert_eq!(related.resolve(EntityKind::StaffGrade, 1), "Junior");
        assert_eq!(related.resolve_opt(EntityKind::StaffGrade, Some(2), "-"), "Senior");
        assert_eq!(related.lookup(EntityKind::StaffGrade, 9), None);
    }

    #[test]
    fn test_option_text() {
        let client = ReferenceOption::new(1, "Acme").with_detail("acme@example.com");
        assert_eq!(client.option_text(), "Acme - acme@example.com");
        let bare = ReferenceOption::new(2, "Globex").with_detail("  ");
        assert_eq!(bare.option_text(), "Globex");
    }
}
