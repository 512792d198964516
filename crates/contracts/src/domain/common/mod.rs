//! Common types and traits for all entities

pub mod entity;
pub mod entity_kind;
pub mod messages;

// Re-exports
pub use entity::{Entity, EntityId};
pub use entity_kind::EntityKind;
pub use messages::{EntityMessages, REQUIRED_FIELDS_MISSING};
