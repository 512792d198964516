//! Metadata types describing entity forms and tables
//!
//! Every entity publishes a static slice of [`FieldMetadata`]. The generic
//! CRUD screen renders its form from that slice, the reducer coerces input
//! and checks required fields with it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::common::Entity;
//! use contracts::domain::a001_client::aggregate::Client;
//!
//! for field in Client::fields() {
//!     println!("{}: {}", field.name, field.ui.label);
//! }
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::FieldKind;
pub use types::{find_field, EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FieldUiMetadata};
pub use validation::ValidationRules;
