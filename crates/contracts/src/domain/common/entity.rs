use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

use super::entity_kind::EntityKind;
use super::messages::EntityMessages;
use crate::shared::crud::{Cell, DraftError, FormDraft};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::resolver::{ReferenceOption, RelatedCollections};

/// Server-assigned identifier, immutable once created
pub type EntityId = i64;

/// Трейт для записи, которой управляет CRUD экран
///
/// One implementation per record type parameterises the generic reducer,
/// REST client and screen component.
pub trait Entity:
    Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Body sent on create and update
    type Payload: Clone + PartialEq + Debug + Serialize + Send + Sync + 'static;

    const KIND: EntityKind;

    /// Получить ID записи
    fn id(&self) -> EntityId;

    /// Form schema, in display order
    fn fields() -> &'static [FieldMetadata];

    /// Table headings, one per entry of [`cells`](Self::cells)
    fn columns() -> &'static [&'static str];

    /// Collections needed to resolve this entity's foreign keys
    fn related() -> &'static [EntityKind] {
        &[]
    }

    /// `false` when the backend exposes no update endpoint
    fn supports_update() -> bool {
        true
    }

    /// Draft for the add form
    fn default_draft(_today: NaiveDate) -> FormDraft {
        FormDraft::defaults(Self::fields())
    }

    /// Draft for the edit form, dates normalised to `YYYY-MM-DD`
    fn to_draft(&self) -> FormDraft;

    /// Serialise a validated draft into the wire shape
    fn payload_from_draft(draft: &FormDraft) -> Result<Self::Payload, DraftError>;

    /// Table cells, foreign keys resolved through `related`
    fn cells(&self, related: &RelatedCollections) -> Vec<Cell>;

    /// Texts the search box matches against
    fn search_texts(&self, related: &RelatedCollections) -> Vec<String>;

    /// This record as an option of another entity's select
    fn reference_option(&self) -> ReferenceOption;

    fn metadata() -> &'static EntityMetadataInfo {
        Self::KIND.metadata()
    }

    fn messages() -> &'static EntityMessages {
        Self::KIND.messages()
    }
}
