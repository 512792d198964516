use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, EntityId, EntityKind, EntityMessages};
use crate::shared::crud::{Cell, DraftError, FieldValue, FormDraft};
use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata, FieldKind, FieldMetadata};
use crate::shared::resolver::{ReferenceOption, RelatedCollections};
use crate::shared::wire::null_to_default;

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub client_id: EntityId,
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub contact_details: String,
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClientDto {
    pub name: String,
    pub address: String,
    pub contact_details: String,
}

// ============================================================================
// Metadata
// ============================================================================
pub const FIELDS: [FieldMetadata; 3] = [
    FieldMetadata::new("name", "Name", FieldKind::Text)
        .required()
        .placeholder("Enter client name"),
    FieldMetadata::new("address", "Address", FieldKind::Text).placeholder("Enter client address"),
    FieldMetadata::new("contact_details", "Contact Details", FieldKind::Text)
        .placeholder("Enter contact details"),
];

pub const COLUMNS: [&str; 3] = ["Name", "Address", "Contact Details"];

pub const METADATA: EntityMetadataInfo = EntityMetadataInfo {
    kind: EntityKind::Client,
    entity_index: "a001",
    collection_path: "clients",
    ui: EntityUiMetadata {
        element_name: "Client",
        title: "Client Management",
        subtitle: "Manage your client information and details",
        icon: "building",
    },
};

pub const MESSAGES: EntityMessages = EntityMessages {
    fetch_failed: "Failed to fetch clients",
    created: "Client added successfully",
    create_failed: "Failed to add client",
    updated: "Client updated successfully",
    update_failed: "Failed to update client",
    deleted: "Client deleted successfully",
    delete_failed: "Failed to delete client",
    confirm_delete: "Are you sure you want to delete this client?",
    empty_list: "No clients found",
    search_placeholder: "Search clients...",
    add_button: "Add New Client",
    add_title: "Add New Client",
    edit_title: "Edit Client",
    create_submit: "Add Client",
    update_submit: "Update Client",
};

impl Entity for Client {
    type Payload = ClientDto;

    const KIND: EntityKind = EntityKind::Client;

    fn id(&self) -> EntityId {
        self.client_id
    }

    fn fields() -> &'static [FieldMetadata] {
        &FIELDS
    }

    fn columns() -> &'static [&'static str] {
        &COLUMNS
    }

    fn to_draft(&self) -> FormDraft {
        FormDraft::new()
            .with("name", FieldValue::Text(self.name.clone()))
            .with("address", FieldValue::Text(self.address.clone()))
            .with("contact_details", FieldValue::Text(self.contact_details.clone()))
    }

    fn payload_from_draft(draft: &FormDraft) -> Result<ClientDto, DraftError> {
        Ok(ClientDto {
            name: draft.text("name"),
            address: draft.text("address"),
            contact_details: draft.text("contact_details"),
        })
    }

    fn cells(&self, _related: &RelatedCollections) -> Vec<Cell> {
        vec![
            Cell::text(&self.name),
            Cell::text(&self.address),
            Cell::text(&self.contact_details),
        ]
    }

    fn search_texts(&self, _related: &RelatedCollections) -> Vec<String> {
        vec![
            self.name.clone(),
            self.address.clone(),
            self.contact_details.clone(),
        ]
    }

    fn reference_option(&self) -> ReferenceOption {
        ReferenceOption::new(self.client_id, &self.name).with_detail(&self.contact_details)
    }
}
