use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, EntityId, EntityKind, EntityMessages};
use crate::shared::crud::{Cell, DraftError, FieldValue, FormDraft};
use crate::shared::date_utils::to_date_input;
use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata, FieldKind, FieldMetadata};
use crate::shared::resolver::{ReferenceOption, RelatedCollections};
use crate::shared::wire::null_to_default;

/// Advertisement placed within a campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advert {
    pub advert_id: EntityId,
    #[serde(default)]
    pub campaign_id: Option<EntityId>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub progress: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub run_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertDto {
    pub campaign_id: EntityId,
    pub progress: String,
    /// Midnight UTC of the chosen day
    pub run_date: String,
}

pub const FIELDS: [FieldMetadata; 3] = [
    FieldMetadata::new("campaign_id", "Campaign", FieldKind::Reference(EntityKind::Campaign))
        .required()
        .placeholder("Select a campaign"),
    FieldMetadata::new("progress", "Progress", FieldKind::Text)
        .placeholder("Enter progress status"),
    FieldMetadata::new("run_date", "Run Date", FieldKind::Date).required(),
];

pub const COLUMNS: [&str; 3] = ["Campaign", "Progress", "Run Date"];

const RELATED: [EntityKind; 1] = [EntityKind::Campaign];

pub const METADATA: EntityMetadataInfo = EntityMetadataInfo {
    kind: EntityKind::Advert,
    entity_index: "a006",
    collection_path: "adverts",
    ui: EntityUiMetadata {
        element_name: "Advert",
        title: "Advert Management",
        subtitle: "Manage your campaign advertisements",
        icon: "radio",
    },
};

// Create and update share one failure text
pub const MESSAGES: EntityMessages = EntityMessages {
    fetch_failed: "Failed to fetch adverts",
    created: "Advert added successfully",
    create_failed: "Failed to save advert",
    updated: "Advert updated successfully",
    update_failed: "Failed to save advert",
    deleted: "Advert deleted successfully",
    delete_failed: "Failed to delete advert",
    confirm_delete: "Are you sure you want to delete this advert?",
    empty_list: "No adverts found",
    search_placeholder: "Search adverts...",
    add_button: "Add New Advert",
    add_title: "Add New Advert",
    edit_title: "Edit Advert",
    create_submit: "Add Advert",
    update_submit: "Update Advert",
};

impl Entity for Advert {
    type Payload = AdvertDto;

    const KIND: EntityKind = EntityKind::Advert;

    fn id(&self) -> EntityId {
        self.advert_id
    }

    fn fields() -> &'static [FieldMetadata] {
        &FIELDS
    }

    fn columns() -> &'static [&'static str] {
        &COLUMNS
    }

    fn related() -> &'static [EntityKind] {
        &RELATED
    }

    fn to_draft(&self) -> FormDraft {
        FormDraft::new()
            .with("campaign_id", FieldValue::Integer(self.campaign_id))
            .with("progress", FieldValue::Text(self.progress.clone()))
            .with("run_date", FieldValue::Text(to_date_input(&self.run_date)))
    }

    fn payload_from_draft(draft: &FormDraft) -> Result<AdvertDto, DraftError> {
        Ok(AdvertDto {
            campaign_id: draft.require_integer("campaign_id")?,
            progress: draft.text("progress"),
            run_date: draft.require_timestamp("run_date")?,
        })
    }

    fn cells(&self, related: &RelatedCollections) -> Vec<Cell> {
        vec![
            Cell::text(self.campaign_title(related)),
            Cell::text(&self.progress),
            Cell::date(&self.run_date),
        ]
    }

    fn search_texts(&self, related: &RelatedCollections) -> Vec<String> {
        vec![self.progress.clone(), self.campaign_title(related)]
    }

    fn reference_option(&self) -> ReferenceOption {
        ReferenceOption::new(self.advert_id, &self.progress)
    }
}

impl Advert {
    pub fn campaign_title(&self, related: &RelatedCollections) -> String {
        related.resolve_opt(EntityKind::Campaign, self.campaign_id, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::filter_items;

    fn advert(id: EntityId, campaign_id: EntityId, progress: &str) -> Advert {
        Advert {
            advert_id: id,
            campaign_id: Some(campaign_id),
            progress: progress.into(),
            run_date: "2024-05-01T00:00:00.000Z".into(),
        }
    }

    #[test]
    fn test_edit_round_trip() {
        let draft = advert(1, 3, "Draft").to_draft();
        assert_eq!(draft.text("run_date"), "2024-05-01");

        let payload = Advert::payload_from_draft(&draft).unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "campaign_id": 3,
                "progress": "Draft",
                "run_date": "2024-05-01T00:00:00.000Z"
            })
        );
    }

    #[test]
    fn test_search_matches_resolved_campaign_title() {
        let items = vec![advert(1, 3, "Live"), advert(2, 4, "Draft")];
        let mut related = RelatedCollections::new();
        related.set(
            EntityKind::Campaign,
            vec![
                ReferenceOption::new(3, "Spring Launch"),
                ReferenceOption::new(4, "Winter Promo"),
            ],
        );

        let found: Vec<EntityId> = filter_items(&items, &related, "winter")
            .iter()
            .map(|a| a.advert_id)
            .collect();
        assert_eq!(found, vec![2]);

        let found: Vec<EntityId> = filter_items(&items, &related, "LIVE")
            .iter()
            .map(|a| a.advert_id)
            .collect();
        assert_eq!(found, vec![1]);
    }

    #[test]
    fn test_campaign_falls_back_to_raw_id() {
        let cells = advert(1, 9, "Live").cells(&RelatedCollections::new());
        assert_eq!(cells[0].plain_text(), "9");
        assert_eq!(cells[2].plain_text(), "5/1/2024");
    }
}
