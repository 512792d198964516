use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, EntityId, EntityKind, EntityMessages};
use crate::shared::crud::{Cell, DraftError, FieldValue, FormDraft};
use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata, FieldKind, FieldMetadata};
use crate::shared::resolver::{ReferenceOption, RelatedCollections};

/// Staff member designated as a campaign manager.
///
/// The backend has no update endpoint: managers are only assigned and removed.
/// `staff_name` and `role` are joined in by the backend when available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignManager {
    pub manager_id: EntityId,
    #[serde(default)]
    pub staff_id: Option<EntityId>,
    #[serde(default)]
    pub staff_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl CampaignManager {
    /// Label used wherever a manager is referenced
    pub fn display_name(&self) -> String {
        match self.staff_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Manager #{}", self.manager_id),
        }
    }

    /// Staff name resolved against the Staff collection; joined name and then
    /// the raw staff id when it cannot be resolved
    pub fn staff_label(&self, related: &RelatedCollections) -> String {
        let Some(staff_id) = self.staff_id else {
            return self.staff_name.clone().unwrap_or_default();
        };
        match (related.lookup(EntityKind::Staff, staff_id), &self.staff_name) {
            (Some(staff), _) => staff.label.clone(),
            (None, Some(name)) => name.clone(),
            (None, None) => staff_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignManagerDto {
    pub staff_id: EntityId,
}

pub const FIELDS: [FieldMetadata; 1] = [FieldMetadata::new(
    "staff_id",
    "Select Staff",
    FieldKind::Reference(EntityKind::Staff),
)
.required()
.placeholder("Select a staff member")];

pub const COLUMNS: [&str; 2] = ["Manager ID", "Staff Name"];

const RELATED: [EntityKind; 1] = [EntityKind::Staff];

pub const METADATA: EntityMetadataInfo = EntityMetadataInfo {
    kind: EntityKind::CampaignManager,
    entity_index: "a004",
    collection_path: "campaign-manager",
    ui: EntityUiMetadata {
        element_name: "Campaign Manager",
        title: "Campaign Manager Management",
        subtitle: "Assign and manage campaign managers",
        icon: "user-cog",
    },
};

pub const MESSAGES: EntityMessages = EntityMessages {
    fetch_failed: "Failed to fetch campaign managers",
    created: "Campaign manager added successfully",
    create_failed: "Failed to add campaign manager",
    updated: "Campaign manager updated successfully",
    update_failed: "Failed to update campaign manager",
    deleted: "Campaign manager removed successfully",
    delete_failed: "Failed to remove campaign manager",
    confirm_delete: "Are you sure you want to remove this campaign manager?",
    empty_list: "No campaign managers found",
    search_placeholder: "Search managers...",
    add_button: "Add New Manager",
    add_title: "Add New Campaign Manager",
    edit_title: "Edit Campaign Manager",
    create_submit: "Add Manager",
    update_submit: "Update Manager",
};

impl Entity for CampaignManager {
    type Payload = CampaignManagerDto;

    const KIND: EntityKind = EntityKind::CampaignManager;

    fn id(&self) -> EntityId {
        self.manager_id
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

    fn supports_update() -> bool {
        false
    }

    fn to_draft(&self) -> FormDraft {
        FormDraft::new().with("staff_id", FieldValue::Integer(self.staff_id))
    }

    fn payload_from_draft(draft: &FormDraft) -> Result<CampaignManagerDto, DraftError> {
        Ok(CampaignManagerDto {
            staff_id: draft.require_integer("staff_id")?,
        })
    }

    fn cells(&self, related: &RelatedCollections) -> Vec<Cell> {
        vec![
            Cell::text(self.manager_id.to_string()),
            Cell::text(self.staff_label(related)),
        ]
    }

    fn search_texts(&self, related: &RelatedCollections) -> Vec<String> {
        vec![self.staff_label(related)]
    }

    fn reference_option(&self) -> ReferenceOption {
        let option = ReferenceOption::new(self.manager_id, self.display_name());
        match &self.role {
            Some(role) => option.with_detail(role),
            None => option,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::REQUIRED_FIELDS_MISSING;
    use crate::shared::crud::{reduce, CrudAction, CrudState, RawInput};

    #[test]
    fn test_decode_joined_row() {
        let json = r#"{"manager_id": 7, "staff_id": 3, "staff_name": "Jane Doe", "role": "Lead"}"#;
        let manager: CampaignManager = serde_json::from_str(json).unwrap();
        assert_eq!(manager.display_name(), "Jane Doe");
        assert_eq!(manager.reference_option().option_text(), "Jane Doe - Lead");
    }

    #[test]
    fn test_display_name_without_join() {
        let manager: CampaignManager =
            serde_json::from_str(r#"{"manager_id": 7, "staff_id": 3}"#).unwrap();
        assert_eq!(manager.display_name(), "Manager #7");
    }

    #[test]
    fn test_staff_column_resolves_through_staff_collection() {
        let manager = CampaignManager {
            manager_id: 1,
            staff_id: Some(3),
            staff_name: None,
            role: None,
        };
        let mut related = RelatedCollections::new();
        assert_eq!(manager.staff_label(&related), "3");

        related.set(EntityKind::Staff, vec![ReferenceOption::new(3, "Jane Doe")]);
        assert_eq!(manager.cells(&related)[1].plain_text(), "Jane Doe");
        assert_eq!(manager.search_texts(&related), vec!["Jane Doe".to_string()]);
    }

    #[test]
    fn test_payload_is_staff_id_only() {
        let draft = FormDraft::new().with("staff_id", FieldValue::Integer(Some(3)));
        let payload = CampaignManager::payload_from_draft(&draft).unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"staff_id": 3})
        );
    }

    #[test]
    fn test_edit_is_not_offered() {
        let manager = CampaignManager {
            manager_id: 1,
            staff_id: Some(3),
            staff_name: None,
            role: None,
        };
        let state = reduce(CrudState::new(), CrudAction::OpenEdit(manager)).state;
        assert!(!state.show_edit);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_create_without_staff_is_rejected() {
        let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let state = reduce(
            CrudState::<CampaignManager>::new(),
            CrudAction::OpenCreate { today },
        )
        .state;
        let state = reduce(
            state,
            CrudAction::UpdateField {
                name: "staff_id".into(),
                input: RawInput::Text("".into()),
            },
        )
        .state;
        let transition = reduce(state, CrudAction::Submit);
        assert_eq!(transition.command, None);
        assert_eq!(
            transition.state.error_message.as_deref(),
            Some(REQUIRED_FIELDS_MISSING)
        );
    }
}
