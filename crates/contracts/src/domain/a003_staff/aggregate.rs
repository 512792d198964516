use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, EntityId, EntityKind, EntityMessages};
use crate::shared::crud::{Cell, DraftError, FieldValue, FormDraft};
use crate::shared::date_utils::{date_input, to_date_input};
use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata, FieldKind, FieldMetadata};
use crate::shared::resolver::{ReferenceOption, RelatedCollections};
use crate::shared::wire::null_to_default;

/// Staff member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub staff_id: EntityId,
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub role: String,
    /// Текущий грейд (StaffGrade)
    #[serde(default)]
    pub grade_id: Option<EntityId>,
    /// Calendar date or ISO timestamp, as the backend stores it
    #[serde(default, deserialize_with = "null_to_default")]
    pub start_date: String,
    /// Free text, not a reference
    #[serde(default, deserialize_with = "null_to_default")]
    pub starting_grade: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffDto {
    pub name: String,
    pub role: String,
    pub grade_id: EntityId,
    /// Midnight UTC, full ISO timestamp
    pub start_date: String,
    pub starting_grade: String,
}

pub const FIELDS: [FieldMetadata; 5] = [
    FieldMetadata::new("name", "Name", FieldKind::Text)
        .required()
        .placeholder("Enter staff name"),
    FieldMetadata::new("role", "Role", FieldKind::Text)
        .required()
        .placeholder("Enter role"),
    FieldMetadata::new("grade_id", "Grade", FieldKind::Reference(EntityKind::StaffGrade))
        .required()
        .placeholder("Select a grade"),
    FieldMetadata::new("starting_grade", "Starting Grade", FieldKind::Text)
        .placeholder("Enter starting grade"),
    FieldMetadata::new("start_date", "Start Date", FieldKind::Date).required(),
];

pub const COLUMNS: [&str; 5] = ["Name", "Role", "Grade", "Starting Grade", "Start Date"];

const RELATED: [EntityKind; 1] = [EntityKind::StaffGrade];

pub const METADATA: EntityMetadataInfo = EntityMetadataInfo {
    kind: EntityKind::Staff,
    entity_index: "a003",
    collection_path: "staff",
    ui: EntityUiMetadata {
        element_name: "Staff Member",
        title: "Staff Management",
        subtitle: "Manage your staff members and their roles",
        icon: "users",
    },
};

pub const MESSAGES: EntityMessages = EntityMessages {
    fetch_failed: "Failed to fetch staff",
    created: "Staff member added successfully",
    create_failed: "Failed to add staff member",
    updated: "Staff member updated successfully",
    update_failed: "Failed to update staff member",
    deleted: "Staff member deleted successfully",
    delete_failed: "Failed to delete staff member",
    confirm_delete: "Are you sure you want to delete this staff member?",
    empty_list: "No staff members found",
    search_placeholder: "Search staff...",
    add_button: "Add New Staff",
    add_title: "Add New Staff Member",
    edit_title: "Edit Staff Member",
    create_submit: "Add Staff Member",
    update_submit: "Update Staff Member",
};

impl Entity for Staff {
    type Payload = StaffDto;

    const KIND: EntityKind = EntityKind::Staff;

    fn id(&self) -> EntityId {
        self.staff_id
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

    /// New staff start today
    fn default_draft(today: NaiveDate) -> FormDraft {
        FormDraft::defaults(&FIELDS).with("start_date", FieldValue::Text(date_input(today)))
    }

    fn to_draft(&self) -> FormDraft {
        FormDraft::new()
            .with("name", FieldValue::Text(self.name.clone()))
            .with("role", FieldValue::Text(self.role.clone()))
            .with("grade_id", FieldValue::Integer(self.grade_id))
            .with("starting_grade", FieldValue::Text(self.starting_grade.clone()))
            .with("start_date", FieldValue::Text(to_date_input(&self.start_date)))
    }

    fn payload_from_draft(draft: &FormDraft) -> Result<StaffDto, DraftError> {
        Ok(StaffDto {
            name: draft.text("name"),
            role: draft.text("role"),
            grade_id: draft.require_integer("grade_id")?,
            start_date: draft.require_timestamp("start_date")?,
            starting_grade: draft.text("starting_grade"),
        })
    }

    fn cells(&self, related: &RelatedCollections) -> Vec<Cell> {
        vec![
            Cell::text(&self.name),
            Cell::text(&self.role),
            Cell::text(related.resolve_opt(EntityKind::StaffGrade, self.grade_id, "")),
            Cell::text(&self.starting_grade),
            Cell::date(&self.start_date),
        ]
    }

    fn search_texts(&self, _related: &RelatedCollections) -> Vec<String> {
        vec![self.name.clone(), self.role.clone()]
    }

    fn reference_option(&self) -> ReferenceOption {
        ReferenceOption::new(self.staff_id, &self.name).with_detail(&self.role)
    }
}
