use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, EntityId, EntityKind, EntityMessages};
use crate::shared::crud::{Cell, DraftError, FieldValue, FormDraft};
use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata, FieldKind, FieldMetadata};
use crate::shared::resolver::{ReferenceOption, RelatedCollections};
use crate::shared::wire::null_to_default;

/// Pay grade a staff member is hired on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffGrade {
    pub grade_id: EntityId,
    #[serde(default, deserialize_with = "null_to_default")]
    pub grade_name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub pay_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StaffGradeDto {
    pub grade_name: String,
    pub pay_rate: f64,
}

pub const FIELDS: [FieldMetadata; 2] = [
    FieldMetadata::new("grade_name", "Grade Name", FieldKind::Text)
        .required()
        .placeholder("Enter grade name"),
    FieldMetadata::new("pay_rate", "Pay Rate ($)", FieldKind::Decimal)
        .required()
        .placeholder("Enter pay rate"),
];

pub const COLUMNS: [&str; 2] = ["Grade Name", "Pay Rate"];

pub const METADATA: EntityMetadataInfo = EntityMetadataInfo {
    kind: EntityKind::StaffGrade,
    entity_index: "a002",
    collection_path: "grades",
    ui: EntityUiMetadata {
        element_name: "Grade",
        title: "Staff Grades Management",
        subtitle: "Manage staff grades and pay rates",
        icon: "medal",
    },
};

pub const MESSAGES: EntityMessages = EntityMessages {
    fetch_failed: "Failed to fetch grades",
    created: "Grade added successfully",
    create_failed: "Failed to add grade",
    updated: "Grade updated successfully",
    update_failed: "Failed to update grade",
    deleted: "Grade deleted successfully",
    delete_failed: "Failed to delete grade",
    confirm_delete: "Are you sure you want to delete this grade?",
    empty_list: "No grades found",
    search_placeholder: "Search grades...",
    add_button: "Add New Grade",
    add_title: "Add New Grade",
    edit_title: "Edit Grade",
    create_submit: "Add Grade",
    update_submit: "Update Grade",
};

impl Entity for StaffGrade {
    type Payload = StaffGradeDto;

    const KIND: EntityKind = EntityKind::StaffGrade;

    fn id(&self) -> EntityId {
        self.grade_id
    }

    fn fields() -> &'static [FieldMetadata] {
        &FIELDS
    }

    fn columns() -> &'static [&'static str] {
        &COLUMNS
    }

    fn to_draft(&self) -> FormDraft {
        FormDraft::new()
            .with("grade_name", FieldValue::Text(self.grade_name.clone()))
            .with("pay_rate", FieldValue::Decimal(Some(self.pay_rate)))
    }

    fn payload_from_draft(draft: &FormDraft) -> Result<StaffGradeDto, DraftError> {
        Ok(StaffGradeDto {
            grade_name: draft.text("grade_name"),
            pay_rate: draft.decimal("pay_rate").ok_or(DraftError::Missing("pay_rate"))?,
        })
    }

    fn cells(&self, _related: &RelatedCollections) -> Vec<Cell> {
        vec![Cell::text(&self.grade_name), Cell::Money(self.pay_rate)]
    }

    fn search_texts(&self, _related: &RelatedCollections) -> Vec<String> {
        vec![self.grade_name.clone()]
    }

    fn reference_option(&self) -> ReferenceOption {
        ReferenceOption::new(self.grade_id, &self.grade_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::RawInput;

    #[test]
    fn test_pay_rate_is_sent_as_number() {
        let mut draft = FormDraft::defaults(&FIELDS);
        draft
            .apply_input(&FIELDS, "grade_name", RawInput::Text("Senior".into()))
            .unwrap();
        draft
            .apply_input(&FIELDS, "pay_rate", RawInput::Text("42.5".into()))
            .unwrap();
        let payload = StaffGrade::payload_from_draft(&draft).unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"grade_name": "Senior", "pay_rate": 42.5})
        );
    }

    #[test]
    fn test_both_fields_required() {
        let draft = FormDraft::defaults(&FIELDS).with("grade_name", FieldValue::Text("Junior".into()));
        assert_eq!(draft.missing_required(&FIELDS), vec!["pay_rate"]);
    }

    #[test]
    fn test_pay_rate_renders_as_money() {
        let grade = StaffGrade {
            grade_id: 1,
            grade_name: "Senior".into(),
            pay_rate: 1250.0,
        };
        let cells = grade.cells(&RelatedCollections::new());
        assert_eq!(cells[1].plain_text(), "$1,250.00");
    }
}
