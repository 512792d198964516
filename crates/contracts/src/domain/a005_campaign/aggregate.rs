use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, EntityId, EntityKind, EntityMessages};
use crate::shared::crud::{Cell, DraftError, FieldValue, FormDraft, Tone};
use crate::shared::date_utils::{format_date, to_date_input};
use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata, FieldKind, FieldMetadata};
use crate::shared::number_format::format_currency;
use crate::shared::resolver::{ReferenceOption, RelatedCollections};
use crate::shared::wire::null_to_default;

// ============================================================================
// Campaign state
// ============================================================================

/// Lifecycle state of a campaign, lowercase with spaces on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CampaignState {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Cancelled,
}

impl CampaignState {
    pub const ALL: [CampaignState; 4] = [
        CampaignState::NotStarted,
        CampaignState::InProgress,
        CampaignState::Completed,
        CampaignState::Cancelled,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Unknown codes read as `NotStarted`
    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.code().eq_ignore_ascii_case(code.trim()))
            .unwrap_or_default()
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::NotStarted => Tone::Neutral,
            Self::InProgress => Tone::Info,
            Self::Completed => Tone::Success,
            Self::Cancelled => Tone::Danger,
        }
    }
}

impl From<String> for CampaignState {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<CampaignState> for String {
    fn from(state: CampaignState) -> Self {
        state.code().to_string()
    }
}

const STATE_CHOICES: [(&str, &str); 4] = [
    ("not started", "Not Started"),
    ("in progress", "In Progress"),
    ("completed", "Completed"),
    ("cancelled", "Cancelled"),
];

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub campaign_id: EntityId,
    #[serde(default)]
    pub client_id: Option<EntityId>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub start_date: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub end_date: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub estimated_cost: f64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub actual_cost: f64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub budget: f64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub completion_status: bool,
    #[serde(default, deserialize_with = "null_to_default")]
    pub current_state: CampaignState,
    #[serde(default)]
    pub manager_id: Option<EntityId>,
}

impl Campaign {
    /// Manager label, `Manager #<id>` when the manager is not in `related`
    pub fn manager_label(&self, related: &RelatedCollections) -> Option<String> {
        let manager_id = self.manager_id?;
        Some(
            related
                .lookup(EntityKind::CampaignManager, manager_id)
                .map(|m| m.label.clone())
                .unwrap_or_else(|| format!("Manager #{}", manager_id)),
        )
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignDto {
    pub client_id: EntityId,
    pub title: String,
    /// `YYYY-MM-DD`
    pub start_date: String,
    /// `YYYY-MM-DD`
    pub end_date: String,
    pub estimated_cost: f64,
    pub actual_cost: f64,
    pub completion_status: bool,
    pub current_state: CampaignState,
    pub manager_id: Option<EntityId>,
    pub budget: i64,
}

pub const FIELDS: [FieldMetadata; 10] = [
    FieldMetadata::new("client_id", "Client", FieldKind::Reference(EntityKind::Client))
        .required()
        .placeholder("Select a client"),
    FieldMetadata::new("title", "Title", FieldKind::Text)
        .required()
        .placeholder("Enter campaign title"),
    FieldMetadata::new("start_date", "Start Date", FieldKind::Date).required(),
    FieldMetadata::new("end_date", "End Date", FieldKind::Date).required(),
    FieldMetadata::new("estimated_cost", "Estimated Cost", FieldKind::Decimal)
        .placeholder("Enter estimated cost"),
    FieldMetadata::new("actual_cost", "Actual Cost", FieldKind::Decimal)
        .placeholder("Enter actual cost"),
    FieldMetadata::new("budget", "Budget", FieldKind::Integer).placeholder("Enter budget"),
    FieldMetadata::new(
        "current_state",
        "Current State",
        FieldKind::Choice(&STATE_CHOICES),
    ),
    FieldMetadata::new(
        "manager_id",
        "Manager",
        FieldKind::Reference(EntityKind::CampaignManager),
    )
    .placeholder("Select a manager"),
    FieldMetadata::new("completion_status", "Completion Status", FieldKind::Boolean),
];

pub const COLUMNS: [&str; 5] = ["Campaign", "State", "Manager", "Timeline", "Budget"];

const RELATED: [EntityKind; 2] = [EntityKind::Client, EntityKind::CampaignManager];

pub const METADATA: EntityMetadataInfo = EntityMetadataInfo {
    kind: EntityKind::Campaign,
    entity_index: "a005",
    collection_path: "campaigns",
    ui: EntityUiMetadata {
        element_name: "Campaign",
        title: "Campaign Management",
        subtitle: "Manage your marketing campaigns and track budgets",
        icon: "megaphone",
    },
};

pub const MESSAGES: EntityMessages = EntityMessages {
    fetch_failed: "Failed to fetch campaigns",
    created: "Campaign added successfully",
    create_failed: "Failed to add campaign",
    updated: "Campaign updated successfully",
    update_failed: "Failed to update campaign",
    deleted: "Campaign deleted successfully",
    delete_failed: "Failed to delete campaign",
    confirm_delete: "Are you sure you want to delete this campaign?",
    empty_list: "No campaigns found",
    search_placeholder: "Search campaigns...",
    add_button: "Add New Campaign",
    add_title: "Add New Campaign",
    edit_title: "Edit Campaign",
    create_submit: "Add Campaign",
    update_submit: "Update Campaign",
};

impl Entity for Campaign {
    type Payload = CampaignDto;

    const KIND: EntityKind = EntityKind::Campaign;

    fn id(&self) -> EntityId {
        self.campaign_id
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
            .with("client_id", FieldValue::Integer(self.client_id))
            .with("title", FieldValue::Text(self.title.clone()))
            .with("start_date", FieldValue::Text(to_date_input(&self.start_date)))
            .with("end_date", FieldValue::Text(to_date_input(&self.end_date)))
            .with("estimated_cost", FieldValue::Decimal(Some(self.estimated_cost)))
            .with("actual_cost", FieldValue::Decimal(Some(self.actual_cost)))
            .with("budget", FieldValue::Integer(Some(self.budget.trunc() as i64)))
            .with(
                "current_state",
                FieldValue::Text(self.current_state.code().to_string()),
            )
            .with("manager_id", FieldValue::Integer(self.manager_id))
            .with("completion_status", FieldValue::Flag(self.completion_status))
    }

    fn payload_from_draft(draft: &FormDraft) -> Result<CampaignDto, DraftError> {
        Ok(CampaignDto {
            client_id: draft.require_integer("client_id")?,
            title: draft.text("title"),
            start_date: draft.require_date("start_date")?,
            end_date: draft.require_date("end_date")?,
            estimated_cost: draft.decimal("estimated_cost").unwrap_or(0.0),
            actual_cost: draft.decimal("actual_cost").unwrap_or(0.0),
            completion_status: draft.flag("completion_status"),
            current_state: CampaignState::from_code(&draft.text("current_state")),
            // 0 is not a manager id
            manager_id: draft.integer("manager_id").filter(|id| *id != 0),
            budget: draft.integer("budget").unwrap_or(0),
        })
    }

    fn cells(&self, related: &RelatedCollections) -> Vec<Cell> {
        let client = related.resolve_opt(EntityKind::Client, self.client_id, "");
        let mut state = vec![(
            self.current_state.display_name().to_string(),
            self.current_state.tone(),
        )];
        if self.completion_status {
            state.push(("Completed".to_string(), Tone::Success));
        }
        vec![
            Cell::Titled {
                title: self.title.clone(),
                subtitle: format!("Client: {}", client),
            },
            Cell::Badges(state),
            Cell::text(
                self.manager_label(related)
                    .unwrap_or_else(|| "No Manager Assigned".to_string()),
            ),
            Cell::Date(format!(
                "{} - {}",
                format_date(&self.start_date),
                format_date(&self.end_date)
            )),
            Cell::Lines(vec![
                format!("Budget: {}", format_currency(self.budget)),
                format!("Est: {}", format_currency(self.estimated_cost)),
                format!("Act: {}", format_currency(self.actual_cost)),
            ]),
        ]
    }

    fn search_texts(&self, _related: &RelatedCollections) -> Vec<String> {
        vec![self.title.clone()]
    }

    fn reference_option(&self) -> ReferenceOption {
        ReferenceOption::new(self.campaign_id, &self.title)
    }
}
