/// Shown when submit finds an empty required field
pub const REQUIRED_FIELDS_MISSING: &str = "Please fill in all required fields";

/// User-facing texts of one entity screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMessages {
    pub fetch_failed: &'static str,
    pub created: &'static str,
    pub create_failed: &'static str,
    pub updated: &'static str,
    pub update_failed: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
    pub confirm_delete: &'static str,
    /// Zero-state text of the table
    pub empty_list: &'static str,
    pub search_placeholder: &'static str,
    pub add_button: &'static str,
    pub add_title: &'static str,
    pub edit_title: &'static str,
    pub create_submit: &'static str,
    pub update_submit: &'static str,
}
