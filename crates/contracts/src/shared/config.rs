//! Backend address configuration

use crate::domain::common::{EntityId, EntityKind};

/// Origin used when no override is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ApiConfig {
    /// Use `value` when it is non-blank, the default origin otherwise
    pub fn from_override(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => Self {
                base_url: v.trim_end_matches('/').to_string(),
            },
            None => Self::default(),
        }
    }

    /// `{base}/{path}` for the list and create endpoints
    pub fn collection_url(&self, kind: EntityKind) -> String {
        format!("{}/{}", self.base_url, kind.collection_path())
    }

    /// `{base}/{path}/{id}` for the update and delete endpoints
    pub fn item_url(&self, kind: EntityKind, id: EntityId) -> String {
        format!("{}/{}/{}", self.base_url, kind.collection_path(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origin() {
        assert_eq!(ApiConfig::from_override(None).base_url, DEFAULT_API_BASE);
        assert_eq!(ApiConfig::from_override(Some("   ")).base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn test_override_strips_trailing_slash() {
        let config = ApiConfig::from_override(Some("https://api.example.com/"));
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_resource_urls() {
        let config = ApiConfig::default();
        assert_eq!(
            config.collection_url(EntityKind::CampaignManager),
            "http://localhost:8000/campaign-manager"
        );
        assert_eq!(
            config.item_url(EntityKind::StaffGrade, 7),
            "http://localhost:8000/grades/7"
        );
    }
}
