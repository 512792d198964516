use super::messages::EntityMessages;
use crate::domain::{
    a001_client, a002_staff_grade, a003_staff, a004_campaign_manager, a005_campaign, a006_advert,
};
use crate::shared::metadata::EntityMetadataInfo;

/// The six record types of the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Client,
    StaffGrade,
    Staff,
    CampaignManager,
    Campaign,
    Advert,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Client,
        EntityKind::StaffGrade,
        EntityKind::Staff,
        EntityKind::CampaignManager,
        EntityKind::Campaign,
        EntityKind::Advert,
    ];

    /// Registry entry of this kind
    pub fn metadata(self) -> &'static EntityMetadataInfo {
        match self {
            Self::Client => &a001_client::aggregate::METADATA,
            Self::StaffGrade => &a002_staff_grade::aggregate::METADATA,
            Self::Staff => &a003_staff::aggregate::METADATA,
            Self::CampaignManager => &a004_campaign_manager::aggregate::METADATA,
            Self::Campaign => &a005_campaign::aggregate::METADATA,
            Self::Advert => &a006_advert::aggregate::METADATA,
        }
    }

    pub fn messages(self) -> &'static EntityMessages {
        match self {
            Self::Client => &a001_client::aggregate::MESSAGES,
            Self::StaffGrade => &a002_staff_grade::aggregate::MESSAGES,
            Self::Staff => &a003_staff::aggregate::MESSAGES,
            Self::CampaignManager => &a004_campaign_manager::aggregate::MESSAGES,
            Self::Campaign => &a005_campaign::aggregate::MESSAGES,
            Self::Advert => &a006_advert::aggregate::MESSAGES,
        }
    }

    /// REST path segment, e.g. "campaign-manager"
    pub fn collection_path(self) -> &'static str {
        self.metadata().collection_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_consistent() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.metadata().kind, kind);
        }
    }

    #[test]
    fn test_collection_paths() {
        let paths: Vec<&str> = EntityKind::ALL.iter().map(|k| k.collection_path()).collect();
        assert_eq!(
            paths,
            vec!["clients", "grades", "staff", "campaign-manager", "campaigns", "adverts"]
        );
    }
}
