//! Route catalogue, landing page modules and role shortcuts

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    RoleSelection,
    Clients,
    StaffGrades,
    Staff,
    CampaignManagers,
    Campaigns,
    Adverts,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::RoleSelection,
        Route::Clients,
        Route::StaffGrades,
        Route::Staff,
        Route::CampaignManagers,
        Route::Campaigns,
        Route::Adverts,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/home",
            Self::RoleSelection => "/role",
            Self::Clients => "/clients",
            Self::StaffGrades => "/staff-grades",
            Self::Staff => "/staff",
            Self::CampaignManagers => "/campaign-managers",
            Self::Campaigns => "/campaigns",
            Self::Adverts => "/adverts",
        }
    }

    /// Short label for the header navigation
    pub fn nav_label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::RoleSelection => "Roles",
            Self::Clients => "Clients",
            Self::StaffGrades => "Staff Grades",
            Self::Staff => "Staff",
            Self::CampaignManagers => "Managers",
            Self::Campaigns => "Campaigns",
            Self::Adverts => "Adverts",
        }
    }
}

/// A card on the landing or role page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleLink {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub route: Route,
}

/// Modules in the order the business sets them up
pub static HOME_MODULES: [ModuleLink; 6] = [
    ModuleLink {
        title: "Client Management",
        description: "Start by managing your client portfolio",
        icon: "building",
        route: Route::Clients,
    },
    ModuleLink {
        title: "Staff Grades",
        description: "Define staff grades and hierarchies",
        icon: "medal",
        route: Route::StaffGrades,
    },
    ModuleLink {
        title: "Staff Management",
        description: "Manage your team members",
        icon: "users",
        route: Route::Staff,
    },
    ModuleLink {
        title: "Campaign Managers",
        description: "Assign campaign leadership",
        icon: "user-cog",
        route: Route::CampaignManagers,
    },
    ModuleLink {
        title: "Campaigns",
        description: "Create and track marketing campaigns",
        icon: "megaphone",
        route: Route::Campaigns,
    },
    ModuleLink {
        title: "Adverts",
        description: "Manage campaign advertisements",
        icon: "radio",
        route: Route::Adverts,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub modules: &'static [ModuleLink],
}

pub static ROLES: [Role; 2] = [
    Role {
        title: "Campaign Manager",
        description: "Manage campaigns, clients, staff, and advertisements",
        icon: "megaphone",
        modules: &[
            ModuleLink {
                title: "Client Management",
                description: "Manage client information and relationships",
                icon: "building",
                route: Route::Clients,
            },
            ModuleLink {
                title: "Staff",
                description: "Oversee staff assignments and management",
                icon: "users",
                route: Route::Staff,
            },
            ModuleLink {
                title: "Campaigns",
                description: "Create and manage marketing campaigns",
                icon: "megaphone",
                route: Route::Campaigns,
            },
            ModuleLink {
                title: "Advertisements",
                description: "Handle campaign advertisements",
                icon: "radio",
                route: Route::Adverts,
            },
        ],
    },
    Role {
        title: "Accountant",
        description: "Manage staff grades and personnel information",
        icon: "calculator",
        modules: &[
            ModuleLink {
                title: "Staff Management",
                description: "Manage employee information",
                icon: "users",
                route: Route::Staff,
            },
            ModuleLink {
                title: "Staff Grades",
                description: "Handle staff grades and pay rates",
                icon: "medal",
                route: Route::StaffGrades,
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<&str> = Route::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), Route::ALL.len());
        assert!(Route::ALL.iter().all(|r| r.path().starts_with('/')));
    }

    #[test]
    fn test_home_lists_entity_screens_in_setup_order() {
        let routes: Vec<Route> = HOME_MODULES.iter().map(|m| m.route).collect();
        assert_eq!(
            routes,
            vec![
                Route::Clients,
                Route::StaffGrades,
                Route::Staff,
                Route::CampaignManagers,
                Route::Campaigns,
                Route::Adverts,
            ]
        );
    }

    #[test]
    fn test_roles() {
        let titles: Vec<&str> = ROLES.iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Campaign Manager", "Accountant"]);

        let accountant: Vec<Route> = ROLES[1].modules.iter().map(|m| m.route).collect();
        assert_eq!(accountant, vec![Route::Staff, Route::StaffGrades]);

        let manager: Vec<Route> = ROLES[0].modules.iter().map(|m| m.route).collect();
        assert_eq!(
            manager,
            vec![Route::Clients, Route::Staff, Route::Campaigns, Route::Adverts]
        );
    }
}
