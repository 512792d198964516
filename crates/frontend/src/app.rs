use crate::domain::a001_client::ui::list::ClientList;
use crate::domain::a002_staff_grade::ui::list::StaffGradeList;
use crate::domain::a003_staff::ui::list::StaffList;
use crate::domain::a004_campaign_manager::ui::list::CampaignManagerList;
use crate::domain::a005_campaign::ui::list::CampaignList;
use crate::domain::a006_advert::ui::list::AdvertList;
use crate::layout::Shell;
use crate::system::pages::home::HomePage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::role_selection::RoleSelectionPage;
use contracts::shared::navigation::Route as AppRoute;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

// Paths mirror `contracts::shared::navigation::Route`
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=AppRoute::Home.path() /> } />
                    <Route path=path!("/home") view=HomePage />
                    <Route path=path!("/role") view=RoleSelectionPage />
                    <Route path=path!("/clients") view=ClientList />
                    <Route path=path!("/staff-grades") view=StaffGradeList />
                    <Route path=path!("/staff") view=StaffList />
                    <Route path=path!("/campaign-managers") view=CampaignManagerList />
                    <Route path=path!("/campaigns") view=CampaignList />
                    <Route path=path!("/adverts") view=AdvertList />
                </Routes>
            </Shell>
        </Router>
    }
}
