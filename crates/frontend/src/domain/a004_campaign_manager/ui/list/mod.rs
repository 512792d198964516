use crate::shared::crud_screen::CrudScreen;
use contracts::domain::a004_campaign_manager::aggregate::CampaignManager;
use leptos::prelude::*;

/// Campaign managers can only be assigned and removed, there is no edit
#[component]
pub fn CampaignManagerList() -> impl IntoView {
    view! { <CrudScreen<CampaignManager> /> }
}
