use crate::domain::a005_campaign::ui::budget::BudgetModal;
use crate::shared::components::ui::Button;
use crate::shared::crud_screen::CrudScreen;
use crate::shared::icons::icon;
use contracts::domain::a005_campaign::aggregate::Campaign;
use leptos::prelude::*;

/// Campaigns with an extra "Check Budget" action per row
#[component]
pub fn CampaignList() -> impl IntoView {
    let budget_of = RwSignal::new(None::<Campaign>);

    let check_budget = Callback::new(move |campaign: Campaign| {
        view! {
            <Button
                variant="ghost"
                size="sm"
                title="Check Budget"
                on_click=Callback::new(move |_| budget_of.set(Some(campaign.clone())))
            >
                {icon("calculator")}
            </Button>
        }
        .into_any()
    });

    view! {
        <CrudScreen<Campaign> row_actions=check_budget />
        {move || budget_of.get().map(|campaign| view! {
            <BudgetModal
                campaign=campaign
                on_close=Callback::new(move |_| budget_of.set(None))
            />
        })}
    }
}
