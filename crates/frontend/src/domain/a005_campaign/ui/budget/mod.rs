//! Budget check of a single campaign

use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a005_campaign::aggregate::Campaign;
use contracts::domain::a005_campaign::budget::BudgetReport;
use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

#[component]
fn Amount(label: &'static str, icon_name: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="budget-amount">
            <span class="budget-amount__icon">{icon(icon_name)}</span>
            <span class="budget-amount__label">{label}</span>
            <span class="budget-amount__value">{value}</span>
        </div>
    }
}

/// Compares budget with estimated and actual cost
#[component]
pub fn BudgetModal(campaign: Campaign, on_close: Callback<()>) -> impl IntoView {
    let report = BudgetReport::evaluate(&campaign);
    let over = report.is_over_budget();
    let headline_class = if over {
        "budget-headline budget-headline--over"
    } else {
        "budget-headline budget-headline--under"
    };
    let intent = if over {
        MessageBarIntent::Warning
    } else {
        MessageBarIntent::Success
    };

    view! {
        <Modal title="Budget Status".to_string() on_close=on_close>
            <div class="budget-status">
                <h3 class="budget-status__title">{report.title.clone()}</h3>
                <div class="budget-status__amounts">
                    <Amount label="Budget" icon_name="dollar" value=report.budget.clone() />
                    <Amount label="Estimated Cost" icon_name="calculator" value=report.estimated_cost.clone() />
                    <Amount label="Actual Cost" icon_name="dollar" value=report.actual_cost.clone() />
                </div>
                {report.headline().map(|text| view! {
                    <p class=headline_class>{text}</p>
                })}
                {report.banner().map(|text| view! {
                    <MessageBar intent=intent>
                        {icon("alert")}
                        <span>{text}</span>
                    </MessageBar>
                })}
            </div>
        </Modal>
    }
}
