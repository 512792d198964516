use contracts::shared::navigation::{Role, ROLES};
use leptos::prelude::*;

use super::home::ModuleCard;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;

/// Role picker; a chosen role lists the screens it works with
#[component]
pub fn RoleSelectionPage() -> impl IntoView {
    let selected = RwSignal::new(None::<&'static Role>);

    let role_cards = move || {
        ROLES
            .iter()
            .map(|role| view! {
                <button class="role-card" on:click=move |_| selected.set(Some(role))>
                    <div class="role-card__icon">{icon(role.icon)}</div>
                    <h3 class="role-card__title">{role.title}</h3>
                    <p class="role-card__description">{role.description}</p>
                </button>
            })
            .collect_view()
    };

    view! {
        <div class="role-selection">
            {move || match selected.get() {
                None => view! {
                    <h1>"Select Your Role"</h1>
                    <div class="role-grid">{role_cards()}</div>
                }
                .into_any(),
                Some(role) => view! {
                    <div class="role-selection__header">
                        <Button variant="ghost" on_click=Callback::new(move |_| selected.set(None))>
                            {icon("arrow-left")}
                            "Back to Role Selection"
                        </Button>
                        <h1>{role.title}</h1>
                    </div>
                    <div class="module-grid">
                        {role
                            .modules
                            .iter()
                            .map(|module| view! { <ModuleCard module=module /> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
