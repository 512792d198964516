use contracts::shared::navigation::{ModuleLink, Route};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

/// Card linking to one screen
#[component]
pub fn ModuleCard(module: &'static ModuleLink) -> impl IntoView {
    view! {
        <A href=module.route.path() attr:class="module-card">
            <div class="module-card__icon">{icon(module.icon)}</div>
            <div class="module-card__text">
                <h3 class="module-card__title">{module.title}</h3>
                <p class="module-card__description">{module.description}</p>
            </div>
            <span class="module-card__arrow">{icon("chevron-right")}</span>
        </A>
    }
}

/// Стартовая страница: модули в порядке первичной настройки
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <div class="home__hero">
                <h1>"Campaign Management"</h1>
                <p>"Set up clients, staff and campaigns in the order the business needs them."</p>
                <A href=Route::RoleSelection.path() attr:class="button button--secondary">
                    {icon("user-circle")}
                    "Select a Role"
                </A>
            </div>
            <div class="module-grid">
                {contracts::shared::navigation::HOME_MODULES
                    .iter()
                    .enumerate()
                    .map(|(i, module)| view! {
                        <div class="module-grid__item">
                            <span class="module-grid__step">{i + 1}</span>
                            <ModuleCard module=module />
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
