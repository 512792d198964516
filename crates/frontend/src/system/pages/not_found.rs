use contracts::shared::navigation::Route;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <span class="not-found__icon">{icon("alert")}</span>
            <h1>"Page not found"</h1>
            <A href=Route::Home.path()>"Back to Home"</A>
        </div>
    }
}
