//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Application title, linking to the landing page
//! - One link per route of the catalogue

use contracts::shared::navigation::Route;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

/// TopHeader component - main application top bar.
#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            // Left section - brand
            <div class="top-header__brand">
                <A href=Route::Home.path() attr:class="top-header__title">
                    {icon("megaphone")}
                    <span>"Campaign Console"</span>
                </A>
            </div>

            // Right section - navigation
            <nav class="top-header__nav">
                {Route::ALL
                    .into_iter()
                    .map(|route| view! {
                        <A href=route.path() attr:class="top-header__link">
                            {route.nav_label()}
                        </A>
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
