use crate::shared::crud_screen::CrudScreen;
use contracts::domain::a006_advert::aggregate::Advert;
use leptos::prelude::*;

#[component]
pub fn AdvertList() -> impl IntoView {
    view! { <CrudScreen<Advert> /> }
}
