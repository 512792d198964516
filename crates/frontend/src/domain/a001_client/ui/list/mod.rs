use crate::shared::crud_screen::CrudScreen;
use contracts::domain::a001_client::aggregate::Client;
use leptos::prelude::*;

/// Список клиентов
#[component]
pub fn ClientList() -> impl IntoView {
    view! { <CrudScreen<Client> /> }
}
