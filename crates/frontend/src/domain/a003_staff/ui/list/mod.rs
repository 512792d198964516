use crate::shared::crud_screen::CrudScreen;
use contracts::domain::a003_staff::aggregate::Staff;
use leptos::prelude::*;

/// Staff screen; the grade select is filled from the grades collection
#[component]
pub fn StaffList() -> impl IntoView {
    view! { <CrudScreen<Staff> /> }
}
