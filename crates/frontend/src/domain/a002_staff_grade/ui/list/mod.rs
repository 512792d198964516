use crate::shared::crud_screen::CrudScreen;
use contracts::domain::a002_staff_grade::aggregate::StaffGrade;
use leptos::prelude::*;

#[component]
pub fn StaffGradeList() -> impl IntoView {
    view! { <CrudScreen<StaffGrade> /> }
}
