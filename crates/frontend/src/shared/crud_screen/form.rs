use contracts::domain::common::Entity;
use contracts::shared::crud::RawInput;
use contracts::shared::metadata::{FieldKind, FieldMetadata};
use leptos::prelude::*;

use super::view_model::CrudViewModel;
use crate::shared::components::ui::{Button, Checkbox, Input, Select};

/// Widget for one field, chosen by its kind
fn field_widget<E: Entity>(vm: CrudViewModel<E>, field: &'static FieldMetadata) -> AnyView {
    let name = field.name;
    let label = field.ui.label.to_string();
    let placeholder = field.ui.placeholder.map(str::to_string);
    let required = field.validation.is_required();
    let id = format!("{}-{}", E::metadata().entity_index, name);
    let disabled = Signal::derive(move || vm.state.with(|s| s.is_submitting()));
    let value = Signal::derive(move || vm.field_text(name));
    let on_text = Callback::new(move |text: String| vm.update_field(name, RawInput::Text(text)));

    match field.kind {
        FieldKind::Reference(kind) => view! {
            <Select
                id=id
                label=label
                value=value
                options=Signal::derive(move || vm.options_of(kind))
                placeholder=placeholder.unwrap_or_default()
                required=required
                disabled=disabled
                on_change=on_text
            />
        }
        .into_any(),
        FieldKind::Choice(choices) => view! {
            <Select
                id=id
                label=label
                value=value
                options=Signal::derive(move || {
                    choices
                        .iter()
                        .map(|(value, label)| (value.to_string(), label.to_string()))
                        .collect::<Vec<_>>()
                })
                required=required
                disabled=disabled
                on_change=on_text
            />
        }
        .into_any(),
        FieldKind::Boolean => view! {
            <Checkbox
                id=id
                label=label
                checked=Signal::derive(move || vm.field_flag(name))
                disabled=disabled
                on_change=Callback::new(move |checked| vm.update_field(name, RawInput::Checked(checked)))
            />
        }
        .into_any(),
        FieldKind::Text | FieldKind::Integer | FieldKind::Decimal | FieldKind::Date => {
            let step = match field.kind {
                FieldKind::Decimal => Some("0.01".to_string()),
                FieldKind::Integer => Some("1".to_string()),
                _ => None,
            };
            view! {
                <Input
                    id=id
                    label=label
                    value=value
                    input_type=field.kind.input_type()
                    step=step
                    placeholder=placeholder
                    required=required
                    disabled=disabled
                    on_input=on_text
                />
            }
            .into_any()
        }
    }
}

/// Add/edit form rendered from the entity's field schema
#[component]
pub fn CrudForm<E: Entity>(vm: CrudViewModel<E>) -> impl IntoView {
    let messages = E::messages();
    let is_submitting = Signal::derive(move || vm.state.with(|s| s.is_submitting()));
    let submit_label = move || {
        if vm.state.with(|s| s.show_edit) {
            messages.update_submit
        } else {
            messages.create_submit
        }
    };

    view! {
        <form
            class="crud-form"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit();
            }
        >
            {E::fields().iter().map(|field| field_widget(vm, field)).collect_view()}
            <div class="crud-form__actions">
                <Button variant="secondary" on_click=Callback::new(move |_| vm.close_modal())>
                    "Cancel"
                </Button>
                <Button disabled=is_submitting on_click=Callback::new(move |_| vm.submit())>
                    {submit_label}
                </Button>
            </div>
        </form>
    }
}
