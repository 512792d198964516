//! Generic CRUD screen
//!
//! - view_model.rs: reactive state, dispatch and request execution
//! - form.rs: add/edit form built from the field schema
//! - table.rs: table with search highlighting and row actions

pub mod form;
pub mod table;
pub mod view_model;

use contracts::domain::common::Entity;
use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent, Spinner};

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal::Modal;
use form::CrudForm;
use table::CrudTable;
use view_model::CrudViewModel;

/// Full management screen for one entity: header, messages, search, table
/// and the add/edit modal.
#[component]
pub fn CrudScreen<E: Entity>(
    /// Extra per-row buttons
    #[prop(optional)]
    row_actions: Option<Callback<E, AnyView>>,
) -> impl IntoView {
    let vm = CrudViewModel::<E>::new();
    let meta = E::metadata();
    let messages = E::messages();

    vm.load();

    let error = move || vm.state.with(|s| s.error_message.clone());
    let success = move || vm.state.with(|s| s.success_message.clone());
    let is_loading = move || vm.state.with(|s| s.is_loading);
    let is_modal_open = move || vm.state.with(|s| s.is_modal_open());
    let modal_title = Signal::derive(move || {
        if vm.state.with(|s| s.show_edit) {
            messages.edit_title.to_string()
        } else {
            messages.add_title.to_string()
        }
    });

    view! {
        <div class="page">
            <PageHeader
                title=meta.ui.title
                subtitle=meta.ui.subtitle.to_string()
                icon_name=meta.ui.icon.to_string()
            >
                <Button on_click=Callback::new(move |_| vm.open_create())>
                    {icon("plus")}
                    {messages.add_button}
                </Button>
            </PageHeader>

            {move || error().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <div class="message-bar__content">
                        <span>{e}</span>
                        <Button variant="ghost" size="sm" title="Dismiss" on_click=Callback::new(move |_| vm.dismiss_error())>
                            {icon("x")}
                        </Button>
                    </div>
                </MessageBar>
            })}
            {move || success().map(|s| view! {
                <MessageBar intent=MessageBarIntent::Success>
                    <div class="message-bar__content">
                        <span>{s}</span>
                        <Button variant="ghost" size="sm" title="Dismiss" on_click=Callback::new(move |_| vm.dismiss_success())>
                            {icon("x")}
                        </Button>
                    </div>
                </MessageBar>
            })}

            <div class="page__toolbar">
                <SearchInput
                    value=Signal::derive(move || vm.state.with(|s| s.search_term.clone()))
                    on_change=Callback::new(move |term: String| vm.set_search(term))
                    placeholder=messages.search_placeholder
                />
            </div>

            <div class="page__content">
                <Show
                    when=move || !is_loading()
                    fallback=|| view! {
                        <div class="loading">
                            <Spinner />
                        </div>
                    }
                >
                    <CrudTable<E> vm=vm row_actions=row_actions />
                </Show>
            </div>

            <Show when=is_modal_open>
                <Modal title=modal_title on_close=Callback::new(move |_| vm.close_modal())>
                    <CrudForm<E> vm=vm />
                </Modal>
            </Show>
        </div>
    }
}
