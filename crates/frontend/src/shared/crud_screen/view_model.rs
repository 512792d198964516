use chrono::NaiveDate;
use contracts::domain::common::{Entity, EntityKind};
use contracts::shared::crud::{reduce, CrudAction, CrudCommand, CrudState, RawInput};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::crud_api;
use crate::shared::lifetime::{use_screen_lifetime, ScreenLifetime};

/// Calendar date of "now" in UTC, as the browser sees it
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_utc_full_year() as i32,
        now.get_utc_month() + 1,
        now.get_utc_date(),
    )
    .unwrap_or_default()
}

/// ViewModel of a CRUD screen: reactive state plus the effect runner.
///
/// All transitions go through the pure reducer; this type only turns the
/// commands it emits into requests and feeds the results back.
pub struct CrudViewModel<E: Entity> {
    pub state: RwSignal<CrudState<E>>,
    lifetime: StoredValue<ScreenLifetime, LocalStorage>,
}

impl<E: Entity> Clone for CrudViewModel<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Entity> Copy for CrudViewModel<E> {}

impl<E: Entity> CrudViewModel<E> {
    /// Must be called inside the screen component, so the lifetime is tied to it
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(CrudState::new()),
            lifetime: use_screen_lifetime(),
        }
    }

    fn is_alive(&self) -> bool {
        self.lifetime
            .try_with_value(|l| !l.is_aborted())
            .unwrap_or(false)
    }

    pub fn dispatch(&self, action: CrudAction<E>) {
        if !self.is_alive() {
            return;
        }
        let command = self
            .state
            .try_update(|state| {
                let transition = reduce(std::mem::take(state), action);
                *state = transition.state;
                transition.command
            })
            .flatten();
        if let Some(command) = command {
            self.execute(command);
        }
    }

    fn execute(&self, command: CrudCommand<E>) {
        let vm = *self;
        let signal = self.lifetime.try_with_value(ScreenLifetime::signal).flatten();

        match command {
            CrudCommand::Fetch { seq, related } => {
                for &kind in related {
                    let signal = signal.clone();
                    spawn_local(async move {
                        let result = crud_api::fetch_reference_options(kind, signal).await;
                        vm.dispatch(CrudAction::RelatedLoaded { kind, result });
                    });
                }
                spawn_local(async move {
                    let result = crud_api::fetch_all::<E>(signal).await;
                    vm.dispatch(CrudAction::ItemsLoaded { seq, result });
                });
            }
            CrudCommand::Create(payload) => spawn_local(async move {
                match crud_api::create::<E>(&payload, signal).await {
                    Ok(()) => vm.dispatch(CrudAction::SubmitSucceeded),
                    Err(e) => vm.dispatch(CrudAction::SubmitFailed(e)),
                }
            }),
            CrudCommand::Update { id, payload } => spawn_local(async move {
                match crud_api::update::<E>(id, &payload, signal).await {
                    Ok(()) => vm.dispatch(CrudAction::SubmitSucceeded),
                    Err(e) => vm.dispatch(CrudAction::SubmitFailed(e)),
                }
            }),
            CrudCommand::Delete { id } => spawn_local(async move {
                match crud_api::delete::<E>(id, signal).await {
                    Ok(()) => vm.dispatch(CrudAction::RemoveSucceeded),
                    Err(e) => vm.dispatch(CrudAction::RemoveFailed(e)),
                }
            }),
        }
    }

    // ------------------------------------------------------------------
    // Commands used by the view
    // ------------------------------------------------------------------

    pub fn load(&self) {
        self.dispatch(CrudAction::Load);
    }

    pub fn open_create(&self) {
        self.dispatch(CrudAction::OpenCreate { today: today() });
    }

    pub fn open_edit(&self, item: E) {
        self.dispatch(CrudAction::OpenEdit(item));
    }

    pub fn close_modal(&self) {
        self.dispatch(CrudAction::CloseModal);
    }

    pub fn update_field(&self, name: &'static str, input: RawInput) {
        self.dispatch(CrudAction::UpdateField {
            name: name.to_string(),
            input,
        });
    }

    pub fn set_search(&self, term: String) {
        self.dispatch(CrudAction::SetSearch(term));
    }

    pub fn submit(&self) {
        self.dispatch(CrudAction::Submit);
    }

    /// Asks for confirmation in the browser, then deletes
    pub fn remove(&self, item: &E) {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(E::messages().confirm_delete).ok())
            .unwrap_or(false);
        self.dispatch(CrudAction::Remove {
            id: item.id(),
            confirmed,
        });
    }

    pub fn dismiss_error(&self) {
        self.dispatch(CrudAction::DismissError);
    }

    pub fn dismiss_success(&self) {
        self.dispatch(CrudAction::DismissSuccess);
    }

    // ------------------------------------------------------------------
    // Derived state
    // ------------------------------------------------------------------

    pub fn options_of(&self, kind: EntityKind) -> Vec<(String, String)> {
        self.state.with(|s| {
            s.related
                .options(kind)
                .iter()
                .map(|o| (o.id.to_string(), o.option_text()))
                .collect()
        })
    }

    pub fn field_text(&self, name: &str) -> String {
        self.state.with(|s| s.draft.display_value(name))
    }

    pub fn field_flag(&self, name: &str) -> bool {
        self.state.with(|s| s.draft.flag(name))
    }
}
