use chrono::NaiveDate;

use super::draft::RawInput;
use super::state::{CrudState, SubmitMode};
use crate::domain::common::{Entity, EntityId, EntityKind, REQUIRED_FIELDS_MISSING};
use crate::shared::api_error::ApiError;
use crate::shared::resolver::ReferenceOption;

/// Everything that can happen to a CRUD screen
#[derive(Debug, Clone, PartialEq)]
pub enum CrudAction<E: Entity> {
    /// Fetch the collection and every related collection
    Load,
    ItemsLoaded {
        seq: u64,
        result: Result<Vec<E>, ApiError>,
    },
    RelatedLoaded {
        kind: EntityKind,
        result: Result<Vec<ReferenceOption>, ApiError>,
    },
    OpenCreate {
        today: NaiveDate,
    },
    OpenEdit(E),
    CloseModal,
    UpdateField {
        name: String,
        input: RawInput,
    },
    SetSearch(String),
    Submit,
    SubmitSucceeded,
    SubmitFailed(ApiError),
    /// `confirmed` is the answer of the interactive confirmation
    Remove {
        id: EntityId,
        confirmed: bool,
    },
    RemoveSucceeded,
    RemoveFailed(ApiError),
    DismissError,
    DismissSuccess,
}

/// Side effect requested by a transition; executed by the screen
#[derive(Debug, Clone, PartialEq)]
pub enum CrudCommand<E: Entity> {
    /// GET the collection tagged `seq`, plus the `related` collections
    Fetch {
        seq: u64,
        related: &'static [EntityKind],
    },
    Create(E::Payload),
    Update {
        id: EntityId,
        payload: E::Payload,
    },
    Delete {
        id: EntityId,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition<E: Entity> {
    pub state: CrudState<E>,
    pub command: Option<CrudCommand<E>>,
}

fn begin_load<E: Entity>(
    state: &mut CrudState<E>,
    related: &'static [EntityKind],
) -> CrudCommand<E> {
    state.load_seq += 1;
    state.is_loading = true;
    CrudCommand::Fetch {
        seq: state.load_seq,
        related,
    }
}

fn submit<E: Entity>(state: &mut CrudState<E>) -> Option<CrudCommand<E>> {
    if state.is_submitting() || !state.is_modal_open() {
        return None;
    }
    let editing_id = if state.show_edit {
        Some(state.selected.as_ref()?.id())
    } else {
        None
    };

    if !state.draft.missing_required(E::fields()).is_empty() {
        state.error_message = Some(REQUIRED_FIELDS_MISSING.to_string());
        return None;
    }

    let messages = E::messages();
    let payload = match E::payload_from_draft(&state.draft) {
        Ok(payload) => payload,
        Err(_) => {
            let failed = match editing_id {
                Some(_) => messages.update_failed,
                None => messages.create_failed,
            };
            state.error_message = Some(failed.to_string());
            return None;
        }
    };

    Some(match editing_id {
        Some(id) => {
            state.pending_submit = Some(SubmitMode::Update);
            CrudCommand::Update { id, payload }
        }
        None => {
            state.pending_submit = Some(SubmitMode::Create);
            CrudCommand::Create(payload)
        }
    })
}

/// Pure transition function of every CRUD screen
pub fn reduce<E: Entity>(mut state: CrudState<E>, action: CrudAction<E>) -> Transition<E> {
    let messages = E::messages();

    let command = match action {
        CrudAction::Load => Some(begin_load(&mut state, E::related())),

        CrudAction::ItemsLoaded { seq, result } => {
            if seq == state.load_seq {
                state.is_loading = false;
                match result {
                    Ok(items) => state.items = items,
                    Err(ApiError::Aborted) => {}
                    Err(_) => {
                        state.items = Vec::new();
                        state.error_message = Some(messages.fetch_failed.to_string());
                    }
                }
            }
            None
        }

        CrudAction::RelatedLoaded { kind, result } => {
            match result {
                Ok(options) => state.related.set(kind, options),
                Err(ApiError::Aborted) => {}
                Err(_) => {
                    state.related.set(kind, Vec::new());
                    state.error_message = Some(kind.messages().fetch_failed.to_string());
                }
            }
            None
        }

        CrudAction::OpenCreate { today } => {
            state.draft = E::default_draft(today);
            state.selected = None;
            state.show_edit = false;
            state.show_add = true;
            None
        }

        CrudAction::OpenEdit(item) => {
            if E::supports_update() {
                state.draft = item.to_draft();
                state.selected = Some(item);
                state.show_add = false;
                state.show_edit = true;
            }
            None
        }

        CrudAction::CloseModal => {
            state.close_modals();
            None
        }

        CrudAction::UpdateField { name, input } => {
            // unknown names come only from a schema/view mismatch
            let _ = state.draft.apply_input(E::fields(), &name, input);
            None
        }

        CrudAction::SetSearch(term) => {
            state.search_term = term;
            None
        }

        CrudAction::Submit => submit(&mut state),

        CrudAction::SubmitSucceeded => {
            let done = match state.pending_submit.take() {
                Some(SubmitMode::Update) => messages.updated,
                _ => messages.created,
            };
            state.success_message = Some(done.to_string());
            state.error_message = None;
            state.close_modals();
            Some(begin_load(&mut state, &[]))
        }

        CrudAction::SubmitFailed(err) => {
            let mode = state.pending_submit.take();
            if !err.is_aborted() {
                let fallback = match mode {
                    Some(SubmitMode::Update) => messages.update_failed,
                    _ => messages.create_failed,
                };
                state.error_message = Some(err.server_message().unwrap_or(fallback).to_string());
            }
            None
        }

        CrudAction::Remove { id, confirmed } => confirmed.then_some(CrudCommand::Delete { id }),

        CrudAction::RemoveSucceeded => {
            state.success_message = Some(messages.deleted.to_string());
            state.error_message = None;
            Some(begin_load(&mut state, &[]))
        }

        CrudAction::RemoveFailed(err) => {
            if !err.is_aborted() {
                state.error_message = Some(messages.delete_failed.to_string());
            }
            None
        }

        CrudAction::DismissError => {
            state.error_message = None;
            None
        }

        CrudAction::DismissSuccess => {
            state.success_message = None;
            None
        }
    };

    Transition { state, command }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_client::aggregate::{Client, ClientDto};
    use crate::domain::a003_staff::aggregate::Staff;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn client(id: EntityId, name: &str) -> Client {
        Client {
            client_id: id,
            name: name.into(),
            address: "1 Main Street".into(),
            contact_details: "555-0100".into(),
        }
    }

    /// In-memory stand-in for the REST backend
    struct ScriptedBackend {
        rows: Vec<Client>,
        next_id: EntityId,
        fail_next: Option<ApiError>,
        requests: Vec<String>,
    }

    impl ScriptedBackend {
        fn new(rows: Vec<Client>) -> Self {
            let next_id = rows.iter().map(|c| c.client_id).max().unwrap_or(0) + 1;
            Self {
                rows,
                next_id,
                fail_next: None,
                requests: Vec::new(),
            }
        }

        fn execute(&mut self, command: CrudCommand<Client>) -> CrudAction<Client> {
            if let Some(err) = self.fail_next.take() {
                self.requests.push("failed".into());
                return match command {
                    CrudCommand::Fetch { seq, .. } => CrudAction::ItemsLoaded {
                        seq,
                        result: Err(err),
                    },
                    CrudCommand::Delete { .. } => CrudAction::RemoveFailed(err),
                    _ => CrudAction::SubmitFailed(err),
                };
            }
            match command {
                CrudCommand::Fetch { seq, .. } => {
                    self.requests.push("GET /clients".into());
                    CrudAction::ItemsLoaded {
                        seq,
                        result: Ok(self.rows.clone()),
                    }
                }
                CrudCommand::Create(dto) => {
                    self.requests.push("POST /clients".into());
                    self.rows.push(from_dto(self.next_id, dto));
                    self.next_id += 1;
                    CrudAction::SubmitSucceeded
                }
                CrudCommand::Update { id, payload } => {
                    self.requests.push(format!("PUT /clients/{}", id));
                    if let Some(row) = self.rows.iter_mut().find(|c| c.client_id == id) {
                        *row = from_dto(id, payload);
                    }
                    CrudAction::SubmitSucceeded
                }
                CrudCommand::Delete { id } => {
                    self.requests.push(format!("DELETE /clients/{}", id));
                    self.rows.retain(|c| c.client_id != id);
                    CrudAction::RemoveSucceeded
                }
            }
        }
    }

    fn from_dto(id: EntityId, dto: ClientDto) -> Client {
        Client {
            client_id: id,
            name: dto.name,
            address: dto.address,
            contact_details: dto.contact_details,
        }
    }

    /// Dispatch `action` and run every resulting command to completion
    fn run(
        backend: &mut ScriptedBackend,
        state: CrudState<Client>,
        action: CrudAction<Client>,
    ) -> CrudState<Client> {
        let mut transition = reduce(state, action);
        while let Some(command) = transition.command.take() {
            let follow_up = backend.execute(command);
            transition = reduce(transition.state, follow_up);
        }
        transition.state
    }

    fn type_into(state: CrudState<Client>, name: &str, value: &str) -> CrudState<Client> {
        reduce(
            state,
            CrudAction::UpdateField {
                name: name.into(),
                input: RawInput::Text(value.into()),
            },
        )
        .state
    }

    #[test]
    fn test_load_populates_items_and_clears_loading() {
        let mut backend = ScriptedBackend::new(vec![client(1, "Acme"), client(2, "Globex")]);
        let state = run(&mut backend, CrudState::new(), CrudAction::Load);
        assert!(!state.is_loading);
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.error_message, None);
    }

    #[test]
    fn test_load_failure_empties_items_and_sets_error() {
        let mut backend = ScriptedBackend::new(vec![client(1, "Acme")]);
        let state = run(&mut backend, CrudState::new(), CrudAction::Load);
        assert_eq!(state.items.len(), 1);

        backend.fail_next = Some(ApiError::Transport("offline".into()));
        let state = run(&mut backend, state, CrudAction::Load);
        assert!(!state.is_loading);
        assert!(state.items.is_empty());
        assert_eq!(state.error_message.as_deref(), Some("Failed to fetch clients"));
    }

    #[test]
    fn test_empty_collection_is_not_an_error() {
        let mut backend = ScriptedBackend::new(Vec::new());
        let state = run(&mut backend, CrudState::new(), CrudAction::Load);
        assert!(state.items.is_empty());
        assert!(state.visible_items().is_empty());
        assert_eq!(state.error_message, None);
    }

    #[test]
    fn test_stale_load_response_is_ignored() {
        let first = reduce(CrudState::<Client>::new(), CrudAction::Load);
        let second = reduce(first.state, CrudAction::Load);
        assert_eq!(second.state.load_seq, 2);

        let state = reduce(
            second.state,
            CrudAction::ItemsLoaded {
                seq: 1,
                result: Ok(vec![client(9, "Old")]),
            },
        )
        .state;
        assert!(state.is_loading);
        assert!(state.items.is_empty());

        let state = reduce(
            state,
            CrudAction::ItemsLoaded {
                seq: 2,
                result: Ok(vec![client(1, "Fresh")]),
            },
        )
        .state;
        assert!(!state.is_loading);
        assert_eq!(state.items, vec![client(1, "Fresh")]);
    }

    #[test]
    fn test_submit_with_missing_required_field_sends_nothing() {
        let state = reduce(CrudState::<Client>::new(), CrudAction::OpenCreate { today: today() }).state;
        let state = type_into(state, "address", "Somewhere");
        let transition = reduce(state, CrudAction::Submit);
        assert_eq!(transition.command, None);
        assert_eq!(
            transition.state.error_message.as_deref(),
            Some(REQUIRED_FIELDS_MISSING)
        );
        assert!(transition.state.show_add);
    }

    #[test]
    fn test_create_reloads_fresh_collection() {
        let mut backend = ScriptedBackend::new(vec![client(1, "Acme")]);
        let state = run(&mut backend, CrudState::new(), CrudAction::Load);

        let state = reduce(state, CrudAction::OpenCreate { today: today() }).state;
        let state = type_into(state, "name", "Initech");
        let state = type_into(state, "contact_details", "info@initech.test");
        let state = run(&mut backend, state, CrudAction::Submit);

        assert_eq!(
            backend.requests,
            vec!["GET /clients", "POST /clients", "GET /clients"]
        );
        assert_eq!(state.success_message.as_deref(), Some("Client added successfully"));
        assert!(!state.show_add);
        assert_eq!(state.selected, None);
        assert_eq!(state.items, backend.rows);
        let mut ids: Vec<EntityId> = state.items.iter().map(|c| c.client_id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_edit_updates_in_place() {
        let mut backend = ScriptedBackend::new(vec![client(1, "Acme"), client(2, "Globex")]);
        let state = run(&mut backend, CrudState::new(), CrudAction::Load);

        let target = state.items[1].clone();
        let state = reduce(state, CrudAction::OpenEdit(target)).state;
        assert!(state.show_edit);
        assert_eq!(state.draft.text("name"), "Globex");

        let state = type_into(state, "name", "Globex Corporation");
        let state = run(&mut backend, state, CrudAction::Submit);

        assert!(backend.requests.contains(&"PUT /clients/2".to_string()));
        assert_eq!(state.success_message.as_deref(), Some("Client updated successfully"));
        assert!(!state.show_edit);
        assert_eq!(state.selected, None);
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[1].name, "Globex Corporation");
    }

    #[test]
    fn test_failed_submit_keeps_modal_open_and_prefers_server_message() {
        let mut backend = ScriptedBackend::new(Vec::new());
        let state = reduce(CrudState::<Client>::new(), CrudAction::OpenCreate { today: today() }).state;
        let state = type_into(state, "name", "Acme");

        backend.fail_next = Some(ApiError::from_status(409, r#"{"error":"Client already exists"}"#));
        let state = run(&mut backend, state, CrudAction::Submit);
        assert!(state.show_add);
        assert!(!state.is_submitting());
        assert_eq!(state.error_message.as_deref(), Some("Client already exists"));

        backend.fail_next = Some(ApiError::Decode("eof".into()));
        let state = run(&mut backend, state, CrudAction::Submit);
        assert_eq!(state.error_message.as_deref(), Some("Failed to add client"));

        // retry succeeds
        let state = run(&mut backend, state, CrudAction::Submit);
        assert!(!state.show_add);
        assert_eq!(state.error_message, None);
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_declined_delete_sends_nothing() {
        let state = CrudState::<Client>::new();
        let transition = reduce(state, CrudAction::Remove { id: 1, confirmed: false });
        assert_eq!(transition.command, None);
    }

    #[test]
    fn test_confirmed_delete_reloads() {
        let mut backend = ScriptedBackend::new(vec![client(1, "Acme"), client(2, "Globex")]);
        let state = run(&mut backend, CrudState::new(), CrudAction::Load);
        let state = run(&mut backend, state, CrudAction::Remove { id: 1, confirmed: true });
        assert_eq!(state.success_message.as_deref(), Some("Client deleted successfully"));
        assert_eq!(state.items, vec![client(2, "Globex")]);
    }

    #[test]
    fn test_delete_failure_sets_error() {
        let mut backend = ScriptedBackend::new(vec![client(1, "Acme")]);
        let state = run(&mut backend, CrudState::new(), CrudAction::Load);
        backend.fail_next = Some(ApiError::from_status(500, ""));
        let state = run(&mut backend, state, CrudAction::Remove { id: 1, confirmed: true });
        assert_eq!(state.error_message.as_deref(), Some("Failed to delete client"));
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_aborted_results_leave_no_message() {
        let state = reduce(CrudState::<Client>::new(), CrudAction::Load).state;
        let state = reduce(
            state,
            CrudAction::ItemsLoaded {
                seq: 1,
                result: Err(ApiError::Aborted),
            },
        )
        .state;
        assert_eq!(state.error_message, None);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_initial_load_requests_related_collections_reload_does_not() {
        let transition = reduce(CrudState::<Staff>::new(), CrudAction::Load);
        assert_eq!(
            transition.command,
            Some(CrudCommand::Fetch {
                seq: 1,
                related: &[EntityKind::StaffGrade],
            })
        );

        let state = reduce(transition.state, CrudAction::RemoveSucceeded);
        assert_eq!(
            state.command,
            Some(CrudCommand::Fetch {
                seq: 2,
                related: &[],
            })
        );
    }

    #[test]
    fn test_related_failure_sets_that_entity_message() {
        let state = reduce(
            CrudState::<Staff>::new(),
            CrudAction::RelatedLoaded {
                kind: EntityKind::StaffGrade,
                result: Err(ApiError::Transport("offline".into())),
            },
        )
        .state;
        assert!(state.related.options(EntityKind::StaffGrade).is_empty());
        assert_eq!(state.error_message.as_deref(), Some("Failed to fetch grades"));
    }

    #[test]
    fn test_search_filters_visible_items() {
        let mut state = CrudState::<Client>::new();
        state.items = vec![client(1, "Acme"), client(2, "Globex")];
        let state = reduce(state, CrudAction::SetSearch("GLO".into())).state;
        let visible: Vec<EntityId> = state.visible_items().iter().map(|c| c.client_id).collect();
        assert_eq!(visible, vec![2]);
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_dismiss_messages() {
        let mut state = CrudState::<Client>::new();
        state.error_message = Some("x".into());
        state.success_message = Some("y".into());
        let state = reduce(state, CrudAction::DismissError).state;
        let state = reduce(state, CrudAction::DismissSuccess).state;
        assert_eq!(state.error_message, None);
        assert_eq!(state.success_message, None);
    }
}
