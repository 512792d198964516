use super::draft::FormDraft;
use super::filter::filter_items;
use crate::domain::common::Entity;
use crate::shared::resolver::RelatedCollections;

/// Which request a pending submit is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update,
}

/// State of one CRUD screen
#[derive(Debug, Clone, PartialEq)]
pub struct CrudState<E: Entity> {
    /// Server response order
    pub items: Vec<E>,
    pub related: RelatedCollections,
    pub draft: FormDraft,
    /// Record being edited; `None` while creating
    pub selected: Option<E>,
    pub search_term: String,
    pub is_loading: bool,
    pub pending_submit: Option<SubmitMode>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub show_add: bool,
    pub show_edit: bool,
    /// Generation of the latest collection fetch; older responses are dropped
    pub load_seq: u64,
}

impl<E: Entity> Default for CrudState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            related: RelatedCollections::new(),
            draft: FormDraft::defaults(E::fields()),
            selected: None,
            search_term: String::new(),
            is_loading: false,
            pending_submit: None,
            error_message: None,
            success_message: None,
            show_add: false,
            show_edit: false,
            load_seq: 0,
        }
    }
}

impl<E: Entity> CrudState<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items matching the current search term
    pub fn visible_items(&self) -> Vec<&E> {
        filter_items(&self.items, &self.related, &self.search_term)
    }

    pub fn is_submitting(&self) -> bool {
        self.pending_submit.is_some()
    }

    pub fn is_modal_open(&self) -> bool {
        self.show_add || self.show_edit
    }

    pub(super) fn close_modals(&mut self) {
        self.show_add = false;
        self.show_edit = false;
        self.selected = None;
    }
}
