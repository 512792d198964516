//! Generic CRUD engine shared by all six entity screens
//!
//! - draft.rs: form state and per-field coercion
//! - cell.rs: display cells of the table
//! - state.rs: screen state
//! - reducer.rs: pure (state, action) -> (state, command) transitions
//! - filter.rs: client-side search

mod cell;
mod draft;
mod filter;
mod reducer;
mod state;

pub use cell::{Cell, Tone};
pub use draft::{coerce, DraftError, FieldValue, FormDraft, RawInput};
pub use filter::{filter_items, match_ranges, matches_search};
pub use reducer::{reduce, CrudAction, CrudCommand, Transition};
pub use state::{CrudState, SubmitMode};
