//! Contacts core: pure search-sync state machine and view-model helpers.
mod effect;
mod location;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, HistoryMode};
pub use location::{Location, LocationError, QUERY_PARAM, SEARCH_PATH};
pub use msg::Msg;
pub use state::{AppState, ContactRecord, FieldState, NavigationState};
pub use update::update;
pub use view_model::{AppViewModel, ContactRowView, NO_NAME_LABEL};
