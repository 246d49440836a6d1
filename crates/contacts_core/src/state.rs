use crate::view_model::{AppViewModel, ContactRowView};
use crate::{HistoryMode, Location};

/// Listing shape of a contact, as returned by the contacts loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub favorite: bool,
}

impl ContactRecord {
    /// "First Last" from whichever parts are non-empty, or `None`.
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

/// What the search field currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldState {
    /// Mirrors the committed query.
    Displaying(String),
    /// Holds text the user typed that has not been committed yet.
    UserEditing(String),
}

impl FieldState {
    pub fn text(&self) -> &str {
        match self {
            FieldState::Displaying(text) | FieldState::UserEditing(text) => text,
        }
    }
}

impl Default for FieldState {
    fn default() -> Self {
        FieldState::Displaying(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavigationState {
    #[default]
    Idle,
    Pending(Location),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    field: FieldState,
    committed_query: Option<String>,
    navigation: NavigationState,
    location: Location,
    contacts: Vec<ContactRecord>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let current_contact = self
            .location
            .path()
            .strip_prefix("/contacts/")
            .and_then(|rest| rest.split('/').next());
        AppViewModel {
            field_value: self.field.text().to_owned(),
            is_searching: self.is_searching(),
            is_detail_loading: self.is_detail_loading(),
            committed_query: self.committed_query.clone(),
            location: self.location.href(),
            contacts: self
                .contacts
                .iter()
                .map(|contact| ContactRowView {
                    id: contact.id.clone(),
                    href: format!("/contacts/{}", contact.id),
                    label: contact.display_name(),
                    favorite: contact.favorite,
                    active: current_contact == Some(contact.id.as_str()),
                })
                .collect(),
        }
    }

    pub fn field(&self) -> &FieldState {
        &self.field
    }

    pub fn field_value(&self) -> &str {
        self.field.text()
    }

    pub fn committed_query(&self) -> Option<&str> {
        self.committed_query.as_deref()
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// A search is in flight: something is pending and it targets `q`.
    pub fn is_searching(&self) -> bool {
        matches!(&self.navigation, NavigationState::Pending(target) if target.has_query())
    }

    /// A non-search navigation is in flight.
    pub fn is_detail_loading(&self) -> bool {
        matches!(&self.navigation, NavigationState::Pending(target) if !target.has_query())
    }

    /// Only the first search away from an unfiltered page adds a history
    /// entry; every later keystroke overwrites it. A target without `q`
    /// never pushes, so clearing an unfiltered field adds nothing.
    pub fn history_mode_for_search(&self, target: &Location) -> HistoryMode {
        if self.committed_query.is_none() && target.has_query() {
            HistoryMode::Push
        } else {
            HistoryMode::Replace
        }
    }

    pub(crate) fn begin_editing(&mut self, text: String) {
        self.field = FieldState::UserEditing(text);
    }

    pub(crate) fn set_pending(&mut self, target: Location) {
        self.navigation = NavigationState::Pending(target);
    }

    pub(crate) fn clear_pending(&mut self) {
        self.navigation = NavigationState::Idle;
    }

    /// Records the committed location and its loader data.
    pub(crate) fn commit(&mut self, location: Location, contacts: Vec<ContactRecord>) {
        self.committed_query = location.query().map(ToOwned::to_owned);
        self.location = location;
        self.contacts = contacts;
    }

    pub(crate) fn display_committed(&mut self) -> String {
        let text = self.committed_query.clone().unwrap_or_default();
        self.field = FieldState::Displaying(text.clone());
        text
    }
}
