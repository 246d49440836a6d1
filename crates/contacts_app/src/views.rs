use askama::Template;
use contacts_core::{update, AppState, AppViewModel, ContactRecord, Location, Msg};
use contacts_engine::Contact;

/// Server-side render of the sidebar: mounts the search-sync core with the
/// loader's data, so the field shows the committed `q`.
pub(crate) fn sidebar(location: Location, contacts: Vec<ContactRecord>) -> AppViewModel {
    let (state, _effects) = update(AppState::new(), Msg::Mounted { location, contacts });
    state.view()
}

#[derive(Template)]
#[template(path = "index.html")]
pub(crate) struct IndexPage {
    pub sidebar: AppViewModel,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub(crate) struct ContactPage {
    pub sidebar: AppViewModel,
    pub contact: Contact,
    pub name: String,
    pub has_name: bool,
}

impl ContactPage {
    pub fn new(sidebar: AppViewModel, contact: Contact) -> Self {
        let display = contact.record().display_name();
        Self {
            sidebar,
            has_name: display.is_some(),
            name: display.unwrap_or_default(),
            contact,
        }
    }
}

#[derive(Template)]
#[template(path = "edit.html")]
pub(crate) struct EditPage {
    pub sidebar: AppViewModel,
    pub id: String,
    pub first: String,
    pub last: String,
    pub twitter: String,
    pub avatar: String,
    pub notes: String,
}

impl EditPage {
    pub fn new(sidebar: AppViewModel, contact: Contact) -> Self {
        Self {
            sidebar,
            id: contact.id,
            first: contact.first.unwrap_or_default(),
            last: contact.last.unwrap_or_default(),
            twitter: contact.twitter.unwrap_or_default(),
            avatar: contact.avatar.unwrap_or_default(),
            notes: contact.notes.unwrap_or_default(),
        }
    }
}
