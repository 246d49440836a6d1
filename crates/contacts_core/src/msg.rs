use crate::{ContactRecord, Location};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The search field was mounted after the first loader run.
    Mounted {
        location: Location,
        contacts: Vec<ContactRecord>,
    },
    /// User typed into the search field.
    InputChanged(String),
    /// The router accepted a navigation and is loading it.
    NavigationStarted { target: Location },
    /// The router committed a navigation (local search, link or back/forward).
    NavigationCommitted {
        location: Location,
        contacts: Vec<ContactRecord>,
    },
    /// The pending navigation failed and was dropped by the router.
    NavigationAbandoned,
    /// User submitted the "New" contact form.
    CreateContactClicked,
}
