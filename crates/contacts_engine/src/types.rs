use chrono::{DateTime, Utc};
use contacts_core::{ContactRecord, Location};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ContactId = String;
pub type NavigationId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub favorite: bool,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    pub fn record(&self) -> ContactRecord {
        ContactRecord {
            id: self.id.clone(),
            first_name: self.first.clone(),
            last_name: self.last.clone(),
            favorite: self.favorite,
        }
    }
}

/// Replacement values for the editable fields. Blank text clears a field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactChanges {
    pub first: Option<String>,
    pub last: Option<String>,
    pub avatar: Option<String>,
    pub twitter: Option<String>,
    pub notes: Option<String>,
}

impl ContactChanges {
    pub(crate) fn apply(self, contact: &mut Contact) {
        contact.first = non_blank(self.first);
        contact.last = non_blank(self.last);
        contact.avatar = non_blank(self.avatar);
        contact.twitter = non_blank(self.twitter);
        contact.notes = non_blank(self.notes);
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

/// What a route loader hands back for a committed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderData {
    pub location: Location,
    pub contacts: Vec<ContactRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("contact {0} not found")]
    ContactNotFound(ContactId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    LoadCompleted {
        nav_id: NavigationId,
        /// The location that was requested, whatever the outcome.
        location: Location,
        result: Result<LoaderData, LoadError>,
    },
}
