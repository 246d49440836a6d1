use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use contacts_core::ContactRecord;
use contacts_logging::contacts_debug;
use thiserror::Error;

use crate::matching::rank;
use crate::{new_contact_id, Contact, ContactChanges, ContactId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("contact {0} not found")]
    NotFound(ContactId),
}

/// Store shared between the loader engine and the web routes.
pub type SharedStore = Arc<RwLock<ContactStore>>;

pub fn shared(store: ContactStore) -> SharedStore {
    Arc::new(RwLock::new(store))
}

/// In-memory contacts repository keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: BTreeMap<ContactId, Contact>,
    sequence: u64,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed_data() -> Self {
        let mut store = Self::new();
        for seed in crate::seed::SEED_CONTACTS {
            let id = store.create_blank_contact();
            let changes = ContactChanges {
                first: Some(seed.first.to_owned()),
                last: Some(seed.last.to_owned()),
                avatar: None,
                twitter: seed.twitter.map(ToOwned::to_owned),
                notes: None,
            };
            if let Some(contact) = store.contacts.get_mut(&id) {
                changes.apply(contact);
            }
        }
        store
    }

    /// Rebuilds a store from a snapshot; later ids never collide with these.
    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        let sequence = contacts.len() as u64;
        Self {
            contacts: contacts
                .into_iter()
                .map(|contact| (contact.id.clone(), contact))
                .collect(),
            sequence,
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Every contact, in listing order.
    pub fn snapshot(&self) -> Vec<Contact> {
        let mut contacts: Vec<Contact> = self.contacts.values().cloned().collect();
        contacts.sort_by(listing_order);
        contacts
    }

    /// Contacts whose first or last name matches `query`, ordered by last
    /// name then creation time. An absent or empty query lists everything.
    pub fn list_contacts(&self, query: Option<&str>) -> Vec<ContactRecord> {
        let query = query.filter(|q| !q.is_empty());
        let mut matched: Vec<&Contact> = self
            .contacts
            .values()
            .filter(|contact| match query {
                None => true,
                Some(q) => [contact.first.as_deref(), contact.last.as_deref()]
                    .into_iter()
                    .flatten()
                    .any(|name| rank(name, q).is_some()),
            })
            .collect();
        matched.sort_by(|a, b| listing_order(a, b));
        matched.into_iter().map(Contact::record).collect()
    }

    pub fn create_blank_contact(&mut self) -> ContactId {
        let created_at = Utc::now();
        let nanos = created_at.timestamp_nanos_opt().unwrap_or_default();
        let id = loop {
            self.sequence += 1;
            let candidate = new_contact_id(self.sequence, nanos);
            if !self.contacts.contains_key(&candidate) {
                break candidate;
            }
        };
        self.contacts.insert(
            id.clone(),
            Contact {
                id: id.clone(),
                first: None,
                last: None,
                avatar: None,
                twitter: None,
                notes: None,
                favorite: false,
                created_at,
            },
        );
        contacts_debug!("created blank contact {}", id);
        id
    }

    pub fn get(&self, id: &str) -> Result<&Contact, StoreError> {
        self.contacts
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))
    }

    pub fn update(&mut self, id: &str, changes: ContactChanges) -> Result<&Contact, StoreError> {
        let contact = self
            .contacts
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;
        changes.apply(contact);
        contacts_debug!("updated contact {}", id);
        Ok(&*contact)
    }

    pub fn set_favorite(&mut self, id: &str, favorite: bool) -> Result<(), StoreError> {
        let contact = self
            .contacts
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;
        contact.favorite = favorite;
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> Result<Contact, StoreError> {
        let removed = self
            .contacts
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;
        contacts_debug!("deleted contact {}", id);
        Ok(removed)
    }
}

// Missing last names sort first, like an empty string.
fn listing_order(a: &Contact, b: &Contact) -> Ordering {
    let last = |contact: &Contact| contact.last.as_deref().unwrap_or_default().to_lowercase();
    last(a)
        .cmp(&last(b))
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}
