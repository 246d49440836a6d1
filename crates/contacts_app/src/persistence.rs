use contacts_engine::{Contact, ContactStore, SnapshotFile};
use contacts_logging::{contacts_error, contacts_info, contacts_warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedState {
    contacts: Vec<Contact>,
}

/// Loads the store from `snapshot`. Returns `None` when the file is missing
/// or unreadable, so the caller can fall back to a fresh store.
pub fn load_store(snapshot: &SnapshotFile) -> Option<ContactStore> {
    let content = match snapshot.read() {
        Ok(Some(text)) => text,
        Ok(None) => return None,
        Err(err) => {
            contacts_warn!(
                "Failed to read contacts snapshot from {:?}: {}",
                snapshot.path(),
                err
            );
            return None;
        }
    };

    let state: PersistedState = match ron::from_str(&content) {
        Ok(state) => state,
        Err(err) => {
            contacts_warn!(
                "Failed to parse contacts snapshot from {:?}: {}",
                snapshot.path(),
                err
            );
            return None;
        }
    };

    contacts_info!(
        "Loaded {} contacts from {:?}",
        state.contacts.len(),
        snapshot.path()
    );
    Some(ContactStore::from_contacts(state.contacts))
}

/// Rewrites `snapshot` with the store's contents; failures are logged only.
pub fn save_store(snapshot: &SnapshotFile, store: &ContactStore) {
    let state = PersistedState {
        contacts: store.snapshot(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&state, pretty) {
        Ok(text) => text,
        Err(err) => {
            contacts_error!("Failed to serialize contacts snapshot: {}", err);
            return;
        }
    };

    if let Err(err) = snapshot.write(&content) {
        contacts_error!(
            "Failed to write contacts snapshot to {:?}: {}",
            snapshot.path(),
            err
        );
    }
}
