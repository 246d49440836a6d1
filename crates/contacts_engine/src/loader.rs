use std::sync::PoisonError;
use std::time::Duration;

use contacts_core::Location;
use contacts_logging::contacts_trace;

use crate::{LoadError, LoaderData, SharedStore};

#[derive(Debug, Clone, Default)]
pub struct LoaderSettings {
    /// Artificial delay before each load, to make pending states visible.
    pub latency: Duration,
}

/// Route loader: resolves the data for a location being navigated to.
#[async_trait::async_trait]
pub trait Loader: Send + Sync {
    async fn load(&self, location: &Location) -> Result<LoaderData, LoadError>;
}

/// Loader backed by the contacts store: the sidebar list filtered by `q`,
/// and a 404 for unknown `/contacts/{id}` routes.
#[derive(Debug, Clone)]
pub struct StoreLoader {
    store: SharedStore,
    settings: LoaderSettings,
}

impl StoreLoader {
    pub fn new(store: SharedStore, settings: LoaderSettings) -> Self {
        Self { store, settings }
    }
}

#[async_trait::async_trait]
impl Loader for StoreLoader {
    async fn load(&self, location: &Location) -> Result<LoaderData, LoadError> {
        if !self.settings.latency.is_zero() {
            tokio::time::sleep(self.settings.latency).await;
        }

        let store = self.store.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(id) = contact_id(location) {
            store
                .get(id)
                .map_err(|_| LoadError::ContactNotFound(id.to_owned()))?;
        }
        let contacts = store.list_contacts(location.query());
        contacts_trace!("loaded {} contacts for {}", contacts.len(), location);
        Ok(LoaderData {
            location: location.clone(),
            contacts,
        })
    }
}

fn contact_id(location: &Location) -> Option<&str> {
    location
        .path()
        .strip_prefix("/contacts/")
        .and_then(|rest| rest.split('/').next())
        .filter(|id| !id.is_empty())
}
