use std::sync::PoisonError;

use contacts_engine::{
    shared, ContactStore, LoaderSettings, SharedStore, SnapshotFile, StoreError, StoreLoader,
};
use contacts_logging::contacts_info;

use crate::persistence::{load_store, save_store};
use crate::{AppError, Config};

/// State shared by every route: the store, its loader and the optional
/// snapshot file written after each mutation.
pub struct AppContext {
    store: SharedStore,
    loader: StoreLoader,
    snapshot: Option<SnapshotFile>,
}

impl AppContext {
    pub fn new(
        store: SharedStore,
        settings: LoaderSettings,
        snapshot: Option<SnapshotFile>,
    ) -> Self {
        let loader = StoreLoader::new(store.clone(), settings);
        Self {
            store,
            loader,
            snapshot,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let snapshot = config.data_file.clone().map(SnapshotFile::new);
        let store = match snapshot.as_ref().and_then(load_store) {
            Some(store) => store,
            None if config.seed => {
                contacts_info!("Starting with seeded demo contacts");
                ContactStore::with_seed_data()
            }
            None => ContactStore::new(),
        };
        let settings = LoaderSettings {
            latency: config.latency,
        };
        Self::new(shared(store), settings, snapshot)
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub(crate) fn loader(&self) -> &StoreLoader {
        &self.loader
    }

    pub(crate) fn read<T>(
        &self,
        f: impl FnOnce(&ContactStore) -> Result<T, StoreError>,
    ) -> Result<T, AppError> {
        let store = self.store.read().unwrap_or_else(PoisonError::into_inner);
        Ok(f(&*store)?)
    }

    /// Applies a mutation and rewrites the snapshot, if one is configured.
    pub(crate) fn mutate<T>(
        &self,
        f: impl FnOnce(&mut ContactStore) -> Result<T, StoreError>,
    ) -> Result<T, AppError> {
        let mut store = self.store.write().unwrap_or_else(PoisonError::into_inner);
        let out = f(&mut *store)?;
        if let Some(snapshot) = &self.snapshot {
            save_store(snapshot, &store);
        }
        Ok(out)
    }
}
