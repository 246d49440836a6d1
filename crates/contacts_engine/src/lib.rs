//! Contacts engine: repository, history navigator and async route loaders.
mod contact_id;
mod engine;
mod history;
mod loader;
mod matching;
mod persist;
mod seed;
mod store;
mod types;

pub use contact_id::new_contact_id;
pub use engine::EngineHandle;
pub use history::{NavigationKind, Navigator, PendingNavigation};
pub use loader::{Loader, LoaderSettings, StoreLoader};
pub use matching::{rank, MatchRank};
pub use persist::{ensure_parent_dir, PersistError, SnapshotFile};
pub use store::{shared, ContactStore, SharedStore, StoreError};
pub use types::{
    Contact, ContactChanges, ContactId, EngineEvent, LoadError, LoaderData, NavigationId,
};
