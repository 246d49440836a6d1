use std::sync::Arc;
use std::time::{Duration, Instant};

use contacts_core::Location;
use contacts_engine::{
    shared, ContactStore, EngineEvent, EngineHandle, LoadError, Loader, LoaderSettings,
    StoreLoader,
};

fn seeded_loader(latency: Duration) -> StoreLoader {
    StoreLoader::new(
        shared(ContactStore::with_seed_data()),
        LoaderSettings { latency },
    )
}

#[tokio::test]
async fn loader_filters_by_query() {
    let loader = seeded_loader(Duration::ZERO);

    let data = loader.load(&Location::search("kapoor")).await.unwrap();

    assert_eq!(data.location, Location::search("kapoor"));
    assert_eq!(data.contacts.len(), 1);
    assert_eq!(data.contacts[0].first_name.as_deref(), Some("Shruti"));
}

#[tokio::test]
async fn loader_rejects_unknown_contact_routes() {
    let loader = seeded_loader(Duration::ZERO);

    let err = loader
        .load(&Location::new("/contacts/missing/edit"))
        .await
        .unwrap_err();

    assert_eq!(err, LoadError::ContactNotFound("missing".to_string()));
}

#[tokio::test]
async fn loader_resolves_known_contact_routes() {
    let store = shared(ContactStore::new());
    let id = store.write().unwrap().create_blank_contact();
    let loader = StoreLoader::new(store, LoaderSettings::default());

    let data = loader
        .load(&Location::new(format!("/contacts/{id}")))
        .await
        .unwrap();

    assert_eq!(data.contacts.len(), 1);
    assert_eq!(data.contacts[0].id, id);
}

#[tokio::test]
async fn loader_waits_for_configured_latency() {
    let loader = seeded_loader(Duration::from_millis(40));
    let started = Instant::now();

    loader.load(&Location::default()).await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(40));
}

#[test]
fn engine_reports_completed_loads() {
    let engine = EngineHandle::new(Arc::new(seeded_loader(Duration::ZERO))).unwrap();

    engine.load(7, Location::search("ryan"));
    let event = engine
        .recv_timeout(Duration::from_secs(5))
        .expect("load completed");

    match event {
        EngineEvent::LoadCompleted {
            nav_id,
            location,
            result,
        } => {
            assert_eq!(nav_id, 7);
            assert_eq!(location, Location::search("ryan"));
            assert_eq!(result.unwrap().contacts.len(), 1);
        }
    }
}

#[test]
fn engine_reports_failures_as_events() {
    let engine = EngineHandle::new(Arc::new(seeded_loader(Duration::ZERO))).unwrap();

    engine.load(3, Location::new("/contacts/nope"));
    let EngineEvent::LoadCompleted {
        nav_id,
        location,
        result,
    } = engine
        .recv_timeout(Duration::from_secs(5))
        .expect("load completed");

    assert_eq!(nav_id, 3);
    assert_eq!(location.path(), "/contacts/nope");
    assert!(result.is_err());
}
