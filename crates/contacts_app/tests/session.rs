use std::sync::{Arc, Once};
use std::time::Duration;

use contacts_app::BrowserSession;
use contacts_core::{Location, NavigationState};
use contacts_engine::{
    shared, ContactStore, LoadError, Loader, LoaderData, LoaderSettings, SharedStore, StoreLoader,
};
use pretty_assertions::assert_eq;

const SETTLE: Duration = Duration::from_secs(5);

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(contacts_logging::initialize_for_tests);
}

fn open(href: &str) -> BrowserSession {
    let store = shared(ContactStore::with_seed_data());
    let loader = Arc::new(StoreLoader::new(store.clone(), LoaderSettings::default()));
    BrowserSession::open(store, loader, href).expect("session opens")
}

fn entries(session: &BrowserSession) -> Vec<String> {
    session
        .navigator()
        .entries()
        .iter()
        .map(Location::href)
        .collect()
}

/// Loader whose latency depends on the query, so a search started later can
/// finish first.
struct SkewedLoader {
    inner: StoreLoader,
    slow_query: &'static str,
}

#[async_trait::async_trait]
impl Loader for SkewedLoader {
    async fn load(&self, location: &Location) -> Result<LoaderData, LoadError> {
        let delay = if location.query() == Some(self.slow_query) {
            Duration::from_millis(300)
        } else {
            Duration::from_millis(10)
        };
        tokio::time::sleep(delay).await;
        self.inner.load(location).await
    }
}

fn skewed(store: &SharedStore, slow_query: &'static str) -> Arc<dyn Loader> {
    Arc::new(SkewedLoader {
        inner: StoreLoader::new(store.clone(), LoaderSettings::default()),
        slow_query,
    })
}

#[test]
fn opening_a_search_url_fills_the_field() {
    init_logging();
    let session = open("/?q=kapoor");

    assert_eq!(session.field_value(), "kapoor");
    assert_eq!(session.view().contacts.len(), 1);
    assert!(!session.view().is_searching);
}

#[test]
fn type_backspace_then_back_clears_the_filter() {
    init_logging();
    let mut session = open("/");
    assert_eq!(session.field_value(), "");

    session.type_text("al");
    assert!(session.view().is_searching);
    assert!(session.settle(SETTLE));
    assert_eq!(session.field_value(), "al");
    assert_eq!(entries(&session), vec!["/", "/?q=al"]);

    session.type_text("a");
    assert!(session.settle(SETTLE));
    assert_eq!(session.field_value(), "a");
    assert_eq!(entries(&session), vec!["/", "/?q=a"]);

    assert!(session.back());
    assert!(session.settle(SETTLE));
    assert_eq!(session.field_value(), "");
    assert_eq!(session.state().committed_query(), None);
    assert_eq!(session.navigator().index(), 0);
}

#[test]
fn backspace_before_the_first_search_lands_adds_no_entry() {
    init_logging();
    let mut session = open("/");

    session.type_text("a");
    session.type_text("");
    assert!(session.settle(SETTLE));

    assert_eq!(entries(&session), vec!["/"]);
    assert_eq!(session.field_value(), "");
    assert!(!session.navigator().can_go_back());
}

#[test]
fn field_mirror_matches_controller_after_each_commit() {
    init_logging();
    let mut session = open("/?q=al");
    assert_eq!(session.field_value(), session.state().field_value());

    for text in ["a", "", "ryan"] {
        session.type_text(text);
        assert!(session.settle(SETTLE));
        assert_eq!(session.field_value(), session.state().field_value());
    }

    session.back();
    assert!(session.settle(SETTLE));
    assert_eq!(session.field_value(), session.state().field_value());
}

#[test]
fn one_history_entry_per_search_session() {
    init_logging();
    let mut session = open("/");

    for text in ["r", "ry", "rya", "ryan"] {
        session.type_text(text);
        assert!(session.settle(SETTLE));
    }

    assert_eq!(entries(&session), vec!["/", "/?q=ryan"]);
    assert_eq!(session.view().contacts.len(), 1);
}

#[test]
fn forward_restores_the_search() {
    init_logging();
    let mut session = open("/");
    session.type_text("ryan");
    session.settle(SETTLE);
    session.back();
    session.settle(SETTLE);

    assert!(session.forward());
    assert!(session.settle(SETTLE));

    assert_eq!(session.field_value(), "ryan");
    assert!(!session.forward());
}

#[test]
fn stale_search_never_overwrites_newer_result() {
    init_logging();
    let store = shared(ContactStore::with_seed_data());
    let mut session =
        BrowserSession::open(store.clone(), skewed(&store, "a"), "/").expect("session opens");

    session.type_text("a");
    session.type_text("al");
    assert!(session.settle(SETTLE));
    assert_eq!(session.field_value(), "al");

    // Let the slow, superseded load arrive and get dropped.
    std::thread::sleep(Duration::from_millis(400));
    session.pump();

    assert_eq!(session.field_value(), "al");
    assert_eq!(session.state().committed_query(), Some("al"));
    assert_eq!(entries(&session), vec!["/", "/?q=al"]);
}

#[test]
fn link_navigation_is_not_a_search() {
    init_logging();
    let store = shared(ContactStore::with_seed_data());
    let id = store.read().unwrap().list_contacts(Some("ryan"))[0].id.clone();
    let mut session =
        BrowserSession::open(store.clone(), skewed(&store, "never"), "/").expect("session opens");

    session.click_link(&format!("/contacts/{id}")).unwrap();
    let view = session.view();
    assert!(!view.is_searching);
    assert!(view.is_detail_loading);

    assert!(session.settle(SETTLE));
    assert_eq!(session.state().navigation(), &NavigationState::Idle);
    assert!(session.view().contacts.iter().any(|row| row.active && row.id == id));
}

#[test]
fn failed_navigation_is_abandoned() {
    init_logging();
    let mut session = open("/?q=ryan");

    session.click_link("/contacts/does-not-exist").unwrap();
    assert!(session.settle(SETTLE));

    assert_eq!(session.state().navigation(), &NavigationState::Idle);
    assert_eq!(session.navigator().current().href(), "/?q=ryan");
    assert_eq!(session.field_value(), "ryan");
}

#[test]
fn create_contact_opens_its_edit_form() {
    init_logging();
    let store = shared(ContactStore::new());
    let loader = Arc::new(StoreLoader::new(store.clone(), LoaderSettings::default()));
    let mut session = BrowserSession::open(store.clone(), loader, "/").unwrap();

    session.create_contact();
    assert!(session.settle(SETTLE));

    assert_eq!(store.read().unwrap().len(), 1);
    let current = session.navigator().current().href();
    assert!(current.starts_with("/contacts/") && current.ends_with("/edit"));
    assert_eq!(session.view().contacts[0].label, None);
    assert!(session.navigator().can_go_back());
}

#[test]
fn invalid_href_is_rejected() {
    init_logging();
    let mut session = open("/");

    assert!(session.click_link("http://[::1").is_err());
    assert!(session.navigator().pending().is_none());
}
