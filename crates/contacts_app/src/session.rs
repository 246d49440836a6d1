use std::sync::{Arc, PoisonError};
use std::time::{Duration, Instant};

use contacts_core::{
    update, AppState, AppViewModel, Effect, HistoryMode, Location, LocationError, Msg,
};
use contacts_engine::{
    ContactId, EngineEvent, EngineHandle, LoadError, Loader, Navigator, NavigationId, SharedStore,
};
use contacts_logging::{contacts_debug, contacts_info, contacts_warn, set_navigation_id};
use thiserror::Error;

const MOUNT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid location {href:?}: {source}")]
    Location {
        href: String,
        source: LocationError,
    },
    #[error("failed to start loader engine: {0}")]
    Engine(#[from] std::io::Error),
    #[error("initial load failed: {0}")]
    Mount(#[from] LoadError),
    #[error("initial load timed out")]
    MountTimeout,
}

/// Headless browser tab: owns the search-sync state, the history stack and
/// the loader engine, and runs the effects the core asks for.
pub struct BrowserSession {
    state: AppState,
    navigator: Navigator,
    engine: EngineHandle,
    store: SharedStore,
    /// The `id=q` input as the DOM holds it: written by keystrokes and by
    /// `SetFieldValue` effects only, never read back from `state`.
    field: String,
}

impl BrowserSession {
    /// Opens `href`, waiting for its loader before mounting the search field.
    pub fn open(
        store: SharedStore,
        loader: Arc<dyn Loader>,
        href: &str,
    ) -> Result<Self, SessionError> {
        let location = Location::parse(href).map_err(|source| SessionError::Location {
            href: href.to_owned(),
            source,
        })?;
        let engine = EngineHandle::new(loader)?;
        // Id 0 is never handed out by the navigator.
        engine.load(0, location.clone());
        let data = loop {
            match engine.recv_timeout(MOUNT_TIMEOUT) {
                Some(EngineEvent::LoadCompleted {
                    nav_id: 0,
                    result,
                    ..
                }) => break result?,
                Some(_) => continue,
                None => return Err(SessionError::MountTimeout),
            }
        };

        let mut session = Self {
            state: AppState::new(),
            navigator: Navigator::new(location),
            engine,
            store,
            field: String::new(),
        };
        session.dispatch(Msg::Mounted {
            location: data.location,
            contacts: data.contacts,
        });
        contacts_info!("session opened at {}", session.navigator.current());
        Ok(session)
    }

    /// Replaces the field text as a user would, firing one input event.
    pub fn type_text(&mut self, value: &str) {
        self.field = value.to_owned();
        self.dispatch(Msg::InputChanged(value.to_owned()));
    }

    /// Follows a link; a push navigation.
    pub fn click_link(&mut self, href: &str) -> Result<(), SessionError> {
        let location = Location::parse(href).map_err(|source| SessionError::Location {
            href: href.to_owned(),
            source,
        })?;
        let id = self.navigator.begin(location, HistoryMode::Push);
        self.start_navigation(id);
        Ok(())
    }

    /// Submits the "New" form.
    pub fn create_contact(&mut self) {
        self.dispatch(Msg::CreateContactClicked);
    }

    /// Browser back button. Returns false at the first entry.
    pub fn back(&mut self) -> bool {
        match self.navigator.back() {
            Some(id) => {
                self.start_navigation(id);
                true
            }
            None => false,
        }
    }

    /// Browser forward button. Returns false at the last entry.
    pub fn forward(&mut self) -> bool {
        match self.navigator.forward() {
            Some(id) => {
                self.start_navigation(id);
                true
            }
            None => false,
        }
    }

    /// Handles every engine event that is already available.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.engine.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Waits until no navigation is pending. Returns false on timeout.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.navigator.pending().is_some() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.engine.recv_timeout(remaining) {
                Some(event) => self.handle_event(event),
                None => return false,
            }
        }
        true
    }

    pub fn field_value(&self) -> &str {
        &self.field
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::SetFieldValue(text) => {
                contacts_debug!("field <- {:?}", text);
                self.field = text;
            }
            Effect::Navigate { location, mode } => {
                let id = self.navigator.begin(location, mode);
                self.start_navigation(id);
            }
            Effect::CreateContact => {
                let id: ContactId = self
                    .store
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .create_blank_contact();
                let edit = Location::new(format!("/contacts/{id}/edit"));
                let nav_id = self.navigator.begin(edit, HistoryMode::Push);
                self.start_navigation(nav_id);
            }
        }
    }

    fn start_navigation(&mut self, id: NavigationId) {
        let Some(target) = self.navigator.pending().map(|p| p.target.clone()) else {
            return;
        };
        set_navigation_id(id);
        contacts_debug!("loading {}", target);
        self.dispatch(Msg::NavigationStarted {
            target: target.clone(),
        });
        self.engine.load(id, target);
        set_navigation_id(0);
    }

    fn handle_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::LoadCompleted {
                nav_id,
                location: requested,
                result,
            } => {
                set_navigation_id(nav_id);
                match result {
                    Ok(data) => {
                        // Superseded loads commit nothing and never touch the field.
                        if let Some(location) = self.navigator.commit(nav_id) {
                            self.dispatch(Msg::NavigationCommitted {
                                location,
                                contacts: data.contacts,
                            });
                        }
                    }
                    Err(err) => {
                        if self.navigator.abandon(nav_id) {
                            contacts_warn!("navigation to {} failed: {}", requested, err);
                            self.dispatch(Msg::NavigationAbandoned);
                        }
                    }
                }
                set_navigation_id(0);
            }
        }
    }
}
