//! Contacts web application: HTTP routes, server-rendered views and a
//! headless browser session driving the search-sync core.
pub mod config;
mod context;
mod error;
pub mod logging;
mod persistence;
mod routes;
mod session;
mod views;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

pub use config::{Config, ConfigError};
pub use context::AppContext;
pub use error::AppError;
pub use persistence::{load_store, save_store};
pub use session::{BrowserSession, SessionError};

/// All routes of the application, sharing one [`AppContext`].
pub fn router(context: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(routes::index).post(routes::create_contact))
        .route("/contacts/{id}", get(routes::show_contact))
        .route(
            "/contacts/{id}/edit",
            get(routes::edit_contact).post(routes::update_contact),
        )
        .route("/contacts/{id}/destroy", post(routes::destroy_contact))
        .route("/contacts/{id}/favorite", post(routes::favorite_contact))
        .with_state(context)
}
