use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use contacts_engine::{LoadError, StoreError};
use contacts_logging::contacts_error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AppError::NotFound(id),
        }
    }
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::ContactNotFound(id) => AppError::NotFound(id),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Render(err) => {
                contacts_error!("failed to render page: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
