use serde::Serialize;
use thiserror::Error;

/// Application errors, serializable for IPC communication with the webview.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// The remote call could not be completed (no connectivity, DNS, TLS).
    #[error("Network Error: {0}")]
    Network(String),

    /// The translation service answered, but unusably (bad status,
    /// malformed payload, empty translation).
    #[error("Service Error: {0}")]
    Service(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Service(format!("Malformed response: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
