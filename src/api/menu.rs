use std::fmt;

use async_trait::async_trait;

use super::types::{Food, OrderPayload};

/// Errors that can occur while talking to the menu backend.
#[derive(Debug)]
pub enum ApiError {
    /// The request never got an answer (timeout, DNS, connection refused).
    Network(String),
    /// The backend answered with a non-success status.
    Api { status: u16, message: String },
    /// The backend answered with a body that isn't a valid record.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "backend error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Everything the food details screen needs from the backend.
///
/// One method per endpoint. Mutating calls return `()` on success; callers
/// already hold the data they sent, so echoing the server's copy back would
/// only invite drift.
#[async_trait]
pub trait MenuApi: Send + Sync {
    /// Fetches a single menu item by id (`GET foods/{id}`).
    async fn fetch_food(&self, id: u64) -> Result<Food, ApiError>;

    /// Fetches every favorited food record (`GET favorites`).
    async fn list_favorites(&self) -> Result<Vec<Food>, ApiError>;

    /// Stores the full food record in the favorites collection
    /// (`POST favorites`).
    async fn create_favorite(&self, food: &Food) -> Result<(), ApiError>;

    /// Removes a food from the favorites collection
    /// (`DELETE favorites/{id}`).
    async fn delete_favorite(&self, id: u64) -> Result<(), ApiError>;

    /// Places an order (`POST orders`).
    async fn submit_order(&self, order: &OrderPayload) -> Result<(), ApiError>;
}
