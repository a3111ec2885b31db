//! Backend API
//!
//! REST bindings for the orderable lookup tables, behind a trait so the
//! reorder and delete flows can run against any backend.

mod rest;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use thiserror::Error;

use crate::lookup::LookupResource;
use crate::models::{NewItem, OrderableItem};

pub use rest::RestClient;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) if status == reqwest::StatusCode::NOT_FOUND => {
                ApiError::NotFound(err.url().map(|u| u.to_string()).unwrap_or_default())
            }
            Some(status) => ApiError::Status(status.as_u16()),
            None if err.is_decode() => ApiError::Decode(err.to_string()),
            None => ApiError::Transport(err.to_string()),
        }
    }
}

/// CRUD surface of one lookup-table collection
///
/// `?Send`: in the browser every request future is bound to the UI thread.
#[async_trait(?Send)]
pub trait LookupApi {
    /// `GET /{R}`: the whole collection, ascending by `order`
    async fn list(&self, resource: LookupResource) -> ApiResult<Vec<OrderableItem>>;

    /// `POST /{R}`
    async fn create(&self, resource: LookupResource, item: &NewItem) -> ApiResult<()>;

    /// `PUT /{R}/{id}`: full-record update
    async fn update(&self, resource: LookupResource, item: &OrderableItem) -> ApiResult<()>;

    /// `DELETE /{R}/{id}`
    async fn delete(&self, resource: LookupResource, id: &str) -> ApiResult<()>;
}
