//! Backend API Bindings
//!
//! Frontend bindings to the REST backend, organized by layer:
//! - http: generic JSON client over a base URL
//! - foods: the `/foods` resource

mod foods;
mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Food, NewFood};

pub use foods::RestFoodApi;
pub use http::HttpClient;

/// Errors raised by backend calls
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connection refused, CORS, aborted fetch)
    #[error("network error: {0}")]
    Network(String),
    /// Backend answered with a non-2xx status
    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },
    /// Body could not be decoded into the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Food resource operations used by the dashboard
///
/// Futures are `?Send` because browser fetch futures are bound to the main thread.
#[async_trait(?Send)]
pub trait FoodApi {
    /// `GET /foods`
    async fn list_foods(&self) -> ApiResult<Vec<Food>>;

    /// `POST /foods`
    async fn create_food(&self, food: &NewFood) -> ApiResult<Food>;

    /// `PUT /foods/{id}`
    async fn update_food(&self, id: u32, food: &Food) -> ApiResult<Food>;

    /// `DELETE /foods/{id}`
    async fn delete_food(&self, id: u32) -> ApiResult<()>;
}
