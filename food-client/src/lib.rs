mod api_client;
mod usda;
pub mod view;

use std::pin::Pin;

use serde::Deserialize;

pub use api_client::{ApiClient, ApiError, RequestOptions};
pub use usda::{Food, FoodSearchResponse, UsdaClient, UsdaError};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub const DEFAULT_PAGE_SIZE: &str = "25";
pub const DEFAULT_PAGE_NUMBER: &str = "1";

/// Pagination parameters as received from a caller.
///
/// Values are kept as the raw strings so they reach the upstream API exactly
/// as they were sent to us.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page_size: Option<String>,
    pub page_number: Option<String>,
}

impl Pagination {
    pub fn page_size(&self) -> &str {
        self.page_size.as_deref().unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn page_number(&self) -> &str {
        self.page_number.as_deref().unwrap_or(DEFAULT_PAGE_NUMBER)
    }
}

/// A remote catalogue of foods that can be listed and searched.
///
/// Bodies are returned as raw JSON so callers can relay them untouched.
pub trait FoodSource: Send + Sync {
    fn list_foods(
        &self,
        pagination: Pagination,
    ) -> BoxFuture<'_, Result<serde_json::Value, UsdaError>>;

    fn search_foods(
        &self,
        query: String,
        pagination: Pagination,
    ) -> BoxFuture<'_, Result<serde_json::Value, UsdaError>>;
}
