mod usda_client;
mod usda_types;

use thiserror::Error;

pub use usda_client::UsdaClient;
pub use usda_types::{Food, FoodSearchResponse};

#[derive(Debug, Error)]
pub enum UsdaError {
    #[error("USDA API error: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("USDA API request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl UsdaError {
    pub fn status(&self) -> Option<u16> {
        match self {
            UsdaError::Status { status, .. } => Some(*status),
            UsdaError::Request(err) => err.status().map(|s| s.as_u16()),
        }
    }
}
