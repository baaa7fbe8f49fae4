use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use food_client::Pagination;

use crate::AppState;
use crate::error::AppError;

pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/list", get(list_foods))
        .route("/search", get(search_foods))
}

/// Raw query pairs in request order. Repeated keys are allowed, the first
/// occurrence wins.
type QueryPairs = Vec<(String, String)>;

fn first(params: &QueryPairs, key: &str) -> Option<String> {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

fn pagination(params: &QueryPairs) -> Pagination {
    Pagination {
        page_size: first(params, "pageSize"),
        page_number: first(params, "pageNumber"),
    }
}

#[tracing::instrument(skip(state))]
async fn list_foods(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Result<Json<serde_json::Value>, AppError> {
    let body = state.foods.list_foods(pagination(&params)).await?;
    Ok(Json(body))
}

#[tracing::instrument(skip(state))]
async fn search_foods(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Result<Json<serde_json::Value>, AppError> {
    let query = first(&params, "query").unwrap_or_default();

    let body = state
        .foods
        .search_foods(query, pagination(&params))
        .await?;
    Ok(Json(body))
}
