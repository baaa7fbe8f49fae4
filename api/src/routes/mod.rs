use axum::Router;

use crate::AppState;

pub mod foods;
pub mod health;

pub fn app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/foods", foods::food_routes())
        .nest("/api/v1", health::health_routes())
        .with_state(state)
}
