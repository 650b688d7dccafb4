//! Route table.

use crate::handlers::{create_recipe, delete_recipe, get_recipe, list_recipes, update_recipe};
use crate::state::AppState;
use axum::routing::get;
use axum::Router;

/// Builds the recipe API router over the given state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/recipes/{id}",
            get(get_recipe).patch(update_recipe).delete(delete_recipe),
        )
        .with_state(state)
}
