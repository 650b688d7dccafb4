//! Request handlers for the five recipe endpoints.
//!
//! # Responsibility
//! - Parse extractor input, delegate to `RecipeService`, serialize the
//!   contract response shapes.
//!
//! # Invariants
//! - A create payload missing required fields yields HTTP 200 with the
//!   failure body, and writes nothing.
//! - Unknown ids on get/update/delete yield a bare 404.

use crate::dto::{
    CreateRecipeResponse, MessageResponse, RecipeDetailResponse, RecipeListResponse,
    RecipeSummary, RecipeUpdateResponse, DELETE_SUCCESS_MESSAGE, DETAIL_MESSAGE,
    UPDATE_SUCCESS_MESSAGE,
};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use log::{info, warn};
use recipe_core::{RecipeDraft, RecipeId, RecipePatch, RecipeService, SqliteRecipeRepository};

/// POST /recipes
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(draft): Json<RecipeDraft>,
) -> Result<Json<CreateRecipeResponse>, ApiError> {
    let new = match draft.into_new() {
        Ok(new) => new,
        Err(err) => {
            warn!("event=recipe_create module=http status=rejected error={err}");
            return Ok(Json(CreateRecipeResponse::rejected()));
        }
    };

    let conn = state.lock_db().await;
    let service = RecipeService::new(SqliteRecipeRepository::new(&conn));
    let recipe = service.create_recipe_checked(&new)?;

    info!("event=recipe_create module=http status=ok id={}", recipe.id);
    Ok(Json(CreateRecipeResponse::created(recipe)))
}

/// GET /recipes
pub async fn list_recipes(
    State(state): State<AppState>,
) -> Result<Json<RecipeListResponse>, ApiError> {
    let conn = state.lock_db().await;
    let service = RecipeService::new(SqliteRecipeRepository::new(&conn));
    let recipes = service.list_recipes()?;

    info!(
        "event=recipe_list module=http status=ok count={}",
        recipes.len()
    );
    Ok(Json(RecipeListResponse {
        recipes: recipes.iter().map(RecipeSummary::from).collect(),
    }))
}

/// GET /recipes/{id}
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<RecipeId>,
) -> Result<Json<RecipeDetailResponse>, ApiError> {
    let conn = state.lock_db().await;
    let service = RecipeService::new(SqliteRecipeRepository::new(&conn));
    let recipe = service.get_recipe(id)?.ok_or(ApiError::NotFound)?;

    info!("event=recipe_get module=http status=ok id={id}");
    Ok(Json(RecipeDetailResponse {
        message: DETAIL_MESSAGE,
        recipe: vec![RecipeSummary::from(&recipe)],
    }))
}

/// PATCH /recipes/{id}
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<RecipeId>,
    Json(patch): Json<RecipePatch>,
) -> Result<Json<RecipeUpdateResponse>, ApiError> {
    let conn = state.lock_db().await;
    let service = RecipeService::new(SqliteRecipeRepository::new(&conn));
    let recipe = service.update_recipe(id, &patch)?;

    info!(
        "event=recipe_update module=http status=ok id={id} empty_patch={}",
        patch.is_empty()
    );
    Ok(Json(RecipeUpdateResponse {
        message: UPDATE_SUCCESS_MESSAGE,
        recipe: (&recipe).into(),
    }))
}

/// DELETE /recipes/{id}
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<RecipeId>,
) -> Result<Json<MessageResponse>, ApiError> {
    let conn = state.lock_db().await;
    let service = RecipeService::new(SqliteRecipeRepository::new(&conn));
    service.delete_recipe(id)?;

    info!("event=recipe_delete module=http status=ok id={id}");
    Ok(Json(MessageResponse {
        message: DELETE_SUCCESS_MESSAGE,
    }))
}
