//! Core domain logic for the recipe API.
//! This crate is the single source of truth for recipe persistence invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::recipe::{
    NewRecipe, Recipe, RecipeDraft, RecipeId, RecipePatch, RecipeValidationError, REQUIRED_FIELDS,
};
pub use repo::recipe_repo::{RecipeRepository, RepoError, RepoResult, SqliteRecipeRepository};
pub use service::recipe_service::RecipeService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
