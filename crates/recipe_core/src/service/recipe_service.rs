//! Recipe use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::recipe::{NewRecipe, Recipe, RecipeDraft, RecipeId, RecipePatch};
use crate::repo::recipe_repo::{RecipeRepository, RepoResult};

/// Use-case service wrapper for recipe CRUD operations.
pub struct RecipeService<R: RecipeRepository> {
    repo: R,
}

impl<R: RecipeRepository> RecipeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates a raw draft and persists it when complete.
    ///
    /// # Contract
    /// - A draft missing any required field yields
    ///   `RepoError::Validation(MissingFields)` and writes nothing.
    /// - Returns the stored record, including id and timestamps.
    pub fn create_recipe(&self, draft: RecipeDraft) -> RepoResult<Recipe> {
        let new = draft.into_new()?;
        self.create_recipe_checked(&new)
    }

    /// Persists an already-validated create input.
    pub fn create_recipe_checked(&self, new: &NewRecipe) -> RepoResult<Recipe> {
        self.repo.create_recipe(new)
    }

    /// Lists all recipes in insertion order.
    pub fn list_recipes(&self) -> RepoResult<Vec<Recipe>> {
        self.repo.list_recipes()
    }

    /// Gets one recipe by id.
    pub fn get_recipe(&self, id: RecipeId) -> RepoResult<Option<Recipe>> {
        self.repo.get_recipe(id)
    }

    /// Applies a partial update and returns the post-update record.
    ///
    /// Returns repository-level not-found errors unchanged.
    pub fn update_recipe(&self, id: RecipeId, patch: &RecipePatch) -> RepoResult<Recipe> {
        self.repo.update_recipe(id, patch)
    }

    /// Permanently deletes a recipe by id.
    pub fn delete_recipe(&self, id: RecipeId) -> RepoResult<()> {
        self.repo.delete_recipe(id)
    }
}
