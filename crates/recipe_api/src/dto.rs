//! Wire-format response shapes.
//!
//! # Responsibility
//! - Define the exact JSON bodies of every endpoint, including which fields
//!   each projection exposes.
//!
//! # Invariants
//! - Create responses include timestamps; list/get projections omit them;
//!   the update projection omits the id as well. The asymmetry is part of
//!   the published contract.

use recipe_core::{Recipe, REQUIRED_FIELDS};
use serde::Serialize;

pub const CREATE_SUCCESS_MESSAGE: &str = "Recipe successfully created!";
pub const CREATE_FAILURE_MESSAGE: &str = "Recipe creation failed!";
pub const DETAIL_MESSAGE: &str = "Recipe details by id";
pub const UPDATE_SUCCESS_MESSAGE: &str = "Recipe successfully updated!";
pub const DELETE_SUCCESS_MESSAGE: &str = "Recipe successfully removed!";

/// List/get projection: id plus the five data fields, no timestamps.
#[derive(Debug, Serialize)]
pub struct RecipeSummary {
    pub id: i64,
    pub title: String,
    pub making_time: String,
    pub serves: String,
    pub ingredients: String,
    pub cost: i64,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title.clone(),
            making_time: recipe.making_time.clone(),
            serves: recipe.serves.clone(),
            ingredients: recipe.ingredients.clone(),
            cost: recipe.cost,
        }
    }
}

/// Update projection: the five data fields only.
#[derive(Debug, Serialize)]
pub struct RecipeFields {
    pub title: String,
    pub making_time: String,
    pub serves: String,
    pub ingredients: String,
    pub cost: i64,
}

impl From<&Recipe> for RecipeFields {
    fn from(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            making_time: recipe.making_time.clone(),
            serves: recipe.serves.clone(),
            ingredients: recipe.ingredients.clone(),
            cost: recipe.cost,
        }
    }
}

/// Create outcome. Both variants ship with HTTP 200; the body alone tells
/// success from validation failure.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CreateRecipeResponse {
    Created {
        message: &'static str,
        /// Single-element list, full record including id and timestamps.
        recipe: Vec<Recipe>,
    },
    Rejected {
        message: &'static str,
        required: &'static str,
    },
}

impl CreateRecipeResponse {
    pub fn created(recipe: Recipe) -> Self {
        Self::Created {
            message: CREATE_SUCCESS_MESSAGE,
            recipe: vec![recipe],
        }
    }

    pub fn rejected() -> Self {
        Self::Rejected {
            message: CREATE_FAILURE_MESSAGE,
            required: REQUIRED_FIELDS,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<RecipeSummary>,
}

#[derive(Debug, Serialize)]
pub struct RecipeDetailResponse {
    pub message: &'static str,
    /// Single-element list, mirroring the create response shape.
    pub recipe: Vec<RecipeSummary>,
}

#[derive(Debug, Serialize)]
pub struct RecipeUpdateResponse {
    pub message: &'static str,
    pub recipe: RecipeFields,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
