//! Recipe domain model.
//!
//! # Responsibility
//! - Define the canonical persisted record and its input shapes.
//! - Enforce required-field presence before anything reaches storage.
//!
//! # Invariants
//! - `id` is assigned by storage and never reused.
//! - `created_at` is written once; `updated_at` moves forward on mutation.
//! - A `NewRecipe` always carries all five required fields.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a persisted recipe row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecipeId = i64;

/// Canonical list of fields a create payload must carry, in response order.
pub const REQUIRED_FIELDS: &str = "title, making_time, serves, ingredients, cost";

/// One persisted recipe row, including storage-assigned fields.
///
/// Timestamps are kept as preformatted `YYYY-MM-DD HH:MM:SS` strings; storage
/// writes them and nothing else ever does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub making_time: String,
    pub serves: String,
    pub ingredients: String,
    pub cost: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Validated input for creating a recipe. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub title: String,
    pub making_time: String,
    pub serves: String,
    pub ingredients: String,
    pub cost: i64,
}

/// Raw create payload as received over the wire.
///
/// Every field is optional so presence can be checked explicitly; conversion
/// into [`NewRecipe`] is the only way forward to persistence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeDraft {
    pub title: Option<String>,
    pub making_time: Option<String>,
    pub serves: Option<String>,
    pub ingredients: Option<String>,
    pub cost: Option<i64>,
}

impl RecipeDraft {
    /// Converts the draft into a validated [`NewRecipe`].
    ///
    /// # Errors
    /// - [`RecipeValidationError::MissingFields`] when any required field is
    ///   absent. The error carries the full canonical field list, matching
    ///   the wire contract for create failures.
    pub fn into_new(self) -> Result<NewRecipe, RecipeValidationError> {
        match (
            self.title,
            self.making_time,
            self.serves,
            self.ingredients,
            self.cost,
        ) {
            (Some(title), Some(making_time), Some(serves), Some(ingredients), Some(cost)) => {
                Ok(NewRecipe {
                    title,
                    making_time,
                    serves,
                    ingredients,
                    cost,
                })
            }
            _ => Err(RecipeValidationError::MissingFields),
        }
    }
}

/// Partial update payload. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub making_time: Option<String>,
    pub serves: Option<String>,
    pub ingredients: Option<String>,
    pub cost: Option<i64>,
}

impl RecipePatch {
    /// Returns whether the patch carries no recognized fields.
    ///
    /// An empty patch is still a valid update: storage refreshes
    /// `updated_at` regardless.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.making_time.is_none()
            && self.serves.is_none()
            && self.ingredients.is_none()
            && self.cost.is_none()
    }

    /// Merges present fields over the stored record. Plain field-by-field
    /// merge; timestamps are storage's job.
    pub fn apply_to(&self, recipe: &mut Recipe) {
        if let Some(title) = &self.title {
            recipe.title = title.clone();
        }
        if let Some(making_time) = &self.making_time {
            recipe.making_time = making_time.clone();
        }
        if let Some(serves) = &self.serves {
            recipe.serves = serves.clone();
        }
        if let Some(ingredients) = &self.ingredients {
            recipe.ingredients = ingredients.clone();
        }
        if let Some(cost) = self.cost {
            recipe.cost = cost;
        }
    }
}

/// Validation failure for recipe input shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeValidationError {
    /// One or more of the five required create fields is absent.
    MissingFields,
}

impl Display for RecipeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields => {
                write!(f, "missing required recipe fields: {REQUIRED_FIELDS}")
            }
        }
    }
}

impl Error for RecipeValidationError {}
