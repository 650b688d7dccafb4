//! Domain model for recipe records.
//!
//! # Responsibility
//! - Define the canonical data structures used by persistence and HTTP layers.
//! - Keep create/patch payload shapes explicit instead of untyped maps.
//!
//! # Invariants
//! - Every persisted record is identified by a stable integer `RecipeId`.
//! - A `NewRecipe` can only be built from a draft that carries all five
//!   required fields.

pub mod recipe;
