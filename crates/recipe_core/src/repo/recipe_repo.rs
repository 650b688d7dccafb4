//! Recipe repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `recipes` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `created_at` and `updated_at` are written by storage, in the same
//!   statement at creation time.
//! - Updates rewrite `updated_at` even when the patch carries no fields.
//! - Deletes are hard deletes; a removed id is gone for good.

use crate::db::DbError;
use crate::model::recipe::{NewRecipe, Recipe, RecipeId, RecipePatch, RecipeValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const RECIPE_SELECT_SQL: &str = "SELECT
    id,
    title,
    making_time,
    serves,
    ingredients,
    cost,
    created_at,
    updated_at
FROM recipes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for recipe persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(RecipeValidationError),
    Db(DbError),
    NotFound(RecipeId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "recipe not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<RecipeValidationError> for RepoError {
    fn from(value: RecipeValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for recipe CRUD operations.
pub trait RecipeRepository {
    /// Persists a new recipe and returns the stored row, including the
    /// storage-assigned id and timestamps.
    fn create_recipe(&self, new: &NewRecipe) -> RepoResult<Recipe>;
    /// Returns all recipes in insertion order.
    fn list_recipes(&self) -> RepoResult<Vec<Recipe>>;
    /// Returns one recipe by id, or `None` when no such row exists.
    fn get_recipe(&self, id: RecipeId) -> RepoResult<Option<Recipe>>;
    /// Merges the patch over the stored row and returns the post-update
    /// state. `updated_at` is refreshed even for an empty patch.
    fn update_recipe(&self, id: RecipeId, patch: &RecipePatch) -> RepoResult<Recipe>;
    /// Permanently removes a recipe.
    fn delete_recipe(&self, id: RecipeId) -> RepoResult<()>;
}

/// SQLite-backed recipe repository over a borrowed connection.
pub struct SqliteRecipeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecipeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn fetch(&self, id: RecipeId) -> RepoResult<Recipe> {
        let recipe = self.conn.query_row(
            &format!("{RECIPE_SELECT_SQL} WHERE id = ?1;"),
            [id],
            parse_recipe_row,
        )?;
        Ok(recipe)
    }
}

impl RecipeRepository for SqliteRecipeRepository<'_> {
    fn create_recipe(&self, new: &NewRecipe) -> RepoResult<Recipe> {
        // Timestamps come from the column defaults, so both evaluate within
        // this one statement and start out equal.
        self.conn.execute(
            "INSERT INTO recipes (title, making_time, serves, ingredients, cost)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                new.title.as_str(),
                new.making_time.as_str(),
                new.serves.as_str(),
                new.ingredients.as_str(),
                new.cost,
            ],
        )?;

        self.fetch(self.conn.last_insert_rowid())
    }

    fn list_recipes(&self) -> RepoResult<Vec<Recipe>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RECIPE_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut recipes = Vec::new();
        while let Some(row) = rows.next()? {
            recipes.push(parse_recipe_row(row)?);
        }

        Ok(recipes)
    }

    fn get_recipe(&self, id: RecipeId) -> RepoResult<Option<Recipe>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RECIPE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_recipe_row(row)?));
        }

        Ok(None)
    }

    fn update_recipe(&self, id: RecipeId, patch: &RecipePatch) -> RepoResult<Recipe> {
        let mut recipe = self.get_recipe(id)?.ok_or(RepoError::NotFound(id))?;
        patch.apply_to(&mut recipe);

        self.conn.execute(
            "UPDATE recipes
             SET
                title = ?1,
                making_time = ?2,
                serves = ?3,
                ingredients = ?4,
                cost = ?5,
                updated_at = strftime('%Y-%m-%d %H:%M:%S', 'now')
             WHERE id = ?6;",
            params![
                recipe.title.as_str(),
                recipe.making_time.as_str(),
                recipe.serves.as_str(),
                recipe.ingredients.as_str(),
                recipe.cost,
                id,
            ],
        )?;

        self.fetch(id)
    }

    fn delete_recipe(&self, id: RecipeId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM recipes WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_recipe_row(row: &Row<'_>) -> rusqlite::Result<Recipe> {
    Ok(Recipe {
        id: row.get("id")?,
        title: row.get("title")?,
        making_time: row.get("making_time")?,
        serves: row.get("serves")?,
        ingredients: row.get("ingredients")?,
        cost: row.get("cost")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
