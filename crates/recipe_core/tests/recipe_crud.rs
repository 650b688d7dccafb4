use recipe_core::db::open_db_in_memory;
use recipe_core::{
    NewRecipe, RecipeDraft, RecipePatch, RecipeRepository, RecipeService, RepoError,
    SqliteRecipeRepository,
};

fn sample_recipe() -> NewRecipe {
    NewRecipe {
        title: "Chicken Curry".to_string(),
        making_time: "45 min".to_string(),
        serves: "4 people".to_string(),
        ingredients: "onion, chicken, seasoning".to_string(),
        cost: 1000,
    }
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecipeRepository::new(&conn);

    let created = repo.create_recipe(&sample_recipe()).unwrap();
    assert!(created.id > 0);
    assert_eq!(created.title, "Chicken Curry");
    assert_eq!(created.making_time, "45 min");
    assert_eq!(created.serves, "4 people");
    assert_eq!(created.ingredients, "onion, chicken, seasoning");
    assert_eq!(created.cost, 1000);

    let loaded = repo.get_recipe(created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn create_sets_equal_timestamps() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecipeRepository::new(&conn);

    let created = repo.create_recipe(&sample_recipe()).unwrap();
    assert_eq!(created.created_at, created.updated_at);
    // YYYY-MM-DD HH:MM:SS
    assert_eq!(created.created_at.len(), 19);
    assert_eq!(created.created_at.as_bytes()[10], b' ');
}

#[test]
fn create_assigns_sequential_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecipeRepository::new(&conn);

    let first = repo.create_recipe(&sample_recipe()).unwrap();
    let second = repo.create_recipe(&sample_recipe()).unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[test]
fn list_returns_rows_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecipeRepository::new(&conn);

    let mut tea = sample_recipe();
    tea.title = "Tea".to_string();
    let mut soup = sample_recipe();
    soup.title = "Soup".to_string();

    repo.create_recipe(&tea).unwrap();
    repo.create_recipe(&soup).unwrap();

    let all = repo.list_recipes().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].title, "Tea");
    assert_eq!(all[1].title, "Soup");
}

#[test]
fn list_on_empty_table_returns_empty_vec() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecipeRepository::new(&conn);

    assert!(repo.list_recipes().unwrap().is_empty());
}

#[test]
fn get_missing_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecipeRepository::new(&conn);

    assert!(repo.get_recipe(42).unwrap().is_none());
}

#[test]
fn update_partial_patch_changes_only_specified_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecipeRepository::new(&conn);

    let created = repo.create_recipe(&sample_recipe()).unwrap();

    let patch = RecipePatch {
        cost: Some(700),
        ..RecipePatch::default()
    };
    let updated = repo.update_recipe(created.id, &patch).unwrap();

    assert_eq!(updated.cost, 700);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.making_time, created.making_time);
    assert_eq!(updated.serves, created.serves);
    assert_eq!(updated.ingredients, created.ingredients);
    assert_eq!(updated.created_at, created.created_at);
    // Second-resolution timestamps: the refreshed value may equal the old
    // one, but it can never move backwards.
    assert!(updated.updated_at >= created.updated_at);
}

#[test]
fn update_with_empty_patch_still_touches_updated_at() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecipeRepository::new(&conn);

    let created = repo.create_recipe(&sample_recipe()).unwrap();
    let updated = repo
        .update_recipe(created.id, &RecipePatch::default())
        .unwrap();

    assert_eq!(updated.title, created.title);
    assert_eq!(updated.cost, created.cost);
    assert!(updated.updated_at >= created.updated_at);
}

#[test]
fn update_not_found_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecipeRepository::new(&conn);

    let err = repo.update_recipe(9, &RecipePatch::default()).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(9)));
}

#[test]
fn delete_removes_row_permanently() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecipeRepository::new(&conn);

    let created = repo.create_recipe(&sample_recipe()).unwrap();
    repo.delete_recipe(created.id).unwrap();

    assert!(repo.get_recipe(created.id).unwrap().is_none());
    let err = repo.delete_recipe(created.id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == created.id));
}

#[test]
fn delete_not_found_leaves_storage_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecipeRepository::new(&conn);

    repo.create_recipe(&sample_recipe()).unwrap();
    let err = repo.delete_recipe(999).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(999)));
    assert_eq!(repo.list_recipes().unwrap().len(), 1);
}

#[test]
fn service_rejects_incomplete_draft_without_writing() {
    let conn = open_db_in_memory().unwrap();
    let service = RecipeService::new(SqliteRecipeRepository::new(&conn));

    let draft = RecipeDraft {
        title: Some("Tea".to_string()),
        ..RecipeDraft::default()
    };
    let err = service.create_recipe(draft).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(service.list_recipes().unwrap().is_empty());
}

#[test]
fn service_persists_complete_draft() {
    let conn = open_db_in_memory().unwrap();
    let service = RecipeService::new(SqliteRecipeRepository::new(&conn));

    let draft = RecipeDraft {
        title: Some("Tea".to_string()),
        making_time: Some("5 min".to_string()),
        serves: Some("1".to_string()),
        ingredients: Some("tea, water".to_string()),
        cost: Some(5),
    };
    let created = service.create_recipe(draft).unwrap();
    assert_eq!(created.title, "Tea");
    assert_eq!(created.cost, 5);

    let listed = service.list_recipes().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
}
