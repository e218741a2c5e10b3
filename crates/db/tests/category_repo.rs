//! Integration tests for `CategoryRepo` against a real database.

use opendata_db::models::category::CategoryInput;
use opendata_db::repositories::CategoryRepo;
use sqlx::PgPool;

fn category(name: &str, parent_category_id: Option<i64>) -> CategoryInput {
    CategoryInput {
        name: name.to_string(),
        parent_category_id,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_without_parent(pool: PgPool) {
    let created = CategoryRepo::create(&pool, &category("books", None))
        .await
        .unwrap();
    assert!(created.category_id > 0);
    assert_eq!(created.name, "books");
    assert_eq!(created.parent_category_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_parent(pool: PgPool) {
    let parent = CategoryRepo::create(&pool, &category("books", None))
        .await
        .unwrap();
    let child = CategoryRepo::create(&pool, &category("poetry", Some(parent.category_id)))
        .await
        .unwrap();
    assert_eq!(child.parent_category_id, Some(parent.category_id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_parent_reference_is_not_checked(pool: PgPool) {
    let orphan = CategoryRepo::create(&pool, &category("orphan", Some(424_242)))
        .await
        .unwrap();
    assert_eq!(orphan.parent_category_id, Some(424_242));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_names_are_allowed(pool: PgPool) {
    CategoryRepo::create(&pool, &category("misc", None))
        .await
        .unwrap();
    CategoryRepo::create(&pool, &category("misc", None))
        .await
        .unwrap();
    assert_eq!(CategoryRepo::list(&pool).await.unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_all_fields(pool: PgPool) {
    let parent = CategoryRepo::create(&pool, &category("root", None))
        .await
        .unwrap();
    let child = CategoryRepo::create(&pool, &category("leaf", Some(parent.category_id)))
        .await
        .unwrap();

    let updated = CategoryRepo::update(&pool, child.category_id, &category("branch", None))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "branch");
    assert_eq!(updated.parent_category_id, None);

    let categories = CategoryRepo::list(&pool).await.unwrap();
    assert_eq!(categories, vec![parent, updated]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_returns_none(pool: PgPool) {
    let result = CategoryRepo::update(&pool, 99, &category("nothing", None))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_leaves_children_untouched(pool: PgPool) {
    let parent = CategoryRepo::create(&pool, &category("root", None))
        .await
        .unwrap();
    let child = CategoryRepo::create(&pool, &category("leaf", Some(parent.category_id)))
        .await
        .unwrap();

    assert!(CategoryRepo::delete(&pool, parent.category_id).await.unwrap());
    assert!(!CategoryRepo::delete(&pool, parent.category_id).await.unwrap());

    let categories = CategoryRepo::list(&pool).await.unwrap();
    assert_eq!(categories, vec![child]);
}
