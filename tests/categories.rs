mod common;

use std::sync::Arc;

use common::{counted_database, food, memory_store, memory_store_with, CountingStore, FailingStore};
use placestore::config::StoreConfig;
use placestore::repositories::RepositorySettings;
use placestore::{Category, Database, StoreError};

#[tokio::test]
async fn test_create_find_update_scenario() {
    let (db, _) = counted_database().await;

    db.categories.create("c1", "Food", "🍔").await.unwrap();
    let row = db.categories.find_row("c1").await.unwrap().expect("row for c1");
    assert_eq!(row.text("name"), "Food");

    db.categories.update("c1", "Food & Drink", "🍔").await.unwrap();
    let row = db.categories.find_row("c1").await.unwrap().expect("row for c1");
    assert_eq!(row.text("name"), "Food & Drink");
    assert_eq!(row.text("icon"), "🍔");
}

#[tokio::test]
async fn test_find_row_missing_is_none() {
    let (db, _) = counted_database().await;
    assert!(db.categories.find_row("nope").await.unwrap().is_none());
}

#[tokio::test]
async fn test_persist_new_category_then_load() {
    let (db, _) = counted_database().await;
    let category = Category::new("fresh", "Bakery", "🥐");

    let persisted = db.categories.persist(vec![category.clone()]).await.unwrap();
    assert_eq!(persisted, vec![category.clone()]);

    let loaded = db.categories.load(&["fresh".to_string()]).await.unwrap();
    assert_eq!(loaded, vec![category]);
}

#[tokio::test]
async fn test_persist_overwrites_existing_category() {
    let (db, _) = counted_database().await;
    db.categories.persist(vec![food()]).await.unwrap();

    let renamed = Category::new("c1", "Restaurants", "🍽️");
    db.categories.persist(vec![renamed.clone()]).await.unwrap();

    let loaded = db.categories.load(&["c1".to_string()]).await.unwrap();
    assert_eq!(loaded, vec![renamed]);
}

#[tokio::test]
async fn test_empty_input_never_touches_store() {
    let (db, counter) = counted_database().await;

    assert!(db.categories.load(&[]).await.unwrap().is_empty());
    assert!(db.categories.persist(Vec::new()).await.unwrap().is_empty());
    assert!(db.categories.list_rows(&[]).await.unwrap().is_empty());

    assert_eq!(counter.calls(), 0);
}

#[tokio::test]
async fn test_persist_probes_then_writes_each_category() {
    let (db, counter) = counted_database().await;
    db.categories.create("c1", "Food", "🍔").await.unwrap();

    let categories = vec![
        Category::new("c1", "Food", "🍕"),
        Category::new("c2", "Cafe", "☕"),
        Category::new("c3", "Bar", "🍺"),
    ];
    db.categories.persist(categories).await.unwrap();

    // one create before, then a probe plus one write per category
    assert_eq!(counter.calls(), 1 + 3 * 2);
    assert_eq!(counter.count_matching("update Category"), 1);
    assert_eq!(counter.count_matching("insert into Category"), 3);
}

#[tokio::test]
async fn test_load_missing_ids_returns_only_found() {
    let (db, _) = counted_database().await;
    db.categories.persist(vec![food()]).await.unwrap();

    let loaded = db
        .categories
        .load(&["c1".to_string(), "ghost".to_string()])
        .await
        .unwrap();
    assert_eq!(loaded, vec![food()]);
}

#[tokio::test]
async fn test_create_duplicate_is_rejected() {
    let (db, _) = counted_database().await;
    db.categories.create("c1", "Food", "🍔").await.unwrap();

    let result = db.categories.create("c1", "Food again", "🍔").await;
    assert!(matches!(result, Err(StoreError::Database(_))));
}

#[tokio::test]
async fn test_persist_propagates_store_error() {
    let store = memory_store().await;
    let failing = Arc::new(FailingStore::new(store, "insert into Category"));
    let counter = Arc::new(CountingStore::new(failing));
    let db = Database::new(counter.clone(), RepositorySettings { max_concurrency: 0 });

    let result = db
        .categories
        .persist(vec![food(), Category::new("c2", "Cafe", "☕")])
        .await;

    assert!(matches!(result, Err(StoreError::Client(_))));
}

#[tokio::test]
async fn test_batch_load_is_not_cut_to_page_size() {
    let config = StoreConfig {
        page_size: 3,
        ..StoreConfig::default()
    };
    let db = Database::new(memory_store_with(config).await, RepositorySettings::default());
    let categories: Vec<Category> = (0..5)
        .map(|i| Category::new(&format!("c{i}"), &format!("Category {i}"), "📍"))
        .collect();
    db.categories.persist(categories.clone()).await.unwrap();

    let ids: Vec<String> = categories.iter().map(|c| c.id.clone()).collect();
    let mut loaded = db.categories.load(&ids).await.unwrap();
    loaded.sort_by(|a, b| a.id.cmp(&b.id));

    assert_eq!(loaded, categories);
}
