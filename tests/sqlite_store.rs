mod common;

use common::{memory_store, memory_store_with, place};
use placestore::config::StoreConfig;
use placestore::repositories::RepositorySettings;
use placestore::store::{QueryOptions, StoreClient, StoreError, Value};
use placestore::Database;

#[tokio::test]
async fn test_schema_creation_is_repeatable() {
    let store = memory_store().await;
    store.ensure_schema().await.unwrap();
    store.ensure_schema().await.unwrap();
}

#[tokio::test]
async fn test_connect_through_facade() {
    let db = Database::connect(&StoreConfig::default()).await.unwrap();
    assert!(db.places.list_all_ids().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_writes_return_no_rows() {
    let store = memory_store().await;
    let result = store
        .execute(
            "insert into Category (id, name, icon) values (?, ?, ?)",
            vec!["c1".into(), "Food".into(), "🍔".into()],
            QueryOptions::default(),
        )
        .await
        .unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_list_parameters_round_trip_as_json() {
    let store = memory_store().await;
    store
        .execute(
            "insert into Place (id, tags, categories) values (?, ?, ?)",
            vec![
                "p1".into(),
                Value::from(vec!["wifi", "quiet"]),
                Value::from(Vec::<String>::new()),
            ],
            QueryOptions::default(),
        )
        .await
        .unwrap();

    let row = store
        .execute("select * from Place where id = ?", vec!["p1".into()], QueryOptions::default())
        .await
        .unwrap()
        .first()
        .expect("row");

    assert_eq!(row.text_list("tags"), vec!["wifi", "quiet"]);
    assert!(row.text_list("categories").is_empty());
    assert_eq!(row.text("locationCity"), "");
}

#[tokio::test]
async fn test_in_list_selects_matching_rows() {
    let store = memory_store().await;
    for id in ["a", "b", "c"] {
        store
            .execute(
                "insert into Category (id, name, icon) values (?, ?, ?)",
                vec![id.into(), id.into(), "".into()],
                QueryOptions::default(),
            )
            .await
            .unwrap();
    }

    let result = store
        .execute(
            "select * from Category where id in ?",
            vec![Value::from(vec!["a", "c", "zzz"])],
            QueryOptions::default(),
        )
        .await
        .unwrap();

    let mut ids: Vec<String> = result.rows.iter().map(|row| row.text("id")).collect();
    ids.sort();
    assert_eq!(ids, vec!["a", "c"]);
}

#[tokio::test]
async fn test_page_size_applies_unless_unbounded() {
    let config = StoreConfig {
        page_size: 2,
        ..StoreConfig::default()
    };
    let store = memory_store_with(config).await;
    let db = Database::new(store.clone(), RepositorySettings::default());

    let places: Vec<_> = (0..5).map(|i| place(&format!("p{i}"), vec![])).collect();
    db.places.persist(places).await.unwrap();

    let first_page = store
        .execute("select id from Place", Vec::new(), QueryOptions::default())
        .await
        .unwrap();
    assert_eq!(first_page.len(), 2);

    let explicit = store
        .execute("select id from Place", Vec::new(), QueryOptions { fetch_size: Some(3) })
        .await
        .unwrap();
    assert_eq!(explicit.len(), 3);

    assert_eq!(db.places.list_all_ids().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_real_columns_keep_full_precision() {
    let store = memory_store().await;
    store
        .execute(
            "insert into Place (id, locationLatitude, locationLongitude, priceLevel) values (?, ?, ?, ?)",
            vec!["p1".into(), 60.1675f64.into(), (-24.9522f64).into(), 2i32.into()],
            QueryOptions::default(),
        )
        .await
        .unwrap();

    let row = store
        .execute("select * from Place where id = ?", vec!["p1".into()], QueryOptions::default())
        .await
        .unwrap()
        .first()
        .expect("row");

    assert_eq!(row.get("locationLatitude"), Some(&Value::Double(60.1675)));
    assert_eq!(row.float("locationLongitude"), Some(-24.9522));
    assert_eq!(row.get("priceLevel"), Some(&Value::Int(2)));
    assert_eq!(row.get("priceMessage"), Some(&Value::Null));
    assert_eq!(row.get("locationAccurate"), Some(&Value::Int(0)));
}

#[tokio::test]
async fn test_malformed_statement_is_store_error() {
    let store = memory_store().await;
    let result = store
        .execute("select * from Nowhere", Vec::new(), QueryOptions::default())
        .await;
    assert!(matches!(result, Err(StoreError::Database(_))));

    let result = store
        .execute("select * from Place where id = ?", Vec::new(), QueryOptions::default())
        .await;
    assert!(matches!(result, Err(StoreError::Query(_))));
}
