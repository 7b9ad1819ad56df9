#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use placestore::config::StoreConfig;
use placestore::repositories::RepositorySettings;
use placestore::store::{QueryOptions, RowSet, SqliteStore, StoreClient, StoreError, StoreResult, Value};
use placestore::{Category, Database, Location, Place};

/// Store client that records every statement before delegating.
pub struct CountingStore {
    inner: Arc<dyn StoreClient>,
    calls: AtomicUsize,
    statements: Mutex<Vec<String>>,
}

impl CountingStore {
    pub fn new(inner: Arc<dyn StoreClient>) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            statements: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }

    /// Number of recorded statements containing `fragment`.
    pub fn count_matching(&self, fragment: &str) -> usize {
        self.statements().iter().filter(|s| s.contains(fragment)).count()
    }
}

#[async_trait]
impl StoreClient for CountingStore {
    async fn execute(&self, query: &str, params: Vec<Value>, options: QueryOptions) -> StoreResult<RowSet> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.statements.lock().unwrap().push(query.to_string());
        self.inner.execute(query, params, options).await
    }
}

/// Store client that fails every statement containing `fragment`.
pub struct FailingStore {
    inner: Arc<dyn StoreClient>,
    fragment: String,
}

impl FailingStore {
    pub fn new(inner: Arc<dyn StoreClient>, fragment: &str) -> Self {
        Self {
            inner,
            fragment: fragment.to_string(),
        }
    }
}

#[async_trait]
impl StoreClient for FailingStore {
    async fn execute(&self, query: &str, params: Vec<Value>, options: QueryOptions) -> StoreResult<RowSet> {
        if query.contains(&self.fragment) {
            return Err(StoreError::Client(format!("rejected: {query}")));
        }
        self.inner.execute(query, params, options).await
    }
}

/// Fresh in-memory store with both tables created.
pub async fn memory_store() -> Arc<SqliteStore> {
    memory_store_with(StoreConfig::default()).await
}

pub async fn memory_store_with(config: StoreConfig) -> Arc<SqliteStore> {
    let store = SqliteStore::connect(&config).await.expect("in-memory store");
    store.ensure_schema().await.expect("schema");
    Arc::new(store)
}

/// Database over a fresh in-memory store, plus the counter wrapped around it.
pub async fn counted_database() -> (Database, Arc<CountingStore>) {
    let counting = Arc::new(CountingStore::new(memory_store().await));
    let db = Database::new(counting.clone(), RepositorySettings::default());
    (db, counting)
}

pub fn food() -> Category {
    Category::new("c1", "Food", "🍔")
}

pub fn cafe() -> Category {
    Category::new("c2", "Cafe", "☕")
}

pub fn place(id: &str, categories: Vec<Category>) -> Place {
    Place {
        id: id.to_string(),
        name: format!("Place {id}"),
        description: "Corner spot by the harbour".to_string(),
        url: format!("https://example.com/places/{id}"),
        tags: vec!["wifi".to_string(), "terrace".to_string()],
        categories,
        location: Location::new(
            Some(60.1675),
            Some(24.9522),
            true,
            "Pohjoisesplanadi 1",
            "Unioninkatu",
            "Helsinki",
            "Uusimaa",
            "00170",
            "Finland",
        ),
        price_level: Some(2),
        price_message: "Moderate".to_string(),
    }
}

/// Sort places by id so store ordering does not matter.
pub fn sorted(mut places: Vec<Place>) -> Vec<Place> {
    places.sort_by(|a, b| a.id.cmp(&b.id));
    places
}
