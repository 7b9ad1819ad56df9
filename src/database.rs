//! Composition root: one store connection, both repositories.

use std::sync::Arc;

use log::info;

use crate::config::StoreConfig;
use crate::repositories::{CategoryRepository, PlaceRepository, RepositorySettings};
use crate::store::{SqliteStore, StoreClient, StoreResult};

/// Entry point for persisting and loading places and categories.
#[derive(Clone)]
pub struct Database {
    pub categories: CategoryRepository,
    pub places: PlaceRepository,
}

impl Database {
    /// Wire both repositories to `client`.
    pub fn new(client: Arc<dyn StoreClient>, settings: RepositorySettings) -> Self {
        let categories = CategoryRepository::new(Arc::clone(&client), settings);
        let places = PlaceRepository::new(client, categories.clone(), settings);
        Self { categories, places }
    }

    /// Open the SQLite store described by `config` and make sure its tables exist.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let store = SqliteStore::connect(config).await?;
        store.ensure_schema().await?;
        info!("Connected to {}", config.database_url);
        Ok(Self::new(Arc::new(store), RepositorySettings::from(config)))
    }
}
