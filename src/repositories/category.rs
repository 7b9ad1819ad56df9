//! Category repository for store operations.

use std::sync::Arc;

use log::{debug, info};

use super::{fan_out, mapping, RepositorySettings};
use crate::constants::CATEGORY_TABLE;
use crate::model::Category;
use crate::store::{QueryOptions, Row, StoreClient, StoreResult};

/// Repository for standalone category rows.
#[derive(Clone)]
pub struct CategoryRepository {
    client: Arc<dyn StoreClient>,
    settings: RepositorySettings,
}

impl CategoryRepository {
    pub fn new(client: Arc<dyn StoreClient>, settings: RepositorySettings) -> Self {
        Self { client, settings }
    }

    /// Insert a new category row.
    pub async fn create(&self, id: &str, name: &str, icon: &str) -> StoreResult<()> {
        let query = format!("insert into {CATEGORY_TABLE} (id, name, icon) values (?, ?, ?)");
        self.client
            .execute(&query, vec![id.into(), name.into(), icon.into()], QueryOptions::default())
            .await?;
        Ok(())
    }

    /// Get the row for `id`, or `None` if there is none.
    pub async fn find_row(&self, id: &str) -> StoreResult<Option<Row>> {
        let query = format!("select * from {CATEGORY_TABLE} WHERE id = ?");
        let result = self
            .client
            .execute(&query, vec![id.into()], QueryOptions::default())
            .await?;
        Ok(result.first())
    }

    /// Get the rows for a set of ids, never cut to a page. Empty input never reaches the store.
    pub async fn list_rows(&self, ids: &[String]) -> StoreResult<Vec<Row>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!("select * from {CATEGORY_TABLE} WHERE id in ?");
        let result = self
            .client
            .execute(&query, vec![ids.to_vec().into()], QueryOptions::unbounded())
            .await?;
        Ok(result.rows)
    }

    /// Overwrite name and icon of an existing category.
    pub async fn update(&self, id: &str, name: &str, icon: &str) -> StoreResult<()> {
        let query = format!("update {CATEGORY_TABLE} set name = ?, icon = ? where id = ?");
        self.client
            .execute(&query, vec![name.into(), icon.into(), id.into()], QueryOptions::default())
            .await?;
        Ok(())
    }

    /// Load categories by id. Duplicate ids are not collapsed.
    pub async fn load(&self, ids: &[String]) -> StoreResult<Vec<Category>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.list_rows(ids)
            .await?
            .iter()
            .map(mapping::category_from_row)
            .collect()
    }

    /// Create or update every category, concurrently.
    ///
    /// Returns the input unchanged once all writes succeed; the first failure
    /// is returned as is.
    pub async fn persist(&self, categories: Vec<Category>) -> StoreResult<Vec<Category>> {
        if categories.is_empty() {
            return Ok(categories);
        }

        info!("Persisting {} categories", categories.len());
        fan_out(&categories, self.settings.max_concurrency, |category| self.upsert(category)).await?;
        Ok(categories)
    }

    async fn upsert(&self, category: &Category) -> StoreResult<()> {
        if self.find_row(&category.id).await?.is_some() {
            debug!("Updating category '{}'", category.id);
            self.update(&category.id, &category.name, &category.icon).await
        } else {
            debug!("Creating category '{}'", category.id);
            self.create(&category.id, &category.name, &category.icon).await
        }
    }
}
