//! Place repository for store operations.
//!
//! Place rows reference categories by id only. Writes persist the referenced
//! categories first; reads resolve the ids back into category objects with
//! one batched category lookup.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use log::{debug, info, warn};

use super::{fan_out, mapping, CategoryRepository, RepositorySettings};
use crate::constants::{COL_ID, LOG_UNRESOLVED_CATEGORY, PLACE_TABLE};
use crate::model::{Category, Place};
use crate::store::{QueryOptions, Row, StoreClient, StoreResult, Value};

/// Repository for place rows and their category references.
#[derive(Clone)]
pub struct PlaceRepository {
    client: Arc<dyn StoreClient>,
    categories: CategoryRepository,
    settings: RepositorySettings,
}

impl PlaceRepository {
    pub fn new(client: Arc<dyn StoreClient>, categories: CategoryRepository, settings: RepositorySettings) -> Self {
        Self {
            client,
            categories,
            settings,
        }
    }

    /// Insert a new place row.
    pub async fn create(&self, place: &Place) -> StoreResult<()> {
        let fields = mapping::place_fields(place);
        let columns: Vec<&str> = fields.iter().map(|(column, _)| *column).collect();
        let placeholders = vec!["?"; columns.len()].join(", ");
        let query = format!(
            "insert into {PLACE_TABLE} ({}) values ({placeholders})",
            columns.join(", ")
        );
        let params = fields.into_iter().map(|(_, value)| value).collect();

        self.client.execute(&query, params, QueryOptions::default()).await?;
        Ok(())
    }

    /// Overwrite every column of an existing place row.
    pub async fn update(&self, place: &Place) -> StoreResult<()> {
        let (assignments, mut params): (Vec<String>, Vec<Value>) = mapping::place_fields(place)
            .into_iter()
            .filter(|(column, _)| *column != COL_ID)
            .map(|(column, value)| (format!("{column} = ?"), value))
            .unzip();
        let query = format!("update {PLACE_TABLE} set {} where id = ?", assignments.join(", "));
        params.push(Value::from(&place.id));

        self.client.execute(&query, params, QueryOptions::default()).await?;
        Ok(())
    }

    /// Get the row for `id`, or `None` if there is none.
    pub async fn find_row(&self, id: &str) -> StoreResult<Option<Row>> {
        let query = format!("select * from {PLACE_TABLE} WHERE id = ?");
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

        let query = format!("select * from {PLACE_TABLE} WHERE id in ?");
        let result = self
            .client
            .execute(&query, vec![ids.to_vec().into()], QueryOptions::unbounded())
            .await?;
        Ok(result.rows)
    }

    /// Ids of every stored place, fetched as a single page.
    pub async fn list_all_ids(&self) -> StoreResult<Vec<String>> {
        let query = format!("select id from {PLACE_TABLE}");
        let result = self
            .client
            .execute(&query, Vec::new(), QueryOptions::unbounded())
            .await?;
        Ok(result.rows.iter().map(|row| row.text(COL_ID)).collect())
    }

    /// Load places by id with their categories resolved.
    ///
    /// A category id that no longer resolves is left out of the place's
    /// `categories`; the load itself does not fail.
    pub async fn load(&self, ids: &[String]) -> StoreResult<Vec<Place>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = self.list_rows(ids).await?;

        let mut seen = HashSet::new();
        let category_ids: Vec<String> = rows
            .iter()
            .flat_map(mapping::category_ids_from_row)
            .filter(|id| seen.insert(id.clone()))
            .collect();
        debug!("Resolving {} categories for {} places", category_ids.len(), rows.len());

        let lookup: HashMap<String, Category> = self
            .categories
            .load(&category_ids)
            .await?
            .into_iter()
            .map(|category| (category.id.clone(), category))
            .collect();

        rows.iter()
            .map(|row| {
                let categories = mapping::category_ids_from_row(row)
                    .into_iter()
                    .filter_map(|id| {
                        let category = lookup.get(&id).cloned();
                        if category.is_none() {
                            warn!("{}: '{}' on place '{}'", LOG_UNRESOLVED_CATEGORY, id, row.text(COL_ID));
                        }
                        category
                    })
                    .collect();
                mapping::place_from_row(row, categories)
            })
            .collect()
    }

    /// Create or update every place, after persisting the categories they reference.
    ///
    /// Categories shared between places are written once. Returns the input
    /// unchanged once all writes succeed.
    pub async fn persist(&self, places: Vec<Place>) -> StoreResult<Vec<Place>> {
        if places.is_empty() {
            return Ok(places);
        }

        let mut seen = HashSet::new();
        let categories: Vec<Category> = places
            .iter()
            .flat_map(|place| place.categories.iter())
            .filter(|category| seen.insert(category.id.clone()))
            .cloned()
            .collect();
        self.categories.persist(categories).await?;

        info!("Persisting {} places", places.len());
        fan_out(&places, self.settings.max_concurrency, |place| self.upsert(place)).await?;
        Ok(places)
    }

    async fn upsert(&self, place: &Place) -> StoreResult<()> {
        if self.find_row(&place.id).await?.is_some() {
            debug!("Updating place '{}'", place.id);
            self.update(place).await
        } else {
            debug!("Creating place '{}'", place.id);
            self.create(place).await
        }
    }
}
