use serde::{Deserialize, Serialize};

use super::{Category, Location};

/// A place with its categories resolved into full objects.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub tags: Vec<String>,
    pub categories: Vec<Category>,
    pub location: Location,
    pub price_level: Option<i32>,
    pub price_message: String,
}

impl Place {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
        categories: Vec<Category>,
        url: impl Into<String>,
        location: Location,
        price_level: Option<i32>,
        price_message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            url: url.into(),
            tags,
            categories,
            location,
            price_level,
            price_message: price_message.into(),
        }
    }

    /// Ids of the referenced categories, in the order they are stored.
    pub fn category_ids(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.id.clone()).collect()
    }
}
