//! Row ↔ object conventions shared by the repositories.
//!
//! A place row carries its location as flattened `location*` columns and its
//! categories as an array of ids. Only the ids are written here; full
//! category data lives in the category table.

use crate::constants::{
    COL_CATEGORIES, COL_DESCRIPTION, COL_ICON, COL_ID, COL_LOCATION_ACCURATE, COL_LOCATION_CITY,
    COL_LOCATION_COUNTRY, COL_LOCATION_CROSS_STREET, COL_LOCATION_LATITUDE, COL_LOCATION_LONGITUDE,
    COL_LOCATION_POSTAL_CODE, COL_LOCATION_STATE, COL_LOCATION_STREET_ADDRESS, COL_NAME, COL_PRICE_LEVEL,
    COL_PRICE_MESSAGE, COL_TAGS, COL_URL,
};
use crate::model::{Category, Location, Place};
use crate::store::{Row, StoreError, StoreResult, Value};

/// Ordered column → value mapping for one place row.
pub type Fields = Vec<(&'static str, Value)>;

fn require_id(row: &Row, entity: &str) -> StoreResult<String> {
    match row.get(COL_ID) {
        Some(Value::Text(id)) => Ok(id.clone()),
        _ => Err(StoreError::Decode(format!("{entity} row without a text id"))),
    }
}

pub fn category_from_row(row: &Row) -> StoreResult<Category> {
    Ok(Category::new(
        require_id(row, "category")?,
        row.text(COL_NAME),
        row.text(COL_ICON),
    ))
}

/// Flatten a place into the columns of its row.
pub fn place_fields(place: &Place) -> Fields {
    let location = &place.location;
    vec![
        (COL_ID, Value::from(&place.id)),
        (COL_NAME, Value::from(&place.name)),
        (COL_DESCRIPTION, Value::from(&place.description)),
        (COL_URL, Value::from(&place.url)),
        (COL_CATEGORIES, Value::from(place.category_ids())),
        (COL_TAGS, Value::from(place.tags.clone())),
        (COL_LOCATION_LATITUDE, Value::from(location.latitude)),
        (COL_LOCATION_LONGITUDE, Value::from(location.longitude)),
        (COL_LOCATION_ACCURATE, Value::from(location.accurate)),
        (COL_LOCATION_STREET_ADDRESS, Value::from(&location.street_address)),
        (COL_LOCATION_CROSS_STREET, Value::from(&location.cross_street)),
        (COL_LOCATION_CITY, Value::from(&location.city)),
        (COL_LOCATION_STATE, Value::from(&location.state)),
        (COL_LOCATION_POSTAL_CODE, Value::from(&location.postal_code)),
        (COL_LOCATION_COUNTRY, Value::from(&location.country)),
        (COL_PRICE_LEVEL, Value::from(place.price_level)),
        (COL_PRICE_MESSAGE, Value::from(&place.price_message)),
    ]
}

pub fn location_from_row(row: &Row) -> Location {
    Location::new(
        row.float(COL_LOCATION_LATITUDE),
        row.float(COL_LOCATION_LONGITUDE),
        row.boolean(COL_LOCATION_ACCURATE),
        row.text(COL_LOCATION_STREET_ADDRESS),
        row.text(COL_LOCATION_CROSS_STREET),
        row.text(COL_LOCATION_CITY),
        row.text(COL_LOCATION_STATE),
        row.text(COL_LOCATION_POSTAL_CODE),
        row.text(COL_LOCATION_COUNTRY),
    )
}

/// Category ids stored on a place row, empty entries dropped.
pub fn category_ids_from_row(row: &Row) -> Vec<String> {
    row.text_list(COL_CATEGORIES)
        .into_iter()
        .filter(|id| !id.is_empty())
        .collect()
}

/// Rebuild a place from its row and its already resolved categories.
pub fn place_from_row(row: &Row, categories: Vec<Category>) -> StoreResult<Place> {
    Ok(Place::new(
        require_id(row, "place")?,
        row.text(COL_NAME),
        row.text(COL_DESCRIPTION),
        row.text_list(COL_TAGS),
        categories,
        row.text(COL_URL),
        location_from_row(row),
        row.int(COL_PRICE_LEVEL),
        row.text(COL_PRICE_MESSAGE),
    ))
}
