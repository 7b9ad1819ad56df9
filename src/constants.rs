//! Constants used throughout the crate
//!
//! Table and column names, configuration defaults and user-facing messages
//! live here so the mapping layer, the SQLite schema and the binary agree.

// Tables
pub const CATEGORY_TABLE: &str = "Category";
pub const PLACE_TABLE: &str = "Place";

// Place columns, in write order
pub const COL_ID: &str = "id";
pub const COL_NAME: &str = "name";
pub const COL_ICON: &str = "icon";
pub const COL_DESCRIPTION: &str = "description";
pub const COL_URL: &str = "url";
pub const COL_CATEGORIES: &str = "categories";
pub const COL_TAGS: &str = "tags";
pub const COL_LOCATION_LATITUDE: &str = "locationLatitude";
pub const COL_LOCATION_LONGITUDE: &str = "locationLongitude";
pub const COL_LOCATION_ACCURATE: &str = "locationAccurate";
pub const COL_LOCATION_STREET_ADDRESS: &str = "locationStreetAddress";
pub const COL_LOCATION_CROSS_STREET: &str = "locationCrossStreet";
pub const COL_LOCATION_CITY: &str = "locationCity";
pub const COL_LOCATION_STATE: &str = "locationState";
pub const COL_LOCATION_POSTAL_CODE: &str = "locationPostalCode";
pub const COL_LOCATION_COUNTRY: &str = "locationCountry";
pub const COL_PRICE_LEVEL: &str = "priceLevel";
pub const COL_PRICE_MESSAGE: &str = "priceMessage";

// Store defaults
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
/// Rows per page when a statement gives no fetch size
pub const DEFAULT_PAGE_SIZE: usize = 5000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 4;
/// Upserts in flight per persist call (0 = unbounded)
pub const DEFAULT_MAX_CONCURRENCY: usize = 16;

// Configuration and log locations
pub const APP_NAME: &str = "placestore";
pub const CONFIG_FILE_NAME: &str = "placestore.toml";
pub const LOG_FILE_NAME: &str = "placestore.log";

// Log Messages
pub const LOG_UNRESOLVED_CATEGORY: &str = "⚠️ Dropping unresolved category";
