//! placestore - persistence mapping for places and their categories
//!
//! This library maps an in-memory model of places, categories and locations
//! onto a column-oriented store. It performs existence-checked upserts and
//! rebuilds each place's categories from the id arrays stored on its row.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`database`] - Facade owning the store connection and both repositories
//! * [`model`] - Place, category and location value types
//! * [`repositories`] - Row mapping, upserts, batch load and persist
//! * [`store`] - Store client trait, row values and the SQLite client

/// Configuration module for managing application settings
pub mod config;

/// Table names, column names and defaults
pub mod constants;

/// Facade owning the store connection
pub mod database;

/// Logging setup for the binary and tests
pub mod logger;

/// Domain value types
pub mod model;

/// Repository layer for store operations
pub mod repositories;

/// Store client abstraction and its SQLite implementation
pub mod store;

pub use database::Database;
pub use model::{Category, Location, Place};
pub use store::{StoreError, StoreResult};
