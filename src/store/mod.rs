//! Store client abstraction.
//!
//! Repositories talk to the data store only through [`StoreClient`]: a
//! parameterized statement with positional `?` placeholders goes in, a
//! [`RowSet`] or a [`StoreError`] comes out. [`SqliteStore`] is the bundled
//! implementation.

use async_trait::async_trait;

pub mod error;
pub mod sqlite;
pub mod value;

pub use error::{StoreError, StoreResult};
pub use sqlite::SqliteStore;
pub use value::{Row, Value};

/// Largest page size a client accepts; asking for it returns a full scan as one result.
pub const MAX_FETCH_SIZE: i32 = i32::MAX;

/// Per-statement execution hints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Rows per page. `None` uses the client's configured default.
    pub fetch_size: Option<i32>,
}

impl QueryOptions {
    /// Request every matching row in a single page.
    pub fn unbounded() -> Self {
        Self {
            fetch_size: Some(MAX_FETCH_SIZE),
        }
    }
}

/// Rows returned by a statement. Writes return an empty set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowSet {
    pub rows: Vec<Row>,
}

impl RowSet {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// The first row, if any.
    pub fn first(self) -> Option<Row> {
        self.rows.into_iter().next()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A connection to the column store.
///
/// Implementations own pooling, paging, timeouts and cancellation; none of
/// that is visible to the repositories.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Run one statement with positional parameters.
    async fn execute(&self, query: &str, params: Vec<Value>, options: QueryOptions) -> StoreResult<RowSet>;
}
