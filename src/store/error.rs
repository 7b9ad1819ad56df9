//! The single error kind surfaced by the persistence layer.

/// Failure reported by the store client, passed through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Malformed query: {0}")]
    Query(String),

    #[error("Undecodable row: {0}")]
    Decode(String),

    #[error("Store client error: {0}")]
    Client(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
