//! Repository layer for place and category persistence.
//!
//! Repositories translate domain objects to rows and back, decide between
//! create and update with an existence probe, and fan batch writes out
//! concurrently. All store access goes through [`crate::store::StoreClient`].

use std::future::Future;

use futures::stream::{self, TryStreamExt};

use crate::constants::DEFAULT_MAX_CONCURRENCY;
use crate::store::StoreResult;

pub mod category;
pub mod mapping;
pub mod place;

pub use category::CategoryRepository;
pub use place::PlaceRepository;

/// Tuning shared by both repositories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepositorySettings {
    /// Upserts in flight per persist call; 0 means no limit.
    pub max_concurrency: usize,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

impl From<&crate::config::StoreConfig> for RepositorySettings {
    fn from(config: &crate::config::StoreConfig) -> Self {
        Self {
            max_concurrency: config.max_concurrency,
        }
    }
}

/// Run `op` for every item, at most `max_concurrency` at a time.
///
/// Resolves once every operation has succeeded, or with the first error.
/// Operations still in flight at that point are dropped.
pub(crate) async fn fan_out<'a, T, F, Fut>(items: &'a [T], max_concurrency: usize, op: F) -> StoreResult<()>
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = StoreResult<()>>,
{
    let limit = (max_concurrency > 0).then_some(max_concurrency);
    stream::iter(items.iter().map(Ok)).try_for_each_concurrent(limit, op).await
}
