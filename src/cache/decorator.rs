use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use crate::fetcher::{BreedFetcher, BreedNotFound};

/// Caching decorator around any `BreedFetcher`.
///
/// Successful lookups are memoized for the lifetime of the decorator and the
/// number of calls delegated to the wrapped provider is recorded. A failed
/// lookup is never cached, so calling again with the same breed delegates
/// again - that is the retry path for transient errors.
///
/// The cache maps the exact breed string to its sub-breed list. An entry is
/// written once, on first success, and never updated or removed.
pub struct CachingBreedFetcher<F> {
    inner: F,
    cache: HashMap<String, Vec<String>>,
    calls_made: u64,
}

impl<F> CachingBreedFetcher<F> {
    /// Wrap `inner` with an empty cache and a zeroed call counter.
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            cache: HashMap::new(),
            calls_made: 0,
        }
    }

    /// Number of calls delegated to the wrapped provider so far.
    /// Cache hits do not count.
    pub fn calls_made(&self) -> u64 {
        self.calls_made
    }

    /// Discard the cache and recover the wrapped provider.
    pub fn into_inner(self) -> F {
        self.inner
    }
}

#[async_trait]
impl<F: BreedFetcher + Send> BreedFetcher for CachingBreedFetcher<F> {
    async fn sub_breeds(&mut self, breed: &str) -> Result<Vec<String>, BreedNotFound> {
        if let Some(cached) = self.cache.get(breed) {
            debug!(breed, "Cache hit");
            return Ok(cached.clone());
        }

        debug!(breed, "Cache miss, delegating");
        let result = self.inner.sub_breeds(breed).await;
        self.calls_made += 1;

        match result {
            Ok(sub_breeds) => {
                // Only successful results are cached
                self.cache.insert(breed.to_string(), sub_breeds.clone());
                Ok(sub_breeds)
            }
            Err(e) => Err(e),
        }
    }
}
