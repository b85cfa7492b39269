//! The breed lookup capability contract.
//!
//! Any provider of sub-breed data implements `BreedFetcher`: the remote
//! dog.ceo client, the static table provider, or a test double. Consumers
//! hold the trait, not a concrete type, so providers are interchangeable.
//!
//! All failure modes collapse into the single `BreedNotFound` error; a
//! provider that wants to surface more detail should log it before failing.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

/// The one error a breed lookup can produce. Covers genuine absence as well
/// as any underlying transport or format failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no sub-breed data available for breed: {breed}")]
pub struct BreedNotFound {
    pub breed: String,
}

impl BreedNotFound {
    pub fn new(breed: impl Into<String>) -> Self {
        Self {
            breed: breed.into(),
        }
    }
}

/// A provider of sub-breed lists, keyed by exact breed name.
///
/// The `&mut self` receiver is deliberate: a fetcher instance is owned by a
/// single caller at a time, and implementations need no internal locking.
#[async_trait]
pub trait BreedFetcher {
    /// Look up the sub-breeds of `breed`.
    ///
    /// The key is the exact string passed in - no trimming or case-folding.
    async fn sub_breeds(&mut self, breed: &str) -> Result<Vec<String>, BreedNotFound>;
}

/// Table-backed `BreedFetcher` for offline use.
///
/// Lookups against breeds not present in the table fail with `BreedNotFound`,
/// same as a remote miss.
#[derive(Debug, Clone, Default)]
pub struct StaticBreedFetcher {
    table: HashMap<String, Vec<String>>,
}

impl StaticBreedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a breed and its sub-breeds to the table.
    pub fn with_breed(mut self, breed: impl Into<String>, sub_breeds: &[&str]) -> Self {
        self.table.insert(
            breed.into(),
            sub_breeds.iter().map(|s| s.to_string()).collect(),
        );
        self
    }
}

#[async_trait]
impl BreedFetcher for StaticBreedFetcher {
    async fn sub_breeds(&mut self, breed: &str) -> Result<Vec<String>, BreedNotFound> {
        self.table
            .get(breed)
            .cloned()
            .ok_or_else(|| BreedNotFound::new(breed))
    }
}
