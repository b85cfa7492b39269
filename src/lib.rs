//! Sub-breed lookup for the dog.ceo API with in-memory caching.
//!
//! The crate is organized around the `BreedFetcher` capability: the remote
//! `DogApiClient` implements it, and `CachingBreedFetcher` wraps any
//! implementation to memoize successful lookups and count calls delegated
//! to the wrapped provider. Failed lookups are never cached, so callers can
//! retry transient errors by simply calling again.

pub mod api;
pub mod cache;
pub mod config;
pub mod fetcher;

pub use api::{ApiError, DogApiClient};
pub use cache::CachingBreedFetcher;
pub use fetcher::{BreedFetcher, BreedNotFound, StaticBreedFetcher};
