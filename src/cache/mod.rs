//! In-memory caching for breed lookups.
//!
//! This module provides the `CachingBreedFetcher` decorator, which wraps any
//! `BreedFetcher` and memoizes successful lookups for the lifetime of the
//! decorator. Failed lookups are never cached, so a later call with the same
//! breed retries the underlying provider.

pub mod decorator;

pub use decorator::CachingBreedFetcher;
