//! REST API client module for the dog.ceo service.
//!
//! This module provides the `DogApiClient` for fetching sub-breed lists
//! from the public dog.ceo API. The API is unauthenticated; errors are
//! classified into `ApiError` internally and collapsed to `BreedNotFound`
//! at the `BreedFetcher` boundary.

pub mod client;
pub mod error;

pub use client::DogApiClient;
pub use error::ApiError;
