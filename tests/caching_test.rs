//! End-to-end tests of the caching decorator wrapped around the real HTTP
//! client, against a mock server.
//!
//! `expect(n)` on each mock pins the number of HTTP requests actually made,
//! independently of the decorator's own counter.

use breedcache::{BreedFetcher, CachingBreedFetcher, DogApiClient};
use mockito::Server;

#[tokio::test]
async fn test_cached_lookup_makes_one_http_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/breed/bulldog/list")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": ["boston", "english", "french"], "status": "success"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = DogApiClient::with_base_url(server.url()).unwrap();
    let mut fetcher = CachingBreedFetcher::new(client);

    let first = fetcher.sub_breeds("bulldog").await.unwrap();
    let second = fetcher.sub_breeds("bulldog").await.unwrap();

    assert_eq!(first, vec!["boston", "english", "french"]);
    assert_eq!(second, first);
    assert_eq!(fetcher.calls_made(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_failed_lookup_is_refetched() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/breed/notabreed/list")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "error", "message": "Breed not found", "code": 404}"#)
        .expect(2)
        .create_async()
        .await;

    let client = DogApiClient::with_base_url(server.url()).unwrap();
    let mut fetcher = CachingBreedFetcher::new(client);

    fetcher.sub_breeds("notabreed").await.unwrap_err();
    fetcher.sub_breeds("notabreed").await.unwrap_err();

    assert_eq!(fetcher.calls_made(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_recovery_after_transient_failure() {
    // First response fails, second succeeds: the miss path retries and the
    // success is then cached.
    let mut server = Server::new_async().await;
    let failure = server
        .mock("GET", "/breed/hound/list")
        .with_status(500)
        .with_body("upstream failure")
        .expect(1)
        .create_async()
        .await;

    let client = DogApiClient::with_base_url(server.url()).unwrap();
    let mut fetcher = CachingBreedFetcher::new(client);

    fetcher.sub_breeds("hound").await.unwrap_err();
    assert_eq!(fetcher.calls_made(), 1);
    failure.assert_async().await;

    let success = server
        .mock("GET", "/breed/hound/list")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": ["afghan", "basset"], "status": "success"}"#)
        .expect(1)
        .create_async()
        .await;

    assert_eq!(
        fetcher.sub_breeds("hound").await.unwrap(),
        vec!["afghan", "basset"]
    );
    assert_eq!(
        fetcher.sub_breeds("hound").await.unwrap(),
        vec!["afghan", "basset"]
    );
    assert_eq!(fetcher.calls_made(), 2);
    success.assert_async().await;
}

#[tokio::test]
async fn test_distinct_breeds_are_fetched_independently() {
    let mut server = Server::new_async().await;
    let bulldog = server
        .mock("GET", "/breed/bulldog/list")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": ["english"], "status": "success"}"#)
        .expect(1)
        .create_async()
        .await;
    let spaniel = server
        .mock("GET", "/breed/spaniel/list")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": ["cocker"], "status": "success"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = DogApiClient::with_base_url(server.url()).unwrap();
    let mut fetcher = CachingBreedFetcher::new(client);

    fetcher.sub_breeds("bulldog").await.unwrap();
    fetcher.sub_breeds("spaniel").await.unwrap();
    fetcher.sub_breeds("bulldog").await.unwrap();
    fetcher.sub_breeds("spaniel").await.unwrap();

    assert_eq!(fetcher.calls_made(), 2);
    bulldog.assert_async().await;
    spaniel.assert_async().await;
}
