//! Tests for the PokeAPI catalog client

use std::collections::HashMap;
use std::time::Duration;

use roster::adapters::CatalogError;
use roster::adapters::pokeapi::{MAX_CONCURRENT_REQUESTS, PokeApiClient};
use roster::core::models::Item;
use roster::core::ports::CatalogClient;

use super::{FakeHttp, detail_json, list_json};

const TIMEOUT: Duration = Duration::from_secs(5);

fn starters(limit: u32) -> FakeHttp {
    FakeHttp::start(|base| {
        let entries = [(1, "bulbasaur"), (4, "charmander"), (7, "squirtle")];
        let mut routes = HashMap::new();
        routes.insert(
            format!("/api/v2/pokemon?limit={limit}&offset=0"),
            (200, list_json(base, &entries[..limit as usize])),
        );
        routes.insert("/api/v2/pokemon/1/".to_string(), (200, detail_json(1, "bulbasaur", &["grass", "poison"])));
        routes.insert("/api/v2/pokemon/4/".to_string(), (200, detail_json(4, "charmander", &["fire"])));
        routes.insert("/api/v2/pokemon/7/".to_string(), (200, detail_json(7, "squirtle", &["water"])));
        routes
    })
}

#[tokio::test]
async fn test_fetch_catalog_in_list_order() {
    let fake = starters(3);
    let client = PokeApiClient::new(&fake.base_url, 3, TIMEOUT).unwrap();

    let items = client.fetch_catalog().await.unwrap();

    let ids: Vec<_> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 4, 7]);
    assert_eq!(
        items[0],
        Item::new(
            1,
            "bulbasaur",
            "https://sprites.test/1.png",
            vec!["grass".to_string(), "poison".to_string()]
        )
    );
}

#[tokio::test]
async fn test_fetch_catalog_respects_limit() {
    let fake = starters(2);
    let client = PokeApiClient::new(&fake.base_url, 2, TIMEOUT).unwrap();

    let items = client.fetch_catalog().await.unwrap();
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let fake = starters(1);
    let client = PokeApiClient::new(&format!("{}/", fake.base_url), 1, TIMEOUT).unwrap();

    assert_eq!(client.base_url(), fake.base_url);
    assert_eq!(client.fetch_catalog().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_detail_failure_fails_the_fetch() {
    let fake = FakeHttp::start(|base| {
        let mut routes = HashMap::new();
        routes.insert(
            "/api/v2/pokemon?limit=2&offset=0".to_string(),
            (200, list_json(base, &[(1, "bulbasaur"), (2, "ivysaur")])),
        );
        routes.insert("/api/v2/pokemon/1/".to_string(), (200, detail_json(1, "bulbasaur", &["grass"])));
        routes.insert("/api/v2/pokemon/2/".to_string(), (500, "oops".to_string()));
        routes
    });
    let client = PokeApiClient::new(&fake.base_url, 2, TIMEOUT).unwrap();

    let err = client.fetch_catalog().await.unwrap_err();
    assert!(matches!(err, CatalogError::Status { status: 500, .. }), "got {err:?}");
}

#[tokio::test]
async fn test_malformed_list_is_parse_error() {
    let fake = FakeHttp::start(|_| {
        let mut routes = HashMap::new();
        routes.insert("/api/v2/pokemon?limit=5&offset=0".to_string(), (200, "<html>".to_string()));
        routes
    });
    let client = PokeApiClient::new(&fake.base_url, 5, TIMEOUT).unwrap();

    let err = client.fetch_catalog().await.unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_host_is_http_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = PokeApiClient::new(&format!("http://127.0.0.1:{port}/api/v2"), 1, TIMEOUT).unwrap();

    let err = client.fetch_catalog().await.unwrap_err();
    assert!(matches!(err, CatalogError::Http { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_detail_requests_are_bounded_and_ordered() {
    const COUNT: u32 = 40;

    let fake = FakeHttp::start_with_delay(Duration::from_millis(25), |base| {
        let entries: Vec<(u32, &str)> = (1..=COUNT).map(|id| (id, "mon")).collect();
        let mut routes = HashMap::new();
        routes.insert(
            format!("/api/v2/pokemon?limit={COUNT}&offset=0"),
            (200, list_json(base, &entries)),
        );
        for id in 1..=COUNT {
            routes.insert(format!("/api/v2/pokemon/{id}/"), (200, detail_json(id, "mon", &["normal"])));
        }
        routes
    });
    let client = PokeApiClient::new(&fake.base_url, COUNT, TIMEOUT).unwrap();

    let items = client.fetch_catalog().await.unwrap();

    let ids: Vec<_> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, (1..=COUNT).collect::<Vec<_>>());
    let peak = fake.peak_in_flight();
    assert!(peak <= MAX_CONCURRENT_REQUESTS, "{peak} requests in flight");
    assert!(peak > 1, "detail requests were not concurrent");
}
