/// Integration tests for fetching and caching the remote price list
use chrono::NaiveDate;
use gcosts::pricing::{cached_pricing_path, download_pricing_from_url, parse_catalog, PricingUpdater};
use httpmock::prelude::*;
use std::path::PathBuf;

const PRICING: &str = include_str!("fixtures/pricing.yml");

fn week_18() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
}

#[tokio::test]
async fn test_download_returns_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/pricing.yml");
            then.status(200).body(PRICING);
        })
        .await;

    let content = download_pricing_from_url(&server.url("/pricing.yml"))
        .await
        .unwrap();

    mock.assert_async().await;
    let catalog = parse_catalog(&content, "downloaded").unwrap();
    assert!(catalog.region.contains_key("europe-west4"));
}

#[tokio::test]
async fn test_download_rejects_http_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pricing.yml");
            then.status(404);
        })
        .await;

    let err = download_pricing_from_url(&server.url("/pricing.yml"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("404"));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_download_is_cached_per_week() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/pricing.yml");
            then.status(200).body(PRICING);
        })
        .await;
    let cache = tempfile::tempdir().unwrap();
    let cache_dir = cache.path().join("gcosts");

    let updater = PricingUpdater::new(server.url("/pricing.yml"), &cache_dir, "pricing.yml", false);
    let first = updater.ensure_pricing_file_on(week_18()).await;
    let second = updater.ensure_pricing_file_on(week_18()).await;

    // one request: the second run reuses this week's file
    mock.assert_async().await;
    assert_eq!(first, cache_dir.join("pricing_202418.yml"));
    assert_eq!(first, second);
    assert_eq!(std::fs::read_to_string(&first).unwrap(), PRICING);
}

#[tokio::test]
async fn test_forced_refresh_replaces_cache() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/pricing.yml");
            then.status(200).body(PRICING);
        })
        .await;
    let cache = tempfile::tempdir().unwrap();
    let cached = cached_pricing_path(cache.path(), week_18());
    std::fs::write(&cached, "about: {}\n").unwrap();

    let updater = PricingUpdater::new(server.url("/pricing.yml"), cache.path(), "pricing.yml", true);
    let path = updater.ensure_pricing_file_on(week_18()).await;

    mock.assert_async().await;
    assert_eq!(path, cached);
    assert_eq!(std::fs::read_to_string(&cached).unwrap(), PRICING);
}

#[tokio::test]
async fn test_server_error_falls_back_to_local_file() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pricing.yml");
            then.status(500);
        })
        .await;
    let cache = tempfile::tempdir().unwrap();

    let updater = PricingUpdater::new(server.url("/pricing.yml"), cache.path(), "local-pricing.yml", false);
    let path = updater.ensure_pricing_file_on(week_18()).await;

    assert_eq!(path, PathBuf::from("local-pricing.yml"));
    assert!(!cached_pricing_path(cache.path(), week_18()).exists());
}
