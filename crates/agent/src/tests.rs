//! Sync agent tests against a mock film source.
//!
//! Coverage targets:
//! - Field mapping from a matched source entry
//! - Idempotent re-import (dedup by case-insensitive title)
//! - Collapsed not-found outcome for 500 / timeout, store untouched
//! - Loose string-typed numeric fields
//! - Unparsable entries skipped in favor of later matches

#![expect(clippy::unwrap_used, reason = "test code")]

use std::time::Duration;

use filmshelf_storage::CatalogStore;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{FilmClient, SyncAgent};

fn create_test_store() -> (CatalogStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = CatalogStore::open(temp_dir.path().join("movies.json")).unwrap();
    (store, temp_dir)
}

async fn setup_source(films: serde_json::Value) -> (MockServer, SyncAgent) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/films"))
        .respond_with(ResponseTemplate::new(200).set_body_json(films))
        .mount(&server)
        .await;
    let agent = SyncAgent::new(FilmClient::new(server.uri()).unwrap());
    (server, agent)
}

#[tokio::test]
async fn test_import_maps_source_entry() {
    let (_server, agent) = setup_source(json!([
        {"title": "X", "rt_score": 85, "release_date": "2001"}
    ]))
    .await;
    let (mut store, _dir) = create_test_store();

    let record = agent.fetch_and_import(&mut store, "x").await.unwrap().unwrap();
    assert_eq!(record.title, "X");
    assert_eq!(record.genre, "Animation");
    assert!((record.rating - 8.5).abs() < f64::EPSILON);
    assert_eq!(record.year, 2001);
    assert!(!record.watched);
    assert_eq!(store.list_all(), &[record]);
}

#[tokio::test]
async fn test_import_accepts_string_typed_fields() {
    let (_server, agent) = setup_source(json!([
        {"title": "Princess Mononoke", "rt_score": "92", "release_date": "1997-07-12"}
    ]))
    .await;
    let (mut store, _dir) = create_test_store();

    let record =
        agent.fetch_and_import(&mut store, "Princess Mononoke").await.unwrap().unwrap();
    assert!((record.rating - 9.2).abs() < f64::EPSILON);
    assert_eq!(record.year, 1997);
}

#[tokio::test]
async fn test_double_import_is_idempotent() {
    let (_server, agent) = setup_source(json!([
        {"title": "Spirited Away", "rt_score": 97, "release_date": "2001"}
    ]))
    .await;
    let (mut store, _dir) = create_test_store();

    let first = agent.fetch_and_import(&mut store, "Spirited Away").await.unwrap();
    let second = agent.fetch_and_import(&mut store, "SPIRITED AWAY").await.unwrap();

    // Both calls return a record, the store grows only once.
    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_import_dedups_against_preexisting_record() {
    let (_server, agent) = setup_source(json!([
        {"title": "Ponyo", "rt_score": 92, "release_date": "2008"}
    ]))
    .await;
    let (mut store, _dir) = create_test_store();
    store.add_movie("ponyo", "Animation", 9.2, 2008, true).unwrap();

    let record = agent.fetch_and_import(&mut store, "Ponyo").await.unwrap();
    assert!(record.is_some());
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_title_absent_from_source_is_not_found() {
    let (_server, agent) = setup_source(json!([
        {"title": "Castle in the Sky", "rt_score": 95, "release_date": "1986"}
    ]))
    .await;
    let (mut store, _dir) = create_test_store();

    let result = agent.fetch_and_import(&mut store, "Totoro").await.unwrap();
    assert!(result.is_none());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_server_error_collapses_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/films"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;
    let agent = SyncAgent::new(FilmClient::new(server.uri()).unwrap());
    let (mut store, _dir) = create_test_store();

    let result = agent.fetch_and_import(&mut store, "Spirited Away").await.unwrap();
    assert!(result.is_none());
    // No partial writes on a failed fetch.
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_timeout_collapses_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/films"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;
    let client = FilmClient::with_timeout(server.uri(), Duration::from_millis(50)).unwrap();
    let agent = SyncAgent::new(client);
    let (mut store, _dir) = create_test_store();

    let result = agent.fetch_and_import(&mut store, "Spirited Away").await.unwrap();
    assert!(result.is_none());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_unparsable_entry_skipped_in_favor_of_later_match() {
    // First matching entry has a junk score; the scan must move on to the
    // next matching entry instead of aborting.
    let (_server, agent) = setup_source(json!([
        {"title": "Arrietty", "rt_score": "n/a", "release_date": "2010"},
        {"title": "ARRIETTY", "rt_score": 95, "release_date": "2010"}
    ]))
    .await;
    let (mut store, _dir) = create_test_store();

    let record = agent.fetch_and_import(&mut store, "arrietty").await.unwrap().unwrap();
    assert!((record.rating - 9.5).abs() < f64::EPSILON);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_first_source_match_wins() {
    let (_server, agent) = setup_source(json!([
        {"title": "The Cat Returns", "rt_score": 89, "release_date": "2002"},
        {"title": "the cat returns", "rt_score": 10, "release_date": "1999"}
    ]))
    .await;
    let (mut store, _dir) = create_test_store();

    let record =
        agent.fetch_and_import(&mut store, "The Cat Returns").await.unwrap().unwrap();
    assert_eq!(record.year, 2002);
}

#[tokio::test]
async fn test_malformed_body_collapses_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/films"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;
    let agent = SyncAgent::new(FilmClient::new(server.uri()).unwrap());
    let (mut store, _dir) = create_test_store();

    let result = agent.fetch_and_import(&mut store, "Spirited Away").await.unwrap();
    assert!(result.is_none());
    assert!(store.is_empty());
}
