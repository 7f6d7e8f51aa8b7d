use axum::http::StatusCode;
use serde_json::json;

use api::{
    load_gaming_videos, ApiStatus, Applied, CatalogClient, GamingFeed, StaticToken, ViewCount,
};

use crate::stub_catalog::{closed_port_config, ok_json, StubCatalog};

#[tokio::test]
async fn mount_then_success() {
    let stub = StubCatalog::start(vec![ok_json(json!({
        "videos": [{"id": "1", "thumbnail_url": "u", "title": "T", "view_count": 10}]
    }))])
    .await;
    let client = CatalogClient::new(stub.config.clone());
    let credentials = StaticToken::new("jwt");

    let mut feed = GamingFeed::new();
    let ticket = feed.start();
    assert_eq!(feed.status(), ApiStatus::InProgress);

    let outcome = load_gaming_videos(&client, &credentials).await;
    assert_eq!(feed.apply(ticket, outcome), Applied::Success { videos: 1 });

    assert_eq!(feed.status(), ApiStatus::Success);
    let videos = feed.visible_videos().unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].id, "1");
    assert_eq!(videos[0].thumbnail_url, "u");
    assert_eq!(videos[0].title, "T");
    assert_eq!(videos[0].view_count, ViewCount::from(10));
}

#[tokio::test]
async fn failure_then_retry_reissues_same_request() {
    let stub = StubCatalog::start(vec![
        (StatusCode::INTERNAL_SERVER_ERROR, "{}".to_string()),
        ok_json(json!({
            "videos": [{"id": "7", "thumbnail_url": "t", "title": "Speedrun", "view_count": 3}]
        })),
    ])
    .await;
    let client = CatalogClient::new(stub.config.clone());
    let credentials = StaticToken::new("jwt");

    let mut feed = GamingFeed::new();
    let ticket = feed.start();
    let outcome = load_gaming_videos(&client, &credentials).await;
    assert_eq!(feed.apply(ticket, outcome), Applied::Failure);
    assert_eq!(feed.status(), ApiStatus::Failure);

    let ticket = feed.retry();
    assert_eq!(feed.status(), ApiStatus::InProgress);
    let outcome = load_gaming_videos(&client, &credentials).await;
    feed.apply(ticket, outcome);

    assert_eq!(feed.status(), ApiStatus::Success);
    assert_eq!(feed.visible_videos().unwrap()[0].title, "Speedrun");
    assert_eq!(
        stub.seen_auth(),
        vec![Some("Bearer jwt".to_string()), Some("Bearer jwt".to_string())]
    );
}

#[tokio::test]
async fn transport_failure_lands_in_failure_state() {
    let client = CatalogClient::new(closed_port_config().await);

    let mut feed = GamingFeed::new();
    let ticket = feed.start();
    let outcome = load_gaming_videos(&client, &StaticToken::new("jwt")).await;

    assert_eq!(feed.apply(ticket, outcome), Applied::Failure);
    assert_eq!(feed.status(), ApiStatus::Failure);
}
