use axum::http::StatusCode;
use serde_json::json;

use api::{CatalogClient, FetchError, StaticToken, VideoSource, VideoSummary, ViewCount};

use crate::stub_catalog::{closed_port_config, ok_json, StubCatalog};

#[tokio::test]
async fn maps_every_video_in_order() {
    let stub = StubCatalog::start(vec![ok_json(json!({
        "total": 2,
        "videos": [
            {"id": "1", "thumbnail_url": "u", "title": "T", "view_count": 10},
            {"id": "2", "thumbnail_url": "v", "title": "U", "view_count": "1.4K"}
        ]
    }))])
    .await;
    let client = CatalogClient::new(stub.config.clone());

    let videos = client.trending_gaming(Some("jwt")).await.expect("success");

    assert_eq!(
        videos,
        vec![
            VideoSummary {
                id: "1".to_string(),
                thumbnail_url: "u".to_string(),
                title: "T".to_string(),
                view_count: ViewCount::from(10),
            },
            VideoSummary {
                id: "2".to_string(),
                thumbnail_url: "v".to_string(),
                title: "U".to_string(),
                view_count: ViewCount::from("1.4K"),
            },
        ]
    );
}

#[tokio::test]
async fn sends_bearer_token_from_provider() {
    let stub = StubCatalog::start(vec![ok_json(json!({"videos": []}))]).await;
    let client = CatalogClient::new(stub.config.clone());

    let videos = api::load_gaming_videos(&client, &StaticToken::new("abc.def"))
        .await
        .expect("success");

    assert!(videos.is_empty());
    assert_eq!(stub.seen_auth(), vec![Some("Bearer abc.def".to_string())]);
}

#[tokio::test]
async fn missing_token_still_issues_request() {
    let stub = StubCatalog::start(vec![(StatusCode::UNAUTHORIZED, "{}".to_string())]).await;
    let client = CatalogClient::new(stub.config.clone());

    let err = api::load_gaming_videos(&client, &StaticToken::none())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Status(401)));
    assert_eq!(stub.seen_auth(), vec![None]);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let stub = StubCatalog::start(vec![(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"videos": [{"id": "ignored"}]}).to_string(),
    )])
    .await;
    let client = CatalogClient::new(stub.config.clone());

    let err = client.trending_gaming(Some("jwt")).await.unwrap_err();

    assert!(matches!(err, FetchError::Status(500)));
    assert_eq!(err.status_code(), Some(500));
}

#[tokio::test]
async fn garbage_body_is_a_decode_error() {
    let stub = StubCatalog::start(vec![(StatusCode::OK, "<html>oops</html>".to_string())]).await;
    let client = CatalogClient::new(stub.config.clone());

    let err = client.trending_gaming(Some("jwt")).await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn unreachable_catalog_is_a_transport_error() {
    let client = CatalogClient::new(closed_port_config().await);

    let err = client.trending_gaming(Some("jwt")).await.unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
}
