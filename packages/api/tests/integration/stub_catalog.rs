//! A throwaway catalog server on 127.0.0.1 that replays scripted replies.

use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use api::CatalogConfig;

pub struct StubCatalog {
    pub config: CatalogConfig,
    seen_auth: Arc<Mutex<Vec<Option<String>>>>,
}

impl StubCatalog {
    /// Serves `replies` in order on `/videos/gaming`; the last one repeats.
    pub async fn start(replies: Vec<(StatusCode, String)>) -> Self {
        let seen_auth = Arc::new(Mutex::new(Vec::new()));
        let replies = Arc::new(replies);
        let cursor = Arc::new(AtomicUsize::new(0));

        let recorder = seen_auth.clone();
        let app = Router::new().route(
            "/videos/gaming",
            get(move |headers: HeaderMap| {
                let recorder = recorder.clone();
                let replies = replies.clone();
                let cursor = cursor.clone();
                async move {
                    recorder.lock().unwrap().push(
                        headers
                            .get(header::AUTHORIZATION)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string),
                    );
                    let idx = cursor.fetch_add(1, Ordering::SeqCst).min(replies.len() - 1);
                    let (status, body) = replies[idx].clone();
                    (status, [(header::CONTENT_TYPE, "application/json")], body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            config: CatalogConfig::default().with_base_url(format!("http://{addr}")),
            seen_auth,
        }
    }

    pub fn seen_auth(&self) -> Vec<Option<String>> {
        self.seen_auth.lock().unwrap().clone()
    }
}

pub fn ok_json(value: serde_json::Value) -> (StatusCode, String) {
    (StatusCode::OK, value.to_string())
}

/// A base URL nothing is listening on.
pub async fn closed_port_config() -> CatalogConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    CatalogConfig::default().with_base_url(format!("http://{addr}"))
}
