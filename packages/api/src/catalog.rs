use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use tracing::{debug, info, warn};

use crate::config::CatalogConfig;
use crate::error::FetchError;
use crate::types::{GamingVideosPayload, VideoSummary};

/// Anything that can produce the trending gaming list for a bearer token.
///
/// Futures are not required to be `Send`: in the browser the request runs on
/// the single JS event loop.
#[async_trait(?Send)]
pub trait VideoSource {
    async fn trending_gaming(&self, token: Option<&str>) -> Result<Vec<VideoSummary>, FetchError>;
}

/// HTTP client for the remote video catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_http(reqwest::Client::new(), config)
    }

    pub fn with_http(http: reqwest::Client, config: CatalogConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn gaming_request(&self, token: Option<&str>) -> reqwest::RequestBuilder {
        let request = self.http.get(self.config.gaming_videos_url());
        match token {
            Some(token) => request.header(AUTHORIZATION, bearer(token)),
            None => request,
        }
    }
}

#[async_trait(?Send)]
impl VideoSource for CatalogClient {
    async fn trending_gaming(&self, token: Option<&str>) -> Result<Vec<VideoSummary>, FetchError> {
        let url = self.config.gaming_videos_url();
        debug!(
            "catalog.trending_gaming: url={} has_token={}",
            url,
            token.is_some()
        );

        let response = self.gaming_request(token).send().await.map_err(|e| {
            warn!("catalog.trending_gaming: transport error: {}", e);
            FetchError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("catalog.trending_gaming: status={}", status.as_u16());
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let payload: GamingVideosPayload = serde_json::from_slice(&body).map_err(|e| {
            warn!("catalog.trending_gaming: undecodable body: {}", e);
            FetchError::from(e)
        })?;
        let videos = payload.into_summaries();

        info!(
            "catalog.trending_gaming: status={} videos={}",
            status.as_u16(),
            videos.len()
        );
        Ok(videos)
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
