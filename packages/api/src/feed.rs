//! Request/render state for the gaming page.
//!
//! [`GamingFeed`] is the single owner of the page state. Every fetch starts
//! with [`GamingFeed::start`], which hands out a [`RequestTicket`]; the
//! outcome is later fed back through [`GamingFeed::apply`]. Only the newest
//! ticket may change the state, so a slow response from a superseded request
//! can never overwrite a fresher one.

use tracing::{debug, warn};

use crate::catalog::VideoSource;
use crate::credentials::CredentialProvider;
use crate::error::FetchError;
use crate::types::{ApiStatus, VideoSummary};

/// Sequence number of one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// What happened to an outcome handed to [`GamingFeed::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Success { videos: usize },
    Failure,
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamingFeed {
    status: ApiStatus,
    videos: Vec<VideoSummary>,
    issued: u64,
}

impl GamingFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ApiStatus {
        self.status
    }

    /// The list only means something after a successful fetch.
    pub fn visible_videos(&self) -> Option<&[VideoSummary]> {
        match self.status {
            ApiStatus::Success => Some(&self.videos),
            _ => None,
        }
    }

    pub fn latest_ticket(&self) -> Option<RequestTicket> {
        (self.issued > 0).then_some(RequestTicket(self.issued))
    }

    /// Enters `InProgress` and issues a ticket that supersedes all earlier ones.
    pub fn start(&mut self) -> RequestTicket {
        self.issued += 1;
        self.status = ApiStatus::InProgress;
        debug!("feed.start: ticket={}", self.issued);
        RequestTicket(self.issued)
    }

    pub fn retry(&mut self) -> RequestTicket {
        debug!("feed.retry: from={}", self.status);
        self.start()
    }

    pub fn apply(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<Vec<VideoSummary>, FetchError>,
    ) -> Applied {
        if ticket.0 != self.issued {
            warn!(
                "feed.apply: discarding stale ticket={} latest={}",
                ticket.0, self.issued
            );
            return Applied::Stale;
        }

        match outcome {
            Ok(videos) => {
                let count = videos.len();
                self.videos = videos;
                self.status = ApiStatus::Success;
                Applied::Success { videos: count }
            }
            Err(e) => {
                warn!("feed.apply: ticket={} failed: {}", ticket.0, e);
                self.status = ApiStatus::Failure;
                Applied::Failure
            }
        }
    }
}

/// Reads the token and performs one catalog request.
pub async fn load_gaming_videos(
    source: &dyn VideoSource,
    credentials: &dyn CredentialProvider,
) -> Result<Vec<VideoSummary>, FetchError> {
    let token = credentials.get_token();
    source.trending_gaming(token.as_deref()).await
}
