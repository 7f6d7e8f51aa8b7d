//! Platform-neutral core of the gaming feed: catalog types, configuration,
//! credentials, the HTTP catalog client and the request state machine.

pub mod catalog;
pub mod config;
pub mod credentials;
pub mod error;
pub mod feed;
pub mod types;


pub use catalog::{CatalogClient, VideoSource};
pub use config::CatalogConfig;
pub use credentials::{cookie_value, CredentialProvider, EnvToken, StaticToken};
pub use error::FetchError;
pub use feed::{load_gaming_videos, Applied, GamingFeed, RequestTicket};
pub use types::{ApiStatus, VideoSummary, ViewCount};
