use thiserror::Error;

/// Why a catalog fetch did not produce a video list.
///
/// The page treats every variant the same way; the distinction is kept for
/// logs and tests.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog responded with HTTP {0}")]
    Status(u16),

    #[error("catalog payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Status(code) => Some(*code),
            FetchError::Transport(e) => e.status().map(|s| s.as_u16()),
            FetchError::Decode(_) => None,
        }
    }
}
