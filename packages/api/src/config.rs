pub const DEFAULT_CATALOG_URL: &str = "https://apis.ccbp.in";
pub const DEFAULT_TOKEN_COOKIE: &str = "jwt_token";
pub const GAMING_VIDEOS_PATH: &str = "/videos/gaming";

/// Where the video catalog lives and which cookie carries its bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub token_cookie: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_URL.to_string(),
            token_cookie: DEFAULT_TOKEN_COOKIE.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Reads `CATALOG_API_URL` and `CATALOG_TOKEN_COOKIE`.
    ///
    /// Runtime variables win; wasm builds have no process environment, so the
    /// values baked in at compile time are used there.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            std::env::var(key).ok().or_else(|| match key {
                "CATALOG_API_URL" => option_env!("CATALOG_API_URL").map(str::to_string),
                "CATALOG_TOKEN_COOKIE" => option_env!("CATALOG_TOKEN_COOKIE").map(str::to_string),
                _ => None,
            })
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            base_url: non_blank("CATALOG_API_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            token_cookie: non_blank("CATALOG_TOKEN_COOKIE")
                .map(|name| name.trim().to_string())
                .unwrap_or(defaults.token_cookie),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn gaming_videos_url(&self) -> String {
        format!("{}{}", self.base_url, GAMING_VIDEOS_PATH)
    }
}
