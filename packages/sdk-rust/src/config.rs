//! Client configuration.

use crate::credential::Credentials;

pub const DEFAULT_API_URL: &str = "https://api.bitvavo.com";
pub const DEFAULT_ACCESS_WINDOW: &str = "10000";

/// Configuration for a [`crate::BitvavoClient`].
///
/// Everything has a sensible default; an unconfigured client can still
/// call public endpoints. The user agent embeds the host OS and crate
/// version by default but is overridable so the request headers stay
/// deterministic in tests.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub credentials: Credentials,
    /// Signature validity window in milliseconds, sent verbatim in the
    /// `Bitvavo-Access-Window` header.
    pub access_window: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            credentials: Credentials::default(),
            access_window: DEFAULT_ACCESS_WINDOW.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from `BITVAVO_*` environment variables.
    ///
    /// Unset variables fall back to defaults; absent credentials are
    /// valid and limit the client to public endpoints.
    pub fn from_env() -> Self {
        let api_key = std::env::var("BITVAVO_API_KEY").ok();
        let api_secret = std::env::var("BITVAVO_API_SECRET").ok();

        Self {
            api_url: std::env::var("BITVAVO_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            credentials: Credentials::new(api_key, api_secret),
            access_window: std::env::var("BITVAVO_ACCESS_WINDOW")
                .unwrap_or_else(|_| DEFAULT_ACCESS_WINDOW.to_string()),
            user_agent: default_user_agent(),
        }
    }

    pub fn with_credentials(mut self, api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        self.credentials = Credentials::new(Some(api_key.into()), Some(api_secret.into()));
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_access_window(mut self, access_window: impl Into<String>) -> Self {
        self.access_window = access_window.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn default_user_agent() -> String {
    format!(
        "Mozilla/4.0 (compatible; Bitvavo Rust client; {}; bitvavo-sdk/{})",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    )
}
