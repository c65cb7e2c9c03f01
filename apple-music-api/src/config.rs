//! Per-client configuration.

use crate::auth::Credentials;
use std::time::Duration;

/// Root of every Apple Music API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.music.apple.com/v1";

/// Storefront used when none is configured.
pub const DEFAULT_STOREFRONT: &str = "jp";

/// Per-request timeout of the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration shared by all operations of one [`AppleMusicClient`](crate::AppleMusicClient).
///
/// ```
/// use apple_music_api::ClientConfig;
///
/// let config = ClientConfig::new("DEVELOPER_TOKEN")
///     .with_user_token("USER_TOKEN")
///     .with_storefront("us");
/// assert_eq!(config.storefront, "us");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Developer and user tokens.
    pub credentials: Credentials,
    /// Storefront code used by catalog endpoints (e.g. `jp`, `us`).
    pub storefront: String,
    /// API root, without trailing slash.
    pub base_url: String,
    /// Timeout applied by the default transport.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Configuration with a developer token and defaults for everything else.
    pub fn new(developer_token: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(developer_token),
            storefront: DEFAULT_STOREFRONT.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_user_token(mut self, user_token: impl Into<String>) -> Self {
        self.credentials.user_token = user_token.into();
        self
    }

    #[must_use]
    pub fn with_storefront(mut self, storefront: impl Into<String>) -> Self {
        self.storefront = storefront.into();
        self
    }

    /// Override the API root (useful for proxies and tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::new("dev");
        assert_eq!(config.storefront, "jp");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.credentials.has_user_token());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = ClientConfig::new("dev").with_base_url("http://localhost:8080/v1/");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
    }
}
