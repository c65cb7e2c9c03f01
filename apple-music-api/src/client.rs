//! HTTP client for the Apple Music API.
//!
//! Every request goes through [`AppleMusicClient::send`]:
//!
//! 1. Join the configured base URL (`https://api.music.apple.com/v1`) with the
//!    endpoint path and append query pairs
//! 2. Attach `Authorization: Bearer <developer token>` and
//!    `Music-User-Token: <user token>` (the latter may be empty)
//! 3. Serialize the typed request body, if any, as JSON
//! 4. Hand the request to the [`Transport`] and return the raw response
//!
//! Each endpoint then checks the status code against its own contract with
//! [`expect_status`] and decodes the body with [`decode`].
//!
//! # Response format
//!
//! Resource responses share this envelope:
//!
//! ```json
//! {
//!   "data": [ { "id": "...", "type": "songs", "attributes": { ... } } ]
//! }
//! ```
//!
//! Status codes outside the contract map to
//! [`AppleMusicError::UnexpectedStatus`](crate::AppleMusicError::UnexpectedStatus).

use crate::auth::USER_TOKEN_HEADER;
use crate::config::ClientConfig;
use crate::error::{AppleMusicError, Result};
use crate::transport::{Method, Request, Response, Transport, Url};
use reqwest::blocking::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use tracing::{debug, trace};

const USER_AGENT: &str = concat!("apple-music-api/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for the Apple Music API.
///
/// Holds a [`Transport`] (by default a [`reqwest::blocking::Client`]) and a
/// [`ClientConfig`]. API methods are implemented in separate modules (`song`,
/// `storefront`, `chart`, `playlist`, `recommendation`, `rating`, `library`)
/// as `impl AppleMusicClient` blocks.
///
/// Operations take `&self`; the user token and storefront can only be
/// changed through `&mut self`, so no call ever sees a half-updated
/// configuration.
pub struct AppleMusicClient<T = Client> {
    transport: T,
    config: ClientConfig,
}

impl AppleMusicClient {
    /// Create a client backed by a blocking reqwest client that honors
    /// [`ClientConfig::timeout`].
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;
        Ok(Self::with_transport(config, http))
    }
}

impl<T: Transport> AppleMusicClient<T> {
    /// Create a client with an explicit [`Transport`].
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { transport, config }
    }

    /// Return a reference to the current configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Return a reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Storefront used by catalog endpoints.
    pub fn storefront(&self) -> &str {
        &self.config.storefront
    }

    /// Replace the user token (e.g. after MusicKit re-authorization).
    pub fn set_user_token(&mut self, user_token: impl Into<String>) {
        self.config.credentials.user_token = user_token.into();
    }

    pub fn set_storefront(&mut self, storefront: impl Into<String>) {
        self.config.storefront = storefront.into();
    }

    /// Fail with [`AppleMusicError::MissingUserToken`] unless a user token
    /// is configured. Called before any `/me/...` request is built.
    pub(crate) fn require_user_token(&self) -> Result<()> {
        if self.config.credentials.has_user_token() {
            Ok(())
        } else {
            Err(AppleMusicError::MissingUserToken)
        }
    }

    /// Build the absolute URL for `path` (e.g. `/storefronts`) with `query`
    /// appended form-encoded.
    pub(crate) fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let raw = format!("{}{path}", self.config.base_url);
        let mut url =
            Url::parse(&raw).map_err(|e| AppleMusicError::InvalidUrl(format!("{raw}: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Send a request to `path` and return the raw response.
    ///
    /// Does not check the status code; callers apply their own contract.
    pub(crate) fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<Response> {
        let url = self.url(path, query)?;
        let body = body.map(serde_json::to_string).transpose()?;
        let creds = &self.config.credentials;
        let request = Request {
            method,
            url,
            headers: vec![
                ("Authorization", creds.authorization_header()),
                (USER_TOKEN_HEADER, creds.user_token.clone()),
            ],
            body,
        };

        debug!(method = %request.method, path, "sending Apple Music request");
        let resp = self.transport.send(request)?;
        trace!(status = resp.status, bytes = resp.body.len(), "received response");
        Ok(resp)
    }

    pub(crate) fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response> {
        self.send::<()>(Method::GET, path, query, None)
    }

    pub(crate) fn delete(&self, path: &str) -> Result<Response> {
        self.send::<()>(Method::DELETE, path, &[], None)
    }
}

/// Percent-encode a caller-supplied value for use as one path segment.
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Return `resp` if its status equals `code`, otherwise
/// [`AppleMusicError::UnexpectedStatus`].
pub(crate) fn expect_status(resp: Response, code: u16) -> Result<Response> {
    if resp.status == code {
        Ok(resp)
    } else {
        Err(AppleMusicError::UnexpectedStatus { code: resp.status })
    }
}

/// Decode a JSON response body.
pub(crate) fn decode<R: DeserializeOwned>(resp: &Response) -> Result<R> {
    Ok(serde_json::from_slice(&resp.body)?)
}
