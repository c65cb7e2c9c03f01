//! Credentials sent with every request.
//!
//! Apple Music uses two tokens:
//!
//! - the **developer token**, a signed JWT identifying the integrating app,
//!   sent as `Authorization: Bearer <token>`;
//! - the **user token** (`Music-User-Token`), issued by MusicKit after the
//!   user grants access, required by every `/me/...` endpoint.
//!
//! The library never stores credentials on disk. [`Credentials`] derives
//! `Serialize`/`Deserialize` so a host application can persist it however it
//! likes:
//!
//! ```json
//! { "developerToken": "eyJhbGciOi...", "userToken": "AgAAAE..." }
//! ```

use serde::{Deserialize, Serialize};

/// Name of the header carrying the user token.
pub const USER_TOKEN_HEADER: &str = "Music-User-Token";

/// Developer and user tokens for one client instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// JWT identifying the integrating application.
    pub developer_token: String,
    /// Per-user token; empty when the user has not authorized the app.
    #[serde(default)]
    pub user_token: String,
}

impl Credentials {
    /// Credentials with only a developer token (catalog endpoints only).
    pub fn new(developer_token: impl Into<String>) -> Self {
        Self {
            developer_token: developer_token.into(),
            user_token: String::new(),
        }
    }

    /// Value of the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.developer_token)
    }

    /// Check whether a user token is present (does not validate it).
    pub fn has_user_token(&self) -> bool {
        !self.user_token.is_empty()
    }
}
