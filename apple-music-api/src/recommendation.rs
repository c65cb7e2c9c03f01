//! Personal recommendation API.
//!
//! Endpoint: `GET /v1/me/recommendations?type=playlists`
//!
//! Requires a user token.
//!
//! Response (recommendations nest recursively):
//! ```json
//! {
//!   "data": [{
//!     "id": "6-27s5hU6azhJY",
//!     "type": "personal-recommendation",
//!     "relationships": {
//!       "contents": { "data": [ { "id": "pl.abc", "type": "playlists" } ] },
//!       "recommendations": { "data": [ { "relationships": { ... } } ] }
//!     }
//!   }]
//! }
//! ```

use crate::client::{AppleMusicClient, decode, expect_status};
use crate::error::Result;
use crate::transport::Transport;
use crate::types::{DataResponse, PLAYLISTS_TYPE, Recommendation, recommended_playlist_ids};

impl<T: Transport> AppleMusicClient<T> {
    /// Get the user's playlist recommendations as a tree.
    ///
    /// # Errors
    ///
    /// - [`AppleMusicError::MissingUserToken`](crate::AppleMusicError::MissingUserToken) — no user token configured
    /// - [`AppleMusicError::UnexpectedStatus`](crate::AppleMusicError::UnexpectedStatus) — status other than 200
    pub fn recommendations(&self) -> Result<Vec<Recommendation>> {
        self.require_user_token()?;
        let resp = expect_status(
            self.get("/me/recommendations", &[("type", PLAYLISTS_TYPE)])?,
            200,
        )?;
        Ok(decode::<DataResponse<Recommendation>>(&resp)?.data)
    }

    /// Get the ids of all recommended playlists, depth-first.
    pub fn recommended_playlist_ids(&self) -> Result<Vec<String>> {
        Ok(recommended_playlist_ids(&self.recommendations()?))
    }
}
