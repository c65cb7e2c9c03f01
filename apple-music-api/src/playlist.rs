//! Catalog playlist API.
//!
//! Endpoint: `GET /v1/catalog/{storefront}/playlists?ids=pl.a,pl.b`
//!
//! The API accepts at most 25 ids per request; longer inputs are truncated
//! to the first 25 before the request is built.
//!
//! Response:
//! ```json
//! {
//!   "data": [{
//!     "id": "pl.f4d106fed2bd41149aaacabb233eb5eb",
//!     "type": "playlists",
//!     "relationships": {
//!       "tracks": { "data": [ { "id": "1440857781", "type": "songs" }, ... ] }
//!     }
//!   }]
//! }
//! ```

use crate::client::{AppleMusicClient, decode, expect_status, segment};
use crate::error::Result;
use crate::song::join_ids;
use crate::transport::Transport;
use crate::types::{CatalogPlaylist, DataResponse, playlist_and_track_ids};

/// Maximum number of playlist ids the catalog accepts in one request.
pub const MAX_CATALOG_PLAYLIST_IDS: usize = 25;

impl<T: Transport> AppleMusicClient<T> {
    /// Get catalog playlists with their track references.
    ///
    /// Only the first [`MAX_CATALOG_PLAYLIST_IDS`] ids are requested. An
    /// empty `ids` returns an empty list without a request.
    pub fn catalog_playlists<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<CatalogPlaylist>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids = &ids[..ids.len().min(MAX_CATALOG_PLAYLIST_IDS)];
        let joined = join_ids(ids);
        let path = format!("/catalog/{}/playlists", segment(self.storefront()));
        let resp = expect_status(self.get(&path, &[("ids", joined.as_str())])?, 200)?;
        Ok(decode::<DataResponse<CatalogPlaylist>>(&resp)?.data)
    }

    /// For each returned playlist, its own id followed by the ids of all its
    /// tracks, in response order.
    pub fn songs_from_playlists<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<String>> {
        Ok(playlist_and_track_ids(&self.catalog_playlists(ids)?))
    }
}
