//! Catalog song APIs.
//!
//! # Endpoints
//!
//! ## `search_songs` — `GET /v1/catalog/{storefront}/songs?ids=1,2,3`
//!
//! Looks up several songs at once. Ids unknown to the storefront are
//! silently dropped, so the response may contain fewer songs than requested.
//!
//! ## `song` — `GET /v1/catalog/{storefront}/songs/{id}`
//!
//! Response (both endpoints):
//! ```json
//! {
//!   "data": [{
//!     "id": "1440857781",
//!     "type": "songs",
//!     "attributes": {
//!       "name": "...", "albumName": "...", "artistName": "...",
//!       "url": "https://music.apple.com/jp/album/...",
//!       "artwork": { "url": "https://.../{w}x{h}bb.jpg", "bgColor": "...", "width": 3000, "height": 3000 },
//!       "previews": [{ "url": "https://audio-ssl.itunes.apple.com/..." }]
//!     }
//!   }]
//! }
//! ```

use crate::client::{AppleMusicClient, decode, expect_status, segment};
use crate::error::{AppleMusicError, Result};
use crate::transport::Transport;
use crate::types::{DataResponse, Song};

impl<T: Transport> AppleMusicClient<T> {
    /// Look up catalog songs by id in the configured storefront.
    ///
    /// Returns the songs the catalog knows about, which may be a subset of
    /// `ids`. An empty `ids` returns an empty list without a request.
    ///
    /// # Errors
    ///
    /// - [`AppleMusicError::UnexpectedStatus`] — status other than 200
    /// - [`AppleMusicError::Json`] — malformed response body
    pub fn search_songs<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Song>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let joined = join_ids(ids);
        let path = format!("/catalog/{}/songs", segment(self.storefront()));
        let resp = expect_status(self.get(&path, &[("ids", joined.as_str())])?, 200)?;
        Ok(decode::<DataResponse<Song>>(&resp)?.data)
    }

    /// Like [`search_songs`](Self::search_songs), returning only the ids
    /// that were found.
    pub fn search_song_ids<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<String>> {
        Ok(self
            .search_songs(ids)?
            .into_iter()
            .map(|song| song.id)
            .collect())
    }

    /// Get one catalog song by id.
    ///
    /// # Errors
    ///
    /// - [`AppleMusicError::SongNotFound`] — the response has no songs
    /// - [`AppleMusicError::UnexpectedStatus`] — status other than 200
    pub fn song(&self, id: &str) -> Result<Song> {
        let path = format!(
            "/catalog/{}/songs/{}",
            segment(self.storefront()),
            segment(id)
        );
        let resp = expect_status(self.get(&path, &[])?, 200)?;
        decode::<DataResponse<Song>>(&resp)?
            .data
            .into_iter()
            .next()
            .ok_or_else(|| AppleMusicError::SongNotFound(id.to_owned()))
    }
}

/// Join ids with commas for an `ids` query parameter.
pub(crate) fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",")
}
