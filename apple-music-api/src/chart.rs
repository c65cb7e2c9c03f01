//! Chart API.
//!
//! Endpoint: `GET /v1/catalog/{storefront}/charts?types=songs&limit=20`
//!
//! Response:
//! ```json
//! {
//!   "results": {
//!     "songs": [{
//!       "chart": "most-played",
//!       "name": "トップソング",
//!       "href": "/v1/catalog/jp/charts?types=songs&limit=20",
//!       "next": "/v1/catalog/jp/charts?offset=20&types=songs",
//!       "data": [ { "id": "...", "type": "songs", "attributes": { ... } } ]
//!     }]
//!   }
//! }
//! ```
//!
//! `next` is exposed on [`Chart`] but never followed.

use crate::client::{AppleMusicClient, decode, expect_status, segment};
use crate::config::DEFAULT_STOREFRONT;
use crate::error::Result;
use crate::transport::Transport;
use crate::types::{Chart, ChartResponse};

/// Parameters of a song chart request.
///
/// The storefront is given per request and does not default to the client's
/// configured storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartQuery {
    pub storefront: String,
    /// Number of songs per chart.
    pub limit: u32,
}

impl Default for ChartQuery {
    fn default() -> Self {
        Self {
            storefront: DEFAULT_STOREFRONT.to_owned(),
            limit: 20,
        }
    }
}

impl<T: Transport> AppleMusicClient<T> {
    /// Get the song charts of a storefront.
    pub fn song_charts(&self, query: &ChartQuery) -> Result<Vec<Chart>> {
        Ok(self.fetch_charts(query)?.results.songs)
    }

    /// Get the ids of all charted songs, chart by chart.
    pub fn song_chart_ids(&self, query: &ChartQuery) -> Result<Vec<String>> {
        Ok(self.fetch_charts(query)?.ids())
    }

    fn fetch_charts(&self, query: &ChartQuery) -> Result<ChartResponse> {
        let path = format!("/catalog/{}/charts", segment(&query.storefront));
        let limit = query.limit.to_string();
        let resp = expect_status(
            self.get(&path, &[("types", "songs"), ("limit", limit.as_str())])?,
            200,
        )?;
        decode(&resp)
    }
}
