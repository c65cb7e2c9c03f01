//! Storefront API.
//!
//! Endpoint: `GET /v1/storefronts`
//!
//! Response:
//! ```json
//! {
//!   "data": [
//!     { "id": "jp", "type": "storefronts", "attributes": { "name": "Japan", "defaultLanguageTag": "ja-JP" } },
//!     ...
//!   ]
//! }
//! ```

use crate::client::{AppleMusicClient, decode, expect_status};
use crate::error::Result;
use crate::transport::Transport;
use crate::types::{DataResponse, Storefront};

impl<T: Transport> AppleMusicClient<T> {
    /// Get every storefront, unfiltered.
    pub fn storefronts(&self) -> Result<Vec<Storefront>> {
        let resp = expect_status(self.get("/storefronts", &[])?, 200)?;
        Ok(decode::<DataResponse<Storefront>>(&resp)?.data)
    }
}
