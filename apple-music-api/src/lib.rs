//! Apple Music API client library.
//!
//! Provides authenticated, blocking access to the Apple Music REST API:
//! catalog songs, charts, storefronts and playlists, plus the signed-in
//! user's ratings, recommendations and library.
//!
//! # Authentication
//!
//! Every request carries a developer token (`Authorization: Bearer ...`).
//! Endpoints under `/me` additionally need a `Music-User-Token`; calling them
//! without one fails with [`AppleMusicError::MissingUserToken`] before any
//! request is sent.
//!
//! ```no_run
//! use apple_music_api::{AppleMusicClient, ClientConfig, Rating};
//!
//! let config = ClientConfig::new("DEVELOPER_TOKEN")
//!     .with_user_token("MUSIC_USER_TOKEN")
//!     .with_storefront("jp");
//! let client = AppleMusicClient::new(config).unwrap();
//!
//! let song = client.song("1440857781").unwrap();
//! client.set_rating(Rating::Like, &song.id).unwrap();
//! ```
//!
//! # API endpoint mapping
//!
//! | Method                                          | Endpoint                                   | Success |
//! |-------------------------------------------------|--------------------------------------------|---------|
//! | [`AppleMusicClient::search_songs`]              | `GET /catalog/{sf}/songs?ids=`             | 200     |
//! | [`AppleMusicClient::song`]                      | `GET /catalog/{sf}/songs/{id}`             | 200     |
//! | [`AppleMusicClient::storefronts`]               | `GET /storefronts`                         | 200     |
//! | [`AppleMusicClient::song_charts`]               | `GET /catalog/{sf}/charts?types=songs`     | 200     |
//! | [`AppleMusicClient::catalog_playlists`]         | `GET /catalog/{sf}/playlists?ids=`         | 200     |
//! | [`AppleMusicClient::recommendations`]           | `GET /me/recommendations?type=playlists`   | 200     |
//! | [`AppleMusicClient::rating`]                    | `GET /me/ratings/songs/{id}`               | 200/404 |
//! | [`AppleMusicClient::set_rating`]                | `DELETE` + `PUT /me/ratings/songs/{id}`    | 204, 200|
//! | [`AppleMusicClient::add_song_to_library`]       | `POST /me/library?ids[songs]=`             | 202     |
//! | [`AppleMusicClient::library_playlists`]         | `GET /me/library/playlists`                | 200     |
//! | [`AppleMusicClient::create_playlist`]           | `POST /me/library/playlists`               | 201     |
//! | [`AppleMusicClient::add_tracks`]                | `POST /me/library/playlists/{id}/tracks`   | 201     |
//!
//! Nothing is retried or cached, and chart `next` links are not followed.
//!
//! # Logging
//!
//! Requests are logged with [`tracing`] at `debug` level and responses at
//! `trace` level. The library never installs a subscriber.

pub mod auth;
mod chart;
pub mod client;
pub mod config;
pub mod error;
mod library;
#[cfg(test)]
mod mock;
mod playlist;
mod rating;
mod recommendation;
mod song;
mod storefront;
pub mod transport;
pub mod types;

pub use auth::Credentials;
pub use chart::ChartQuery;
pub use client::AppleMusicClient;
pub use config::ClientConfig;
pub use error::{AppleMusicError, Result};
pub use playlist::MAX_CATALOG_PLAYLIST_IDS;
pub use transport::Transport;
pub use types::{
    Artwork, CatalogPlaylist, Chart, LibraryPlaylist, MediaType, Preview, Rating,
    Recommendation, Song, Storefront,
};
