//! User library APIs.
//!
//! Requires a user token.
//!
//! # Endpoints
//!
//! ## `add_song_to_library` — `POST /v1/me/library?ids[songs]={id}`
//!
//! Answers `202 Accepted` with no body. The song appears in the library
//! asynchronously.
//!
//! ## `library_playlists` — `GET /v1/me/library/playlists`
//!
//! ```json
//! {
//!   "data": [{
//!     "id": "p.ZOAXxYvCzVJO",
//!     "type": "library-playlists",
//!     "href": "/v1/me/library/playlists/p.ZOAXxYvCzVJO",
//!     "attributes": { "name": "...", "artwork": { "url": "...", "width": 1200, "height": 1200 } }
//!   }]
//! }
//! ```
//!
//! ## `create_playlist` — `POST /v1/me/library/playlists`
//!
//! ```json
//! {
//!   "attributes": { "name": "Playlist name" },
//!   "relationships": { "tracks": { "data": [ { "id": "1440857781", "type": "songs" } ] } }
//! }
//! ```
//!
//! Answers `201 Created`.
//!
//! ## `add_tracks` — `POST /v1/me/library/playlists/{id}/tracks`
//!
//! ```json
//! { "data": [ { "id": "i.abc", "type": "library-songs" } ] }
//! ```
//!
//! Answers `201 Created`.

use crate::client::{AppleMusicClient, decode, expect_status, segment};
use crate::error::Result;
use crate::transport::{Method, Transport};
use crate::types::{DataResponse, LibraryPlaylist, MediaType};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct TrackRef<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    kind: MediaType,
}

#[derive(Debug, Serialize)]
struct TrackList<'a> {
    data: Vec<TrackRef<'a>>,
}

#[derive(Debug, Serialize)]
struct CreatePlaylistRequest<'a> {
    attributes: PlaylistAttributes<'a>,
    relationships: PlaylistRelationships<'a>,
}

#[derive(Debug, Serialize)]
struct PlaylistAttributes<'a> {
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct PlaylistRelationships<'a> {
    tracks: TrackList<'a>,
}

impl<T: Transport> AppleMusicClient<T> {
    /// Add a catalog song to the user's library.
    ///
    /// Success means the request was accepted; the library updates later.
    pub fn add_song_to_library(&self, song_id: &str) -> Result<()> {
        self.require_user_token()?;
        let resp = self.send::<()>(Method::POST, "/me/library", &[("ids[songs]", song_id)], None)?;
        expect_status(resp, 202)?;
        Ok(())
    }

    /// Get every playlist in the user's library.
    pub fn library_playlists(&self) -> Result<Vec<LibraryPlaylist>> {
        self.require_user_token()?;
        let resp = expect_status(self.get("/me/library/playlists", &[])?, 200)?;
        Ok(decode::<DataResponse<LibraryPlaylist>>(&resp)?.data)
    }

    /// Create a library playlist containing catalog songs, in order.
    pub fn create_playlist<S: AsRef<str>>(&self, name: &str, song_ids: &[S]) -> Result<()> {
        self.require_user_token()?;
        let body = CreatePlaylistRequest {
            attributes: PlaylistAttributes { name },
            relationships: PlaylistRelationships {
                tracks: TrackList {
                    data: song_ids
                        .iter()
                        .map(|id| TrackRef {
                            id: id.as_ref(),
                            kind: MediaType::Songs,
                        })
                        .collect(),
                },
            },
        };
        let resp = self.send(Method::POST, "/me/library/playlists", &[], Some(&body))?;
        expect_status(resp, 201)?;
        Ok(())
    }

    /// Append tracks to an existing library playlist.
    pub fn add_tracks<S: AsRef<str>>(
        &self,
        playlist_id: &str,
        tracks: &[(S, MediaType)],
    ) -> Result<()> {
        self.require_user_token()?;
        let body = TrackList {
            data: tracks
                .iter()
                .map(|(id, kind)| TrackRef {
                    id: id.as_ref(),
                    kind: *kind,
                })
                .collect(),
        };
        let path = format!("/me/library/playlists/{}/tracks", segment(playlist_id));
        let resp = self.send(Method::POST, &path, &[], Some(&body))?;
        expect_status(resp, 201)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppleMusicError;
    use crate::mock::{MockTransport, client, user_client};

    #[test]
    fn add_song_posts_id_query() {
        let c = user_client(MockTransport::new().respond(202, ""));
        c.add_song_to_library("1440857781").unwrap();

        let req = c.transport().last_request();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.url.path(), "/v1/me/library");
        assert_eq!(req.query_param("ids[songs]").as_deref(), Some("1440857781"));
        assert!(req.body.is_none());
    }

    #[test]
    fn add_song_requires_202() {
        let c = user_client(MockTransport::new().respond(200, ""));
        assert!(matches!(
            c.add_song_to_library("1").unwrap_err(),
            AppleMusicError::UnexpectedStatus { code: 200 }
        ));
    }

    #[test]
    fn library_playlists_decode() {
        let body = r#"{"data":[
            {"id":"p.1","type":"library-playlists","href":"/v1/me/library/playlists/p.1",
             "attributes":{"name":"Mix","artwork":{"url":"https://a/{w}x{h}.jpg","width":1200,"height":1200}}},
            {"id":"p.2","type":"library-playlists","href":"/v1/me/library/playlists/p.2",
             "attributes":{"name":"No cover"}}
        ]}"#;
        let c = user_client(MockTransport::new().respond(200, body));
        let playlists = c.library_playlists().unwrap();
        assert_eq!(playlists.len(), 2);
        assert_eq!(playlists[0].attributes.name, "Mix");
        assert!(playlists[0].attributes.artwork.is_some());
        assert!(playlists[1].attributes.artwork.is_none());
        assert_eq!(
            c.transport().last_request().url.path(),
            "/v1/me/library/playlists"
        );
    }

    #[test]
    fn create_playlist_body() {
        let c = user_client(MockTransport::new().respond(201, ""));
        c.create_playlist("Road trip", &["1", "2"]).unwrap();

        let req = c.transport().last_request();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.url.path(), "/v1/me/library/playlists");
        assert_eq!(
            req.body.as_deref(),
            Some(
                r#"{"attributes":{"name":"Road trip"},"relationships":{"tracks":{"data":[{"id":"1","type":"songs"},{"id":"2","type":"songs"}]}}}"#
            )
        );
    }

    #[test]
    fn create_playlist_escapes_quotes() {
        let c = user_client(MockTransport::new().respond(201, ""));
        c.create_playlist(r#"My "best" songs"#, &["1"]).unwrap();

        let body = c.transport().last_request().body.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["attributes"]["name"], r#"My "best" songs"#);
    }

    #[test]
    fn create_playlist_requires_201() {
        let c = user_client(MockTransport::new().respond(400, ""));
        assert_eq!(
            c.create_playlist("x", &["1"]).unwrap_err().status_code(),
            Some(400)
        );
    }

    #[test]
    fn add_tracks_body() {
        let c = user_client(MockTransport::new().respond(201, ""));
        c.add_tracks(
            "p.1",
            &[
                ("i.a", MediaType::LibrarySongs),
                ("123", MediaType::MusicVideos),
            ],
        )
        .unwrap();

        let req = c.transport().last_request();
        assert_eq!(req.url.path(), "/v1/me/library/playlists/p.1/tracks");
        assert_eq!(
            req.body.as_deref(),
            Some(r#"{"data":[{"id":"i.a","type":"library-songs"},{"id":"123","type":"music-videos"}]}"#)
        );
    }

    #[test]
    fn library_calls_require_user_token() {
        let c = client(MockTransport::new());
        assert!(matches!(
            c.add_song_to_library("1"),
            Err(AppleMusicError::MissingUserToken)
        ));
        assert!(matches!(
            c.library_playlists(),
            Err(AppleMusicError::MissingUserToken)
        ));
        assert!(matches!(
            c.create_playlist("x", &["1"]),
            Err(AppleMusicError::MissingUserToken)
        ));
        assert!(matches!(
            c.add_tracks("p.1", &[("1", MediaType::Songs)]),
            Err(AppleMusicError::MissingUserToken)
        ));
        assert_eq!(c.transport().call_count(), 0);
    }
}
