//! Personal song rating APIs.
//!
//! Requires a user token.
//!
//! # Endpoints
//!
//! ## `rating` — `GET /v1/me/ratings/songs/{id}`
//!
//! ```json
//! { "data": [ { "id": "1440857781", "type": "ratings", "attributes": { "value": 1 } } ] }
//! ```
//!
//! A song the user never rated answers `404`, which maps to
//! [`Rating::Neutral`].
//!
//! ## `set_rating` — `DELETE` then `PUT /v1/me/ratings/songs/{id}`
//!
//! The API has no "set" verb: a neutral rating is the absence of a rating
//! record. Setting a rating therefore always deletes the existing record
//! (`204`, or `404` if there was none) and, for like/dislike, creates a new
//! one with:
//!
//! ```json
//! { "type": "rating", "attributes": { "value": 1 } }
//! ```
//!
//! The `PUT` answers `200` with the same envelope as `GET`.

use crate::client::{AppleMusicClient, decode, expect_status, segment};
use crate::error::{AppleMusicError, Result};
use crate::transport::{Method, Transport};
use crate::types::{DataResponse, Rating, RatingResource};
use serde::Serialize;
use tracing::debug;

/// Body of the rating `PUT`.
#[derive(Debug, Serialize)]
struct RatingRequest {
    #[serde(rename = "type")]
    kind: &'static str,
    attributes: RatingRequestAttributes,
}

#[derive(Debug, Serialize)]
struct RatingRequestAttributes {
    value: Rating,
}

impl<T: Transport> AppleMusicClient<T> {
    /// Get the user's rating for a catalog song.
    ///
    /// Returns [`Rating::Neutral`] when the song has no rating (`404`, or
    /// an empty `data` list).
    ///
    /// # Errors
    ///
    /// - [`AppleMusicError::MissingUserToken`] — no user token configured
    /// - [`AppleMusicError::UnexpectedStatus`] — status other than 200/404
    pub fn rating(&self, song_id: &str) -> Result<Rating> {
        self.require_user_token()?;
        let resp = self.get(&rating_path(song_id), &[])?;
        match resp.status {
            200 => Ok(decode::<DataResponse<RatingResource>>(&resp)?.rating()),
            404 => Ok(Rating::Neutral),
            code => Err(AppleMusicError::UnexpectedStatus { code }),
        }
    }

    /// Set the user's rating for a catalog song and return the stored value.
    ///
    /// Issues a `DELETE` first; the `PUT` for like/dislike is sent only after
    /// the delete succeeded. Neutral sends no `PUT`.
    pub fn set_rating(&self, rating: Rating, song_id: &str) -> Result<Rating> {
        self.require_user_token()?;
        self.delete_rating(song_id)?;
        match rating {
            Rating::Like | Rating::Dislike => self.put_rating(rating, song_id),
            Rating::Neutral => Ok(Rating::Neutral),
        }
    }

    fn delete_rating(&self, song_id: &str) -> Result<()> {
        let resp = self.delete(&rating_path(song_id))?;
        match resp.status {
            204 => Ok(()),
            404 => {
                debug!(song_id, "no rating to delete");
                Ok(())
            }
            code => Err(AppleMusicError::UnexpectedStatus { code }),
        }
    }

    fn put_rating(&self, rating: Rating, song_id: &str) -> Result<Rating> {
        let body = RatingRequest {
            kind: "rating",
            attributes: RatingRequestAttributes { value: rating },
        };
        let resp = self.send(Method::PUT, &rating_path(song_id), &[], Some(&body))?;
        let resp = expect_status(resp, 200)?;
        Ok(decode::<DataResponse<RatingResource>>(&resp)?.rating())
    }
}

fn rating_path(song_id: &str) -> String {
    format!("/me/ratings/songs/{}", segment(song_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockTransport, client, user_client};

    const LIKE: &str = r#"{"data":[{"id":"1","type":"ratings","attributes":{"value":1}}]}"#;
    const DISLIKE: &str = r#"{"data":[{"id":"1","type":"ratings","attributes":{"value":-1}}]}"#;

    #[test]
    fn get_decodes_value() {
        let c = user_client(MockTransport::new().respond(200, DISLIKE));
        assert_eq!(c.rating("1").unwrap(), Rating::Dislike);
        let req = c.transport().last_request();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.url.path(), "/v1/me/ratings/songs/1");
    }

    #[test]
    fn get_404_is_neutral() {
        let c = user_client(MockTransport::new().respond(404, ""));
        assert_eq!(c.rating("1").unwrap(), Rating::Neutral);
    }

    #[test]
    fn get_empty_data_is_neutral() {
        let c = user_client(MockTransport::new().respond(200, r#"{"data":[]}"#));
        assert_eq!(c.rating("1").unwrap(), Rating::Neutral);
    }

    #[test]
    fn get_other_status_fails() {
        let c = user_client(MockTransport::new().respond(500, ""));
        assert!(matches!(
            c.rating("1").unwrap_err(),
            AppleMusicError::UnexpectedStatus { code: 500 }
        ));
    }

    #[test]
    fn set_neutral_only_deletes() {
        let c = user_client(MockTransport::new().respond(204, ""));
        assert_eq!(c.set_rating(Rating::Neutral, "1").unwrap(), Rating::Neutral);
        assert_eq!(c.transport().methods(), vec![Method::DELETE]);
    }

    #[test]
    fn set_like_deletes_then_puts() {
        let c = user_client(MockTransport::new().respond(204, "").respond(200, LIKE));
        assert_eq!(c.set_rating(Rating::Like, "1").unwrap(), Rating::Like);

        let requests = c.transport().requests();
        assert_eq!(c.transport().methods(), vec![Method::DELETE, Method::PUT]);
        assert_eq!(requests[0].url.path(), "/v1/me/ratings/songs/1");
        assert_eq!(requests[1].url.path(), "/v1/me/ratings/songs/1");
        assert_eq!(
            requests[1].body.as_deref(),
            Some(r#"{"type":"rating","attributes":{"value":1}}"#)
        );
    }

    #[test]
    fn set_dislike_sends_negative_value() {
        let c = user_client(MockTransport::new().respond(204, "").respond(200, DISLIKE));
        assert_eq!(c.set_rating(Rating::Dislike, "1").unwrap(), Rating::Dislike);
        assert_eq!(c.transport().methods(), vec![Method::DELETE, Method::PUT]);
        assert_eq!(
            c.transport().last_request().body.as_deref(),
            Some(r#"{"type":"rating","attributes":{"value":-1}}"#)
        );
    }

    #[test]
    fn set_tolerates_missing_previous_rating() {
        let c = user_client(MockTransport::new().respond(404, "").respond(200, LIKE));
        assert_eq!(c.set_rating(Rating::Like, "1").unwrap(), Rating::Like);
        assert_eq!(c.transport().call_count(), 2);
    }

    #[test]
    fn failed_delete_skips_put() {
        let c = user_client(MockTransport::new().respond(500, ""));
        let err = c.set_rating(Rating::Like, "1").unwrap_err();
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(c.transport().methods(), vec![Method::DELETE]);
    }

    #[test]
    fn failed_put_is_reported() {
        let c = user_client(MockTransport::new().respond(204, "").respond(400, ""));
        assert_eq!(
            c.set_rating(Rating::Like, "1").unwrap_err().status_code(),
            Some(400)
        );
    }

    #[test]
    fn rating_calls_require_user_token() {
        let c = client(MockTransport::new());
        assert!(matches!(c.rating("1"), Err(AppleMusicError::MissingUserToken)));
        for rating in [Rating::Like, Rating::Neutral, Rating::Dislike] {
            assert!(matches!(
                c.set_rating(rating, "1"),
                Err(AppleMusicError::MissingUserToken)
            ));
        }
        assert_eq!(c.transport().call_count(), 0);
    }
}
