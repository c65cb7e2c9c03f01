//! The network seam between [`AppleMusicClient`](crate::AppleMusicClient)
//! and the HTTP stack.
//!
//! The client builds a fully-formed [`Request`] (URL, headers, JSON body) and
//! hands it to a [`Transport`], which returns the raw status code and body.
//! Status interpretation and JSON decoding stay in the client, so any
//! transport (the default [`reqwest::blocking::Client`], a proxy, a test
//! double) sees exactly the same requests.

use crate::error::Result;
use reqwest::header::CONTENT_TYPE;
pub use reqwest::{Method, Url};

/// An outgoing API request.
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method (`GET`, `POST`, `PUT`, `DELETE`).
    pub method: Method,
    /// Absolute URL including query string.
    pub url: Url,
    /// Headers attached to the request, in insertion order.
    pub headers: Vec<(&'static str, String)>,
    /// Serialized JSON body, if the endpoint takes one.
    pub body: Option<String>,
}

impl Request {
    /// Look up a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Look up a decoded query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }
}

/// A raw API response.
#[derive(Debug, Clone, Default)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes (empty for `202`/`204` responses).
    pub body: Vec<u8>,
}

/// Performs one HTTP round trip.
///
/// Implementations must not retry and must not interpret the status code;
/// a timeout or connection failure is returned as an error.
pub trait Transport: Send + Sync {
    fn send(&self, request: Request) -> Result<Response>;
}

impl Transport for reqwest::blocking::Client {
    fn send(&self, request: Request) -> Result<Response> {
        let mut req = self.request(request.method, request.url);
        for (name, value) in request.headers {
            req = req.header(name, value);
        }
        if let Some(body) = request.body {
            req = req.header(CONTENT_TYPE, "application/json").body(body);
        }

        let resp = req.send()?;
        let status = resp.status().as_u16();
        let body = resp.bytes()?.to_vec();
        Ok(Response { status, body })
    }
}
