//! Recording transport used by the unit tests.

use crate::client::AppleMusicClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::transport::{Method, Request, Response, Transport};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays queued responses in order and records every request it receives.
///
/// Panics if a request arrives with no response queued, so an unexpected
/// extra call fails the test loudly.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Response>>,
    requests: Mutex<Vec<Request>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        init_tracing();
        Self::default()
    }

    pub(crate) fn respond(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(Response {
            status,
            body: body.as_bytes().to_vec(),
        });
        self
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn last_request(&self) -> Request {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub(crate) fn methods(&self) -> Vec<Method> {
        self.requests().into_iter().map(|r| r.method).collect()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: Request) -> Result<Response> {
        self.requests.lock().unwrap().push(request);
        let resp = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected request: no response queued");
        Ok(resp)
    }
}

/// Client with a developer token only.
pub(crate) fn client(transport: MockTransport) -> AppleMusicClient<MockTransport> {
    AppleMusicClient::with_transport(ClientConfig::new("dev-token"), transport)
}

/// Client with both developer and user tokens.
pub(crate) fn user_client(transport: MockTransport) -> AppleMusicClient<MockTransport> {
    let config = ClientConfig::new("dev-token").with_user_token("user-token");
    AppleMusicClient::with_transport(config, transport)
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));
    let _ = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// A `songs` resource as returned by the catalog.
pub(crate) fn song_json(id: &str) -> String {
    format!(
        r#"{{
  "id": "{id}",
  "type": "songs",
  "href": "/v1/catalog/jp/songs/{id}",
  "attributes": {{
    "name": "Song {id}",
    "albumName": "Album",
    "artistName": "Artist",
    "url": "https://music.apple.com/jp/album/{id}",
    "artwork": {{
      "url": "https://is1-ssl.mzstatic.com/image/{id}/{{w}}x{{h}}bb.jpg",
      "bgColor": "ffffff",
      "width": 3000,
      "height": 3000
    }},
    "previews": [ {{ "url": "https://audio-ssl.itunes.apple.com/{id}.m4a" }} ]
  }}
}}"#
    )
}
