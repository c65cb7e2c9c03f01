//! Data types for Apple Music API requests and responses.
//!
//! Response types mirror the JSON resource objects returned by the API and
//! are deserialized with `serde`. Field names follow Rust conventions
//! (`snake_case`); the API's camelCase names are mapped with
//! `#[serde(rename_all = "camelCase")]`. Unknown fields are ignored.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Resource type tag of playlist resources.
pub const PLAYLISTS_TYPE: &str = "playlists";

/// The `{ "data": [...] }` envelope shared by most endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct DataResponse<T> {
    pub data: Vec<T>,
}

/// A typed reference to another resource.
///
/// API JSON fields: `id`, `type` (e.g. `songs`, `playlists`, `albums`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

// ---------------------------------------------------------------------------
// Songs

/// A catalog song.
///
/// Returned by [`AppleMusicClient::song`](crate::AppleMusicClient::song),
/// [`AppleMusicClient::search_songs`](crate::AppleMusicClient::search_songs)
/// and inside [`Chart`].
///
/// Two songs are equal when their ids are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    /// Catalog song id (e.g. `1440857781`).
    pub id: String,
    pub attributes: SongAttributes,
}

impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Song {}

impl Hash for Song {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Song metadata.
///
/// API JSON fields: `name`, `albumName`, `artistName`, `url`, `artwork`,
/// `previews`. Equality compares `url` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongAttributes {
    /// Song title.
    pub name: String,
    pub album_name: String,
    pub artist_name: String,
    /// Canonical `music.apple.com` URL.
    pub url: String,
    pub artwork: Artwork,
    /// Audio previews; absent for some region-locked songs.
    #[serde(default)]
    pub previews: Vec<Preview>,
}

impl PartialEq for SongAttributes {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for SongAttributes {}

impl Hash for SongAttributes {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}

/// Artwork image descriptor.
///
/// `url` is a template containing `{w}` and `{h}` placeholders; use
/// [`Artwork::url_for`] to get a concrete image URL. Equality compares `url`
/// only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub url: String,
    /// Average background color as a hex string (e.g. `f4f4f4`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    /// Maximum available width in pixels.
    pub width: u32,
    /// Maximum available height in pixels.
    pub height: u32,
}

impl Artwork {
    /// Fill the `{w}`/`{h}` placeholders of the URL template.
    pub fn url_for(&self, width: u32, height: u32) -> String {
        self.url
            .replace("{w}", &width.to_string())
            .replace("{h}", &height.to_string())
    }
}

impl PartialEq for Artwork {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for Artwork {}

impl Hash for Artwork {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}

/// Audio preview of a song. Equality compares `url` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    /// Direct AAC preview URL.
    pub url: String,
    /// HLS stream of the same preview, when offered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hls_url: Option<String>,
}

impl PartialEq for Preview {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for Preview {}

impl Hash for Preview {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}

// ---------------------------------------------------------------------------
// Storefronts

/// A regional catalog.
///
/// Returned by [`AppleMusicClient::storefronts`](crate::AppleMusicClient::storefronts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storefront {
    /// Storefront code (e.g. `jp`, `us`).
    pub id: String,
    pub attributes: StorefrontAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontAttributes {
    /// Localized storefront name (e.g. `Japan`).
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language_tag: Option<String>,
}

// ---------------------------------------------------------------------------
// Charts

/// A song chart.
///
/// API JSON path: `results.songs[]`. `next` is the path of the following
/// page; it is returned as-is and never followed by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    /// Chart identifier (e.g. `most-played`).
    pub chart: String,
    pub data: Vec<Song>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Localized chart name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartResponse {
    pub results: ChartResults,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartResults {
    #[serde(default)]
    pub songs: Vec<Chart>,
}

impl ChartResponse {
    /// Song ids across all charts, in chart order then song order.
    pub fn ids(&self) -> Vec<String> {
        self.results
            .songs
            .iter()
            .flat_map(|chart| chart.data.iter().map(|s| s.id.clone()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Playlists

/// A catalog playlist with the ids of its tracks.
///
/// Returned by [`AppleMusicClient::catalog_playlists`](crate::AppleMusicClient::catalog_playlists).
/// Only `relationships.tracks.data[].id`/`type` are modelled, not the full
/// track payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPlaylist {
    pub id: String,
    pub relationships: PlaylistRelationships,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRelationships {
    pub tracks: TrackRelationship,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRelationship {
    /// Songs or music videos, in playlist order.
    pub data: Vec<Resource>,
}

impl CatalogPlaylist {
    pub fn track_ids(&self) -> impl Iterator<Item = &str> {
        self.relationships.tracks.data.iter().map(|r| r.id.as_str())
    }
}

/// For each playlist: its own id followed by its track ids.
pub(crate) fn playlist_and_track_ids(playlists: &[CatalogPlaylist]) -> Vec<String> {
    playlists
        .iter()
        .flat_map(|p| std::iter::once(p.id.as_str()).chain(p.track_ids()))
        .map(str::to_owned)
        .collect()
}

/// A playlist in the user's library.
///
/// Returned by [`AppleMusicClient::library_playlists`](crate::AppleMusicClient::library_playlists).
///
/// API JSON fields: `id` (e.g. `p.ZOAXxYvCzVJO`), `href`, `attributes.name`,
/// `attributes.artwork` (absent for playlists without a cover).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryPlaylist {
    pub id: String,
    pub href: String,
    pub attributes: LibraryPlaylistAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryPlaylistAttributes {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork: Option<Artwork>,
}

/// Kind of track that can be added to a library playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaType {
    Songs,
    LibrarySongs,
    MusicVideos,
    LibraryMusicVideos,
}

impl MediaType {
    /// Return the resource type string sent to the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Songs => "songs",
            Self::LibrarySongs => "library-songs",
            Self::MusicVideos => "music-videos",
            Self::LibraryMusicVideos => "library-music-videos",
        }
    }
}

// ---------------------------------------------------------------------------
// Recommendations

/// A personal recommendation node.
///
/// Recommendations form a tree: a node may carry content resources
/// (playlists, albums, stations) and nested recommendation groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub relationships: RecommendationRelationships,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRelationships {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<Contents>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Recommendations>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contents {
    pub data: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub data: Vec<Recommendation>,
}

impl Recommendation {
    /// Playlist ids of this node and all nested nodes.
    ///
    /// See [`recommended_playlist_ids`] for the ordering.
    pub fn playlist_ids(&self) -> Vec<String> {
        recommended_playlist_ids(std::slice::from_ref(self))
    }
}

/// Collect the ids of `playlists` resources from a recommendation forest.
///
/// Traversal is depth-first: a node's own contents come before anything in
/// its nested recommendations, and siblings keep response order. Resources
/// of any other type are skipped.
pub fn recommended_playlist_ids(nodes: &[Recommendation]) -> Vec<String> {
    let mut ids = Vec::new();
    let mut stack: Vec<&Recommendation> = nodes.iter().rev().collect();

    while let Some(node) = stack.pop() {
        let rel = &node.relationships;
        if let Some(contents) = &rel.contents {
            ids.extend(
                contents
                    .data
                    .iter()
                    .filter(|r| r.kind == PLAYLISTS_TYPE)
                    .map(|r| r.id.clone()),
            );
        }
        if let Some(nested) = &rel.recommendations {
            stack.extend(nested.data.iter().rev());
        }
    }

    ids
}

// ---------------------------------------------------------------------------
// Ratings

/// A personal rating.
///
/// Serialized as the signed integer the API uses. A song without a rating
/// record is [`Rating::Neutral`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
#[repr(i8)]
pub enum Rating {
    Like = 1,
    #[default]
    Neutral = 0,
    Dislike = -1,
}

impl From<Rating> for i8 {
    fn from(rating: Rating) -> Self {
        rating as i8
    }
}

impl TryFrom<i8> for Rating {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Like),
            0 => Ok(Self::Neutral),
            -1 => Ok(Self::Dislike),
            other => Err(format!("invalid rating value: {other}")),
        }
    }
}

/// One `ratings` resource.
#[derive(Debug, Deserialize)]
pub(crate) struct RatingResource {
    pub attributes: RatingAttributes,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RatingAttributes {
    pub value: Rating,
}

impl DataResponse<RatingResource> {
    /// The first rating in the envelope, or neutral if there is none.
    pub fn rating(&self) -> Rating {
        self.data
            .first()
            .map_or(Rating::Neutral, |r| r.attributes.value)
    }
}
