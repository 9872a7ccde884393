use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

/// A playlist in the user's library, as returned by `/me/library/playlists`.
///
/// Only `id`, `attributes.name` and `attributes.description` are interpreted.
/// Every other member is carried through `extra` so a snapshot keeps what the
/// service sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistMetadata {
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default)]
    pub attributes: PlaylistAttributes,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlaylistMetadata {
    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    /// The standard-form description, or an empty string.
    pub fn description(&self) -> &str {
        self.attributes
            .description
            .as_ref()
            .and_then(|d| d.standard.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistAttributes {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Editorial notes attached to a playlist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Description {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
}

/// A track of a library playlist. Catalog (`songs`) and library
/// (`library-songs`) items share this shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Song {
    /// A string attribute such as `name` or `artistName`, if the service sent one.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }
}

/// The unit of backup and restore: one playlist and its ordered tracks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "Playlist")]
    pub playlist: PlaylistMetadata,
    #[serde(rename = "Songs", default, deserialize_with = "null_as_empty")]
    pub songs: Vec<Song>,
}

// Snapshots of empty playlists may carry `"Songs": null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Song>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Song>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The `(id, type)` pair the create endpoint needs to attach a track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackReference {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Envelope of every Apple Music API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRoot<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub attributes: CreatePlaylistAttributes,
    pub relationships: CreatePlaylistRelationships,
}

impl CreatePlaylistRequest {
    pub fn new(name: &str, description: &str, tracks: Vec<TrackReference>) -> Self {
        CreatePlaylistRequest {
            attributes: CreatePlaylistAttributes {
                name: name.to_string(),
                description: description.to_string(),
            },
            relationships: CreatePlaylistRelationships {
                tracks: CreatePlaylistTracks { data: tracks },
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistAttributes {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRelationships {
    pub tracks: CreatePlaylistTracks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistTracks {
    pub data: Vec<TrackReference>,
}

/// Body of a non-success Apple Music API response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
}

#[derive(Tabled)]
pub struct SongTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub name: String,
    pub artist: String,
    pub album: String,
    #[tabled(rename = "type")]
    pub kind: String,
    pub id: String,
}
