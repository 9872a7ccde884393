#![allow(dead_code)]

pub mod service;

use std::{collections::HashMap, sync::Mutex};

use amp::{
    AmpError,
    apple::LibraryApi,
    types::{Description, PlaylistAttributes, PlaylistMetadata, Song, TrackReference},
};
use serde_json::{Map, Value, json};

// Helper function to create a test playlist
pub fn create_test_playlist(id: &str, name: &str, description: Option<&str>) -> PlaylistMetadata {
    let mut extra = Map::new();
    extra.insert("canEdit".to_string(), Value::Bool(true));
    extra.insert("playParams".to_string(), json!({ "id": id, "kind": "playlist", "isLibrary": true }));

    PlaylistMetadata {
        id: id.to_string(),
        kind: Some("library-playlists".to_string()),
        href: Some(format!("/v1/me/library/playlists/{}", id)),
        attributes: PlaylistAttributes {
            name: name.to_string(),
            description: description.map(|d| Description {
                standard: Some(d.to_string()),
                short: None,
            }),
            extra,
        },
        extra: Map::new(),
    }
}

// Helper function to create a test song with display attributes
pub fn create_test_song(id: &str, kind: &str, name: &str) -> Song {
    let mut attributes = Map::new();
    attributes.insert("name".to_string(), Value::String(name.to_string()));
    attributes.insert("artistName".to_string(), Value::String("Test Artist".to_string()));
    attributes.insert("albumName".to_string(), Value::String("Test Album".to_string()));
    attributes.insert("durationInMillis".to_string(), json!(215000));

    Song {
        id: id.to_string(),
        kind: kind.to_string(),
        href: Some(format!("/v1/me/library/songs/{}", id)),
        attributes,
        extra: Map::new(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatedPlaylist {
    pub name: String,
    pub description: String,
    pub tracks: Vec<TrackReference>,
}

/// In-memory library that records every call made against it.
#[derive(Default)]
pub struct FakeLibrary {
    pub playlists: Vec<PlaylistMetadata>,
    pub tracks: HashMap<String, Vec<Song>>,
    pub failing_playlist: Option<String>,
    pub calls: Mutex<Vec<String>>,
    pub created: Mutex<Vec<CreatedPlaylist>>,
}

impl FakeLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_playlist(mut self, playlist: PlaylistMetadata, songs: Vec<Song>) -> Self {
        self.tracks.insert(playlist.id.clone(), songs);
        self.playlists.push(playlist);
        self
    }

    pub fn failing_on(mut self, playlist_id: &str) -> Self {
        self.failing_playlist = Some(playlist_id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<CreatedPlaylist> {
        self.created.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl LibraryApi for FakeLibrary {
    async fn list_library_playlists(&self) -> Result<Vec<PlaylistMetadata>, AmpError> {
        self.record("list_library_playlists".to_string());
        Ok(self.playlists.clone())
    }

    async fn list_playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Song>, AmpError> {
        self.record(format!("list_playlist_tracks:{}", playlist_id));
        if self.failing_playlist.as_deref() == Some(playlist_id) {
            return Err(AmpError::remote(Some(500), "Upstream Service Error"));
        }
        Ok(self.tracks.get(playlist_id).cloned().unwrap_or_default())
    }

    async fn create_library_playlist(
        &self,
        name: &str,
        description: &str,
        tracks: Vec<TrackReference>,
    ) -> Result<PlaylistMetadata, AmpError> {
        self.record(format!("create_library_playlist:{}", name));
        self.created.lock().unwrap().push(CreatedPlaylist {
            name: name.to_string(),
            description: description.to_string(),
            tracks,
        });
        Ok(create_test_playlist("p.created", name, Some(description)))
    }
}
