//! # Apple Music Integration Module
//!
//! This module is the boundary between amp and the Apple Music API. The backup and
//! restore pipelines only see the [`LibraryApi`] trait; [`AppleMusicClient`] is the
//! production implementation on top of `reqwest`.
//!
//! ## Authentication
//!
//! Apple Music library endpoints need two credentials on every request:
//! - `Authorization: Bearer <developer token>` identifies the application
//! - `Music-User-Token: <user token>` grants access to one user's library
//!
//! Both are installed as default headers when the client is built, so individual
//! calls never deal with them.
//!
//! ## API Coverage
//!
//! - `GET /me/library/playlists` - the user's library playlists (first page only)
//! - `GET /me/library/playlists/{id}/tracks` - tracks of one library playlist
//! - `POST /me/library/playlists` - create a playlist with tracks attached
//!
//! ## Error Handling
//!
//! Calls are made once. Any non-success status or transport failure becomes
//! [`AmpError::Remote`](crate::AmpError::Remote); when the body is an Apple Music
//! `errors` document its first entry is used as the message.

mod client;
mod library;

pub use client::AppleMusicClient;
pub use client::MUSIC_USER_TOKEN_HEADER;

use crate::{
    AmpError,
    types::{PlaylistMetadata, Song, TrackReference},
};

/// The three library operations the pipelines depend on.
#[allow(async_fn_in_trait)]
pub trait LibraryApi {
    async fn list_library_playlists(&self) -> Result<Vec<PlaylistMetadata>, AmpError>;

    async fn list_playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Song>, AmpError>;

    /// Creates a new library playlist and returns it with its assigned id.
    async fn create_library_playlist(
        &self,
        name: &str,
        description: &str,
        tracks: Vec<TrackReference>,
    ) -> Result<PlaylistMetadata, AmpError>;
}
