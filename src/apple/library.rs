use crate::{
    AmpError,
    types::{CreatePlaylistRequest, PlaylistMetadata, ResponseRoot, Song, TrackReference},
};

use super::{
    LibraryApi,
    client::{AppleMusicClient, check_status},
};

impl LibraryApi for AppleMusicClient {
    async fn list_library_playlists(&self) -> Result<Vec<PlaylistMetadata>, AmpError> {
        let response = self
            .http
            .get(self.url("/me/library/playlists"))
            .send()
            .await?;
        let root = check_status(response)
            .await?
            .json::<ResponseRoot<PlaylistMetadata>>()
            .await?;

        Ok(root.data)
    }

    async fn list_playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Song>, AmpError> {
        let api_url = format!(
            "/me/library/playlists/{id}/tracks",
            id = playlist_id
        );

        let response = self.http.get(self.url(&api_url)).send().await?;
        let root = check_status(response)
            .await?
            .json::<ResponseRoot<Song>>()
            .await?;

        Ok(root.data)
    }

    async fn create_library_playlist(
        &self,
        name: &str,
        description: &str,
        tracks: Vec<TrackReference>,
    ) -> Result<PlaylistMetadata, AmpError> {
        let body = CreatePlaylistRequest::new(name, description, tracks);

        let response = self
            .http
            .post(self.url("/me/library/playlists"))
            .json(&body)
            .send()
            .await?;
        let root = check_status(response)
            .await?
            .json::<ResponseRoot<PlaylistMetadata>>()
            .await?;

        root.data
            .into_iter()
            .next()
            .ok_or_else(|| AmpError::remote(None, "Service returned no playlist after create"))
    }
}
