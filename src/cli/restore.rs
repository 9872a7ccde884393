use std::path::Path;

use crate::{AmpError, apple::LibraryApi, info, snapshot, success, types::PlaylistMetadata, utils};

pub const RESTORE_USAGE: &str = "Usage: amp [--config FILE] restore <FILE> [NAME]";

/// Recreates the playlist stored in `file` as a new library playlist.
///
/// A non-empty `name` replaces the stored playlist name. Without a `file` no
/// request is made and [`AmpError::Usage`] is returned.
pub async fn restore<A: LibraryApi>(
    api: &A,
    file: Option<&Path>,
    name: Option<&str>,
) -> Result<PlaylistMetadata, AmpError> {
    let Some(file) = file else {
        return Err(AmpError::Usage(RESTORE_USAGE.to_string()));
    };

    let snapshot = snapshot::load(file).await?;

    let name = utils::playlist_name(&snapshot, name);
    let description = snapshot.playlist.description();
    let tracks = utils::track_references(&snapshot.songs);
    let track_count = tracks.len();

    info!("Creating playlist {} with {} tracks", name, track_count);

    let created = api
        .create_library_playlist(&name, description, tracks)
        .await?;

    success!(
        "Created playlist [ name: {}, id: {} ] with {} tracks",
        created.name(),
        created.id,
        track_count
    );

    Ok(created)
}
