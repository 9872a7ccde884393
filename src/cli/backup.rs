use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{AmpError, apple::LibraryApi, info, snapshot, success, types::Snapshot};

/// Writes one snapshot file per library playlist into `output_dir`.
///
/// Playlists are processed in the order the service lists them. The first
/// failed request or write stops the run; files written before that point are
/// left in place.
pub async fn backup<A: LibraryApi>(api: &A, output_dir: &Path) -> Result<Vec<PathBuf>, AmpError> {
    async_fs::create_dir_all(output_dir).await?;

    let playlists = api.list_library_playlists().await?;
    info!("Found {} playlists", playlists.len());

    let pb = ProgressBar::new(playlists.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} [{pos}/{len}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut written = Vec::with_capacity(playlists.len());
    for playlist in playlists {
        pb.set_message(format!("Fetching tracks of {}", playlist.name()));

        let songs = match api.list_playlist_tracks(&playlist.id).await {
            Ok(songs) => songs,
            Err(e) => {
                pb.abandon();
                return Err(with_playlist_context(e, &playlist.id));
            }
        };

        let snapshot = Snapshot { playlist, songs };
        let path = match snapshot::persist(output_dir, &snapshot).await {
            Ok(path) => path,
            Err(e) => {
                pb.abandon();
                return Err(e);
            }
        };

        pb.println(format!(
            "Wrote playlist {} ({} tracks) to {}",
            snapshot.playlist.name(),
            snapshot.songs.len(),
            path.display()
        ));
        pb.inc(1);
        written.push(path);
    }

    pb.finish_and_clear();
    success!("Backed up {} playlists", written.len());

    Ok(written)
}

fn with_playlist_context(err: AmpError, playlist_id: &str) -> AmpError {
    match err {
        AmpError::Remote { status, message } => AmpError::Remote {
            status,
            message: format!("Failed to get songs for playlist {}: {}", playlist_id, message),
        },
        other => other,
    }
}
