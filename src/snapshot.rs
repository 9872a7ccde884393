use std::path::{Path, PathBuf};

use crate::{AmpError, types::Snapshot, utils};

/// Encodes a snapshot the way it is stored on disk: two-space indented JSON
/// terminated by a newline.
pub fn encode(snapshot: &Snapshot) -> Result<String, AmpError> {
    let mut json = serde_json::to_string_pretty(snapshot)?;
    json.push('\n');
    Ok(json)
}

pub fn decode(json: &str) -> Result<Snapshot, AmpError> {
    Ok(serde_json::from_str(json)?)
}

/// Path of the snapshot file for `playlist_id` inside `dir`.
pub fn path_for(dir: &Path, playlist_id: &str) -> PathBuf {
    dir.join(utils::snapshot_file_name(playlist_id))
}

/// Writes `snapshot` into `dir` and returns the file path.
///
/// The file is created or truncated, so rewriting an unchanged playlist yields
/// byte-identical content.
pub async fn persist(dir: &Path, snapshot: &Snapshot) -> Result<PathBuf, AmpError> {
    let path = path_for(dir, &snapshot.playlist.id);
    let json = encode(snapshot)?;
    async_fs::write(&path, json).await?;
    Ok(path)
}

pub async fn load(path: &Path) -> Result<Snapshot, AmpError> {
    let json = async_fs::read_to_string(path).await?;
    decode(&json)
}
