use crate::types::{Snapshot, Song, SongTableRow, TrackReference};

/// File name a playlist's snapshot is written to: `playlist.<id>.json`.
///
/// Path separators in the id are replaced so the file stays in the output
/// directory.
pub fn snapshot_file_name(playlist_id: &str) -> String {
    let id: String = playlist_id
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("playlist.{}.json", id)
}

pub fn track_reference(song: &Song) -> TrackReference {
    TrackReference {
        id: song.id.clone(),
        kind: song.kind.clone(),
    }
}

pub fn track_references(songs: &[Song]) -> Vec<TrackReference> {
    songs.iter().map(track_reference).collect()
}

/// The name a restored playlist gets: the override when it is non-empty,
/// otherwise the name stored in the snapshot.
pub fn playlist_name(snapshot: &Snapshot, name_override: Option<&str>) -> String {
    match name_override {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => snapshot.playlist.name().to_string(),
    }
}

pub fn song_table_rows(songs: &[Song]) -> Vec<SongTableRow> {
    songs
        .iter()
        .enumerate()
        .map(|(i, song)| SongTableRow {
            position: i + 1,
            name: song.attribute("name").unwrap_or("-").to_string(),
            artist: song.attribute("artistName").unwrap_or("-").to_string(),
            album: song.attribute("albumName").unwrap_or("-").to_string(),
            kind: song.kind.clone(),
            id: song.id.clone(),
        })
        .collect()
}
