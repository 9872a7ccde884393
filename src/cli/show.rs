use std::path::Path;

use tabled::Table;

use crate::{AmpError, info, snapshot, utils, warning};

/// Prints the playlist stored in a snapshot file and its tracks as a table.
pub async fn show(file: &Path) -> Result<(), AmpError> {
    let snapshot = snapshot::load(file).await?;
    let playlist = &snapshot.playlist;

    info!("{} ({})", playlist.name(), playlist.id);
    if !playlist.description().is_empty() {
        println!("{}", playlist.description());
    }

    if snapshot.songs.is_empty() {
        warning!("Snapshot has no tracks");
        return Ok(());
    }

    let table = Table::new(utils::song_table_rows(&snapshot.songs));
    println!("{}", table);

    Ok(())
}
