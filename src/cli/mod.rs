//! # CLI Module
//!
//! User-facing command implementations for amp.
//!
//! - [`backup`] - Writes every library playlist to `playlist.<id>.json`
//! - [`restore`] - Creates a new library playlist from one snapshot file
//! - [`show`] - Prints a snapshot file as a table, no credentials needed
//! - [`parse_args`] / [`run`] - Command line parsing and dispatch used by the binary
//!
//! Commands that talk to Apple Music take any [`LibraryApi`](crate::apple::LibraryApi)
//! so they run the same against the real service and against test doubles.
//! Errors are returned, never handled here: the binary maps them to an exit code.
//! Malformed command lines are usage errors and exit with status 0.
//!
//! ```bash
//! amp backup                          # snapshot all playlists into the current directory
//! amp backup --output-dir ~/backups   # snapshot into a directory
//! amp restore playlist.p.abc.json     # recreate a playlist under its stored name
//! amp restore playlist.p.abc.json "Summer Mix"
//! amp show playlist.p.abc.json
//! ```

mod args;
mod backup;
mod restore;
mod show;

pub use args::{
    BackupOptions, Cli, Command, CompletionsOption, ParseOutcome, RestoreOptions, ShowOptions,
    parse_args, run,
};
pub use backup::backup;
pub use restore::RESTORE_USAGE;
pub use restore::restore;
pub use show::show;
