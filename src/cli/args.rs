use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
    error::ErrorKind,
};
use clap_complete::{Shell, generate};

use crate::{AmpError, Res, apple::AppleMusicClient, config::Config};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
pub struct Cli {
    /// Config file location (default ~/.amp.json)
    #[clap(long, short, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write every library playlist to playlist.<id>.json
    Backup(BackupOptions),

    /// Create a new library playlist from a snapshot file
    Restore(RestoreOptions),

    /// Print the contents of a snapshot file
    Show(ShowOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct BackupOptions {
    /// Directory the snapshot files are written to
    #[clap(long, default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct RestoreOptions {
    /// Snapshot file written by `amp backup`
    pub file: Option<PathBuf>,

    /// Name for the new playlist (defaults to the stored name)
    pub name: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowOptions {
    /// Snapshot file written by `amp backup`
    pub file: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    pub shell: Shell,
}

/// Parses the command line.
///
/// `--help` and `--version` are returned as-is so the caller can print them.
/// Every other parse failure becomes [`AmpError::Usage`], which exits cleanly.
pub fn parse_args<I, T>(args: I) -> Result<Cli, ParseOutcome>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ParseOutcome::Display(e),
        _ => ParseOutcome::Failed(AmpError::Usage(e.to_string().trim_end().to_string())),
    })
}

/// Why [`parse_args`] did not produce a [`Cli`].
#[derive(Debug)]
pub enum ParseOutcome {
    /// Help or version text was requested.
    Display(clap::Error),
    Failed(AmpError),
}

async fn connect(config_path: Option<&PathBuf>) -> Res<AppleMusicClient> {
    let config = Config::load(config_path.map(PathBuf::as_path)).await?;
    AppleMusicClient::new(&config)
}

/// Dispatches a parsed command line.
///
/// Credentials are only loaded by commands that talk to Apple Music, after
/// their own arguments were checked.
pub async fn run(cli: Cli) -> Res<()> {
    match cli.command {
        Command::Backup(opt) => {
            let client = connect(cli.config.as_ref()).await?;
            super::backup(&client, &opt.output_dir).await?;
        }
        Command::Restore(opt) => {
            if opt.file.is_none() {
                return Err(AmpError::Usage(super::RESTORE_USAGE.to_string()));
            }
            let client = connect(cli.config.as_ref()).await?;
            super::restore(&client, opt.file.as_deref(), opt.name.as_deref()).await?;
        }
        Command::Show(opt) => super::show(&opt.file).await?,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }

    Ok(())
}
