use album_core::AlbumId;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "List, add, edit and delete albums in a SQLite catalogue"
)]
pub struct Cli {
    #[arg(
        long,
        env = "ALBUM_DB",
        default_value = "album.db",
        value_name = "PATH",
        help = "SQLite database file, created on first use"
    )]
    pub db: String,

    #[arg(
        long,
        env = "ALBUM_LOG_LEVEL",
        value_name = "LEVEL",
        value_parser = parse_level,
        help = "off|error|warn|info|debug|trace; defaults to debug in debug builds, info otherwise"
    )]
    pub log_level: Option<LevelFilter>,

    #[arg(
        long,
        env = "ALBUM_LOG_DIR",
        value_name = "DIR",
        help = "Absolute directory for rotating log files; logging is off when unset"
    )]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    #[command(about = "Print every album as id, artist and title")]
    List,
    #[command(about = "Print one album")]
    Get { id: AlbumId },
    #[command(about = "Insert a new album and print its id")]
    Add { artist: String, title: String },
    #[command(about = "Replace artist and title of an existing album")]
    Edit {
        id: AlbumId,
        artist: String,
        title: String,
    },
    #[command(about = "Delete an album; deleting a missing id succeeds")]
    Delete { id: AlbumId },
}

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    value.parse().map_err(|_| {
        format!("unknown log level `{value}`; expected off|error|warn|info|debug|trace")
    })
}
