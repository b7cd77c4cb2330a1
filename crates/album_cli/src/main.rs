//! Command-line front end for the album catalogue.
//!
//! Each subcommand maps to one `AlbumTable` operation over a SQLite file.

mod args;

use album_core::db::open_db;
use album_core::{
    default_level, init_logging, Album, AlbumData, AlbumTable, LogConfig, SqliteAlbumGateway,
};
use args::{Cli, Command};
use clap::Parser;
use log::info;
use rusqlite::Connection;
use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

type CliResult = Result<(), Box<dyn Error>>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = run(cli, &mut io::stdout().lock());
    ExitCode::from(exit_status(result, &mut io::stderr().lock()))
}

fn run(cli: Cli, out: &mut impl Write) -> CliResult {
    if let Some(dir) = cli.log_dir {
        init_logging(LogConfig {
            level: cli.log_level.unwrap_or_else(default_level),
            dir,
        })?;
    }
    info!(
        "event=cli_start module=cli status=ok version={} db={}",
        album_core::core_version(),
        cli.db
    );

    let conn = open_db(&cli.db)?;
    execute(&conn, cli.command, out)
}

/// Runs one subcommand against a bootstrapped connection.
fn execute(conn: &Connection, command: Command, out: &mut impl Write) -> CliResult {
    let table = AlbumTable::new(SqliteAlbumGateway::try_new(conn)?);

    match command {
        Command::List => {
            for album in table.fetch_all()? {
                write_album(out, &album)?;
            }
        }
        Command::Get { id } => write_album(out, &table.get_album(id)?)?,
        Command::Add { artist, title } => {
            table.save_album(&Album::from(AlbumData {
                id: None,
                artist: Some(artist),
                title: Some(title),
            }))?;
            writeln!(out, "added {}", conn.last_insert_rowid())?;
        }
        Command::Edit { id, artist, title } => {
            let mut album = table.get_album(id)?;
            let mut data = album.get_array_copy();
            data.artist = Some(artist);
            data.title = Some(title);
            album.exchange_array(data);
            table.save_album(&album)?;
            writeln!(out, "updated {id}")?;
        }
        Command::Delete { id } => {
            table.delete_album(id)?;
            writeln!(out, "deleted {id}")?;
        }
    }

    Ok(())
}

/// Reports a failed run on `err` and maps it to the process exit status.
fn exit_status(result: CliResult, err: &mut impl Write) -> u8 {
    match result {
        Ok(()) => 0,
        Err(error) => {
            let _ = writeln!(err, "error: {error}");
            1
        }
    }
}

fn write_album(out: &mut impl Write, album: &Album) -> io::Result<()> {
    writeln!(
        out,
        "{}\t{}\t{}",
        album.id.map(|id| id.to_string()).unwrap_or_default(),
        album.artist.as_deref().unwrap_or_default(),
        album.title.as_deref().unwrap_or_default()
    )
}
