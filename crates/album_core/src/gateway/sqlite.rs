//! SQLite implementation of the album table gateway.
//!
//! # Responsibility
//! - Translate gateway criteria and fields into SQL over `album`.
//! - Decode rows into `Album` records.
//!
//! # Invariants
//! - The connection must already carry the album schema (see `db::open_db`).
//! - `select` yields rows ordered by `id` ascending.

use super::{AlbumFields, Criteria, GatewayError, GatewayResult, ResultSet, TableGateway};
use crate::model::album::Album;
use rusqlite::{params, Connection, Row};

const ALBUM_TABLE: &str = "album";
const ALBUM_COLUMNS: &[&str] = &["id", "artist", "title"];

const ALBUM_SELECT_SQL: &str = "SELECT
    id,
    artist,
    title
FROM album";

/// SQLite-backed gateway borrowing a bootstrapped connection.
pub struct SqliteAlbumGateway<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAlbumGateway<'conn> {
    /// Constructs a gateway after checking the album table layout.
    pub fn try_new(conn: &'conn Connection) -> GatewayResult<Self> {
        ensure_album_table(conn)?;
        Ok(Self { conn })
    }
}

impl TableGateway for SqliteAlbumGateway<'_> {
    fn select(&self, criteria: &Criteria) -> GatewayResult<ResultSet> {
        let mut albums = Vec::new();
        match criteria {
            Criteria::All => {
                let mut stmt = self
                    .conn
                    .prepare(&format!("{ALBUM_SELECT_SQL} ORDER BY id ASC;"))?;
                let mut rows = stmt.query([])?;
                while let Some(row) = rows.next()? {
                    albums.push(parse_album_row(row)?);
                }
            }
            Criteria::Id(id) => {
                let mut stmt = self
                    .conn
                    .prepare(&format!("{ALBUM_SELECT_SQL} WHERE id = ?1 ORDER BY id ASC;"))?;
                let mut rows = stmt.query([id])?;
                while let Some(row) = rows.next()? {
                    albums.push(parse_album_row(row)?);
                }
            }
        }

        Ok(ResultSet::new(albums))
    }

    fn insert(&self, fields: &AlbumFields) -> GatewayResult<usize> {
        let changed = self.conn.execute(
            "INSERT INTO album (artist, title) VALUES (?1, ?2);",
            params![fields.artist.as_deref(), fields.title.as_deref()],
        )?;
        Ok(changed)
    }

    fn update(&self, fields: &AlbumFields, criteria: &Criteria) -> GatewayResult<usize> {
        let changed = match criteria {
            Criteria::All => self.conn.execute(
                "UPDATE album SET artist = ?1, title = ?2;",
                params![fields.artist.as_deref(), fields.title.as_deref()],
            )?,
            Criteria::Id(id) => self.conn.execute(
                "UPDATE album SET artist = ?1, title = ?2 WHERE id = ?3;",
                params![fields.artist.as_deref(), fields.title.as_deref(), id],
            )?,
        };
        Ok(changed)
    }

    fn delete(&self, criteria: &Criteria) -> GatewayResult<usize> {
        let changed = match criteria {
            Criteria::All => self.conn.execute("DELETE FROM album;", [])?,
            Criteria::Id(id) => self.conn.execute("DELETE FROM album WHERE id = ?1;", [id])?,
        };
        Ok(changed)
    }
}

fn parse_album_row(row: &Row<'_>) -> GatewayResult<Album> {
    Ok(Album {
        id: Some(row.get("id")?),
        artist: row.get("artist")?,
        title: row.get("title")?,
    })
}

fn ensure_album_table(conn: &Connection) -> GatewayResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [ALBUM_TABLE],
        |row| row.get(0),
    )?;
    if exists == 0 {
        return Err(GatewayError::MissingRequiredTable(ALBUM_TABLE));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let present = stmt
        .query_map([ALBUM_TABLE], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    for &column in ALBUM_COLUMNS {
        if !present.iter().any(|name| name == column) {
            return Err(GatewayError::MissingRequiredColumn {
                table: ALBUM_TABLE,
                column,
            });
        }
    }

    Ok(())
}
