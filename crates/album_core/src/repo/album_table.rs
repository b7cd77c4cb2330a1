//! Album repository over an injected table gateway.
//!
//! # Responsibility
//! - Provide fetch-all, fetch-by-id, save and delete for albums.
//! - Decide insert versus update from the presence of `Album::id`.
//!
//! # Invariants
//! - An empty id lookup is reported as `AlbumError::NotFound`.
//! - Gateway failures pass through unchanged inside `AlbumError::Gateway`.
//! - Insert and update never write the `id` column.

use crate::gateway::{Criteria, GatewayError, ResultSet, TableGateway};
use crate::model::album::{Album, AlbumId};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, AlbumError>;

/// Error returned by `AlbumTable` operations.
#[derive(Debug)]
pub enum AlbumError {
    NotFound(AlbumId),
    Gateway(GatewayError),
}

impl Display for AlbumError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "Could not find row {id}"),
            Self::Gateway(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AlbumError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Gateway(err) => Some(err),
        }
    }
}

impl From<GatewayError> for AlbumError {
    fn from(value: GatewayError) -> Self {
        Self::Gateway(value)
    }
}

/// Data access object for the `album` table.
pub struct AlbumTable<G: TableGateway> {
    gateway: G,
}

impl<G: TableGateway> AlbumTable<G> {
    /// Creates a repository using the provided gateway.
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Returns the injected gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Returns every row exactly as the gateway produced it.
    pub fn fetch_all(&self) -> RepoResult<ResultSet> {
        Ok(self.gateway.select(&Criteria::All)?)
    }

    /// Gets one album by id.
    ///
    /// When the gateway yields more than one row the first one wins.
    pub fn get_album(&self, id: AlbumId) -> RepoResult<Album> {
        let rows = self.gateway.select(&Criteria::Id(id))?;
        if rows.len() > 1 {
            warn!(
                "event=album_get module=repo status=ambiguous id={} rows={}",
                id,
                rows.len()
            );
        }

        rows.into_first().ok_or(AlbumError::NotFound(id))
    }

    /// Inserts a new album or updates an existing one.
    ///
    /// # Contract
    /// - `id == None`: inserts `{artist, title}`.
    /// - `id == Some(id)`: requires the row to exist, then updates
    ///   `{artist, title}` where `id` matches.
    pub fn save_album(&self, album: &Album) -> RepoResult<()> {
        let fields = album.fields();

        match album.id {
            None => {
                self.gateway.insert(&fields)?;
                debug!("event=album_save module=repo status=ok mode=insert");
            }
            Some(id) => {
                self.get_album(id)?;
                self.gateway.update(&fields, &Criteria::Id(id))?;
                debug!("event=album_save module=repo status=ok mode=update id={id}");
            }
        }

        Ok(())
    }

    /// Deletes the album with `id`. Deleting a missing id is not an error.
    pub fn delete_album(&self, id: AlbumId) -> RepoResult<()> {
        let changed = self.gateway.delete(&Criteria::Id(id))?;
        debug!("event=album_delete module=repo status=ok id={id} rows={changed}");
        Ok(())
    }
}
