//! Album domain model.
//!
//! # Responsibility
//! - Define the in-memory record for one persisted album.
//! - Convert between the record and its keyed input shape.
//!
//! # Invariants
//! - A new `Album` has `id`, `artist` and `title` unset.
//! - `exchange_array` overwrites every field; absent keys reset to `None`.
//! - `id` is assigned by storage and never part of `AlbumFields`.

use serde::{Deserialize, Serialize};

/// Storage-assigned album identifier.
pub type AlbumId = i64;

/// One album as stored in the `album` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// `None` until the row has been persisted.
    pub id: Option<AlbumId>,
    pub artist: Option<String>,
    pub title: Option<String>,
}

/// Keyed input for bulk assignment.
///
/// A missing key deserializes to `None`, which `Album::exchange_array`
/// treats the same as an explicit null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumData {
    #[serde(default)]
    pub id: Option<AlbumId>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Column values written by insert and update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumFields {
    pub artist: Option<String>,
    pub title: Option<String>,
}

impl Album {
    /// Creates an album with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all fields from `data`.
    ///
    /// This is a total overwrite, not a merge: an empty `AlbumData` clears
    /// the record.
    pub fn exchange_array(&mut self, data: AlbumData) {
        self.id = data.id;
        self.artist = data.artist;
        self.title = data.title;
    }

    /// Returns the record as keyed input, the inverse of `exchange_array`.
    pub fn get_array_copy(&self) -> AlbumData {
        AlbumData {
            id: self.id,
            artist: self.artist.clone(),
            title: self.title.clone(),
        }
    }

    /// Returns the persisted columns, excluding `id`.
    pub fn fields(&self) -> AlbumFields {
        AlbumFields {
            artist: self.artist.clone(),
            title: self.title.clone(),
        }
    }
}

impl From<AlbumData> for Album {
    fn from(data: AlbumData) -> Self {
        let mut album = Album::new();
        album.exchange_array(data);
        album
    }
}
