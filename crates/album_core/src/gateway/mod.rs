//! Table-access capability consumed by the album repository.
//!
//! # Responsibility
//! - Define the select/insert/update/delete contract over one table.
//! - Carry row-sets already decoded into `Album` records.
//!
//! # Invariants
//! - Criteria are either the whole table or a single `id` filter.
//! - Write operations report affected rows; zero is not an error here.

use crate::db::DbError;
use crate::model::album::{Album, AlbumId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod sqlite;

pub use crate::model::album::AlbumFields;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failure reported by a table gateway implementation.
#[derive(Debug)]
pub enum GatewayError {
    Db(DbError),
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted album data: {message}"),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for GatewayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_)
            | Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for GatewayError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for GatewayError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Row filter accepted by every gateway operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criteria {
    /// No filter: every row.
    All,
    /// Rows whose `id` equals the value.
    Id(AlbumId),
}

/// Ordered rows returned by `TableGateway::select`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    rows: Vec<Album>,
}

impl ResultSet {
    pub fn new(rows: Vec<Album>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first(&self) -> Option<&Album> {
        self.rows.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Album> {
        self.rows.iter()
    }

    /// Consumes the set and keeps only its first row.
    pub fn into_first(self) -> Option<Album> {
        self.rows.into_iter().next()
    }
}

impl IntoIterator for ResultSet {
    type Item = Album;
    type IntoIter = std::vec::IntoIter<Album>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Album;
    type IntoIter = std::slice::Iter<'a, Album>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl FromIterator<Album> for ResultSet {
    fn from_iter<I: IntoIterator<Item = Album>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Table-access interface for the `album` table.
pub trait TableGateway {
    fn select(&self, criteria: &Criteria) -> GatewayResult<ResultSet>;
    fn insert(&self, fields: &AlbumFields) -> GatewayResult<usize>;
    fn update(&self, fields: &AlbumFields, criteria: &Criteria) -> GatewayResult<usize>;
    fn delete(&self, criteria: &Criteria) -> GatewayResult<usize>;
}

impl<G: TableGateway + ?Sized> TableGateway for &G {
    fn select(&self, criteria: &Criteria) -> GatewayResult<ResultSet> {
        (**self).select(criteria)
    }

    fn insert(&self, fields: &AlbumFields) -> GatewayResult<usize> {
        (**self).insert(fields)
    }

    fn update(&self, fields: &AlbumFields, criteria: &Criteria) -> GatewayResult<usize> {
        (**self).update(fields, criteria)
    }

    fn delete(&self, criteria: &Criteria) -> GatewayResult<usize> {
        (**self).delete(criteria)
    }
}
