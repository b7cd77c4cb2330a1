#![allow(dead_code)]

use album_core::{
    Album, AlbumData, AlbumFields, Criteria, GatewayError, GatewayResult, ResultSet, TableGateway,
};
use std::cell::RefCell;

/// One call observed by `RecordingGateway`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    Select(Criteria),
    Insert(AlbumFields),
    Update(AlbumFields, Criteria),
    Delete(Criteria),
}

/// Hand-written gateway double: answers every `select` with fixed rows and
/// records each call in order.
#[derive(Default)]
pub struct RecordingGateway {
    rows: Vec<Album>,
    affected: usize,
    fail_with: Option<String>,
    calls: RefCell<Vec<GatewayCall>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Album>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Every call fails with `GatewayError::InvalidData(message)`.
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn affecting(mut self, affected: usize) -> Self {
        self.affected = affected;
        self
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: GatewayCall) -> GatewayResult<()> {
        self.calls.borrow_mut().push(call);
        match &self.fail_with {
            Some(message) => Err(GatewayError::InvalidData(message.clone())),
            None => Ok(()),
        }
    }
}

impl TableGateway for RecordingGateway {
    fn select(&self, criteria: &Criteria) -> GatewayResult<ResultSet> {
        self.record(GatewayCall::Select(*criteria))?;
        Ok(ResultSet::new(self.rows.clone()))
    }

    fn insert(&self, fields: &AlbumFields) -> GatewayResult<usize> {
        self.record(GatewayCall::Insert(fields.clone()))?;
        Ok(self.affected)
    }

    fn update(&self, fields: &AlbumFields, criteria: &Criteria) -> GatewayResult<usize> {
        self.record(GatewayCall::Update(fields.clone(), *criteria))?;
        Ok(self.affected)
    }

    fn delete(&self, criteria: &Criteria) -> GatewayResult<usize> {
        self.record(GatewayCall::Delete(*criteria))?;
        Ok(self.affected)
    }
}

pub fn album(id: Option<i64>, artist: &str, title: &str) -> Album {
    Album::from(AlbumData {
        id,
        artist: Some(artist.to_string()),
        title: Some(title.to_string()),
    })
}

pub fn fields(artist: &str, title: &str) -> AlbumFields {
    AlbumFields {
        artist: Some(artist.to_string()),
        title: Some(title.to_string()),
    }
}
