//! Album catalogue core: record model, table gateway and repository.

pub mod db;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod repo;

pub use gateway::sqlite::SqliteAlbumGateway;
pub use gateway::{
    AlbumFields, Criteria, GatewayError, GatewayResult, ResultSet, TableGateway,
};
pub use logging::{active_config, default_level, init_logging, LogConfig, LoggingError};
pub use model::album::{Album, AlbumData, AlbumId};
pub use repo::album_table::{AlbumError, AlbumTable, RepoResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
