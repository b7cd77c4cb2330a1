//! Repository layer over the album table gateway.
//!
//! # Responsibility
//! - Adapt raw gateway results into use-case level album operations.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   gateway errors.

pub mod album_table;
