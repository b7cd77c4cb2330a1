//! Album domain model.
//!
//! # Responsibility
//! - Define the canonical album record used by the repository layer.
//!
//! # Invariants
//! - Records carry no validation; storage enforces column constraints.

pub mod album;
