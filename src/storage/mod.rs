//! Storage layer for the players API
//!
//! This module provides a thin abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Batched inserts and the filtered/grouped reads

pub mod models;
pub mod queries;
pub mod schema;


use crate::error::StorageError;
use std::collections::HashMap;

// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::PlayerDatabase;

/// Read access to stored players.
///
/// The service layer only depends on this trait, so it can be exercised
/// against a stub as well as against [`PlayerDatabase`].
pub trait Players {
    /// Players matching every supplied predicate, in insertion order.
    fn list(&self, filter: &PlayerFilter) -> Result<Vec<Player>, StorageError>;

    /// Mean age per position, ignoring rows whose age is not positive.
    fn average_age_by_position(&self) -> Result<HashMap<String, f64>, StorageError>;
}
