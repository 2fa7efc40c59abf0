//! Data models for the storage layer

use serde::{Deserialize, Serialize};

/// Player row as stored in the `players` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub age: i32,
    pub sport: String,
}

/// Player data to insert; the sport and id are assigned by the insert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub age: i32,
}

/// Optional predicates for [`super::Players::list`].
///
/// Empty strings are treated the same as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    /// Case-insensitive substring of the first or last name.
    pub name: Option<String>,
    /// Inclusive lower age bound.
    pub min_age: Option<i32>,
    /// Inclusive upper age bound.
    pub max_age: Option<i32>,
    /// Case-insensitive exact position.
    pub position: Option<String>,
    /// Case-insensitive exact sport.
    pub sport: Option<String>,
}
