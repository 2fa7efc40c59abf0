//! Batched inserts and the two player reads

use super::{models::*, schema::PlayerDatabase, Players};
use crate::error::StorageError;
use rusqlite::{Row, ToSql};
use std::collections::HashMap;

const PLAYER_COLUMNS: &str = "id, first_name, last_name, position, age, sport";

/// Bound parameters per inserted row.
const INSERT_COLUMN_COUNT: usize = 5;

/// SQLite's default `SQLITE_MAX_VARIABLE_NUMBER`.
const SQLITE_MAX_VARIABLES: usize = 32766;

/// Largest number of rows [`PlayerDatabase::insert_batch`] can bind in one statement.
pub const MAX_INSERT_BATCH: usize = SQLITE_MAX_VARIABLES / INSERT_COLUMN_COUNT;

impl PlayerDatabase {
    /// Insert `players` tagged with `sport` using a single multi-row statement.
    ///
    /// Entries with an empty first name are skipped. Returns the number of
    /// rows inserted; nothing is executed when no entry qualifies.
    pub fn insert_batch(&self, players: &[NewPlayer], sport: &str) -> Result<usize, StorageError> {
        let rows: Vec<&NewPlayer> = players
            .iter()
            .filter(|p| !p.first_name.is_empty())
            .collect();
        if rows.is_empty() {
            return Ok(0);
        }

        let placeholders = vec!["(?, ?, ?, ?, ?)"; rows.len()].join(", ");
        let query = format!(
            "INSERT INTO players (first_name, last_name, position, age, sport) VALUES {placeholders}"
        );

        let mut params: Vec<&dyn ToSql> = Vec::with_capacity(rows.len() * INSERT_COLUMN_COUNT);
        for player in &rows {
            params.push(&player.first_name);
            params.push(&player.last_name);
            params.push(&player.position);
            params.push(&player.age);
            params.push(&sport);
        }

        let inserted = self.conn()?.execute(&query, &params[..])?;
        Ok(inserted)
    }

    /// Total number of stored players
    pub fn count(&self) -> Result<usize, StorageError> {
        let count: i64 = self
            .conn()?
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
        Ok(Player {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            position: row.get(3)?,
            age: row.get(4)?,
            sport: row.get(5)?,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Players for PlayerDatabase {
    fn list(&self, filter: &PlayerFilter) -> Result<Vec<Player>, StorageError> {
        let mut query = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE 1=1");
        let mut params: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(name) = non_empty(&filter.name) {
            let pattern = format!("%{name}%");
            query.push_str(
                " AND (lower(first_name) LIKE lower(?) OR lower(last_name) LIKE lower(?))",
            );
            params.push(Box::new(pattern.clone()));
            params.push(Box::new(pattern));
        }

        if let Some(min_age) = filter.min_age {
            query.push_str(" AND age >= ?");
            params.push(Box::new(min_age));
        }

        if let Some(max_age) = filter.max_age {
            query.push_str(" AND age <= ?");
            params.push(Box::new(max_age));
        }

        if let Some(position) = non_empty(&filter.position) {
            query.push_str(" AND lower(position) = lower(?)");
            params.push(Box::new(position.to_string()));
        }

        if let Some(sport) = non_empty(&filter.sport) {
            query.push_str(" AND lower(sport) = lower(?)");
            params.push(Box::new(sport.to_string()));
        }

        query.push_str(" ORDER BY id");

        let conn = self.conn()?;
        let mut stmt = conn.prepare(&query)?;
        let param_refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let rows = stmt.query_map(&param_refs[..], Self::row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    fn average_age_by_position(&self) -> Result<HashMap<String, f64>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT position, AVG(age) AS age
             FROM players
             WHERE age > 0
             GROUP BY position",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
        })?;

        let mut averages = HashMap::new();
        for row in rows {
            let (position, age) = row?;
            averages.insert(position, age);
        }
        Ok(averages)
    }
}
