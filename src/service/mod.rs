//! Player query service.
//!
//! Reads players through the [`Players`] capability and enriches each one
//! with a sport-specific brief name and its age difference from the rounded
//! average age of its position. Players that cannot be enriched (no average
//! for the position, or a sport without a brief-name format) are left out of
//! the result rather than reported as errors.

pub mod name_brief;


use crate::storage::{Player, PlayerFilter, Players};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use name_brief::{name_brief, Sport};

/// Filter body accepted by the players endpoint. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPlayersQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub min_age: Option<i32>,
    #[serde(default)]
    pub max_age: Option<i32>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub sport: Option<String>,
}

impl From<GetPlayersQuery> for PlayerFilter {
    fn from(query: GetPlayersQuery) -> Self {
        PlayerFilter {
            name: query.name,
            min_age: query.min_age,
            max_age: query.max_age,
            position: query.position,
            sport: query.sport,
        }
    }
}

/// Enriched player returned to callers; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: i64,
    pub name_brief: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub age: i32,
    pub average_position_age_diff: i64,
}

/// Result envelope: `{ "data": ..., "error": ... }`.
///
/// `status_code` is an internal marker and is not part of the JSON body.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceResponse<T> {
    pub data: T,
    pub error: Option<String>,
    #[serde(skip)]
    pub status_code: StatusCode,
}

pub type PlayersResponse = ServiceResponse<Option<Vec<PlayerResponse>>>;

impl<T> ServiceResponse<Option<T>> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            status_code: StatusCode::OK,
        }
    }

    /// Response with no data and an optional error message.
    pub fn failure(status_code: StatusCode, error: Option<String>) -> Self {
        Self {
            data: None,
            error,
            status_code,
        }
    }
}

pub struct Service<P> {
    players: P,
}

impl<P: Players> Service<P> {
    pub fn new(players: P) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &P {
        &self.players
    }

    /// Filtered, enriched players.
    ///
    /// A storage failure on either read fails the whole call with a 500
    /// marker and no data.
    pub fn get_players(&self, query: GetPlayersQuery) -> PlayersResponse {
        let filter = PlayerFilter::from(query);

        let players = match self.players.list(&filter) {
            Ok(players) => players,
            Err(e) => {
                tracing::error!(error = %e, "failed to list players");
                return ServiceResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Some(e.to_string()),
                );
            }
        };

        let averages = match self.players.average_age_by_position() {
            Ok(averages) => averages,
            Err(e) => {
                tracing::error!(error = %e, "failed to read average age by position");
                return ServiceResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Some(e.to_string()),
                );
            }
        };

        let result: Vec<PlayerResponse> = players
            .into_iter()
            .filter_map(|player| enrich(player, &averages))
            .collect();

        ServiceResponse::ok(result)
    }
}

/// Build the response view of `player`, or `None` when it must be excluded.
pub fn enrich(player: Player, averages: &HashMap<String, f64>) -> Option<PlayerResponse> {
    let average = *averages.get(&player.position)?;

    let name_brief = match name_brief(&player.first_name, &player.last_name, &player.sport) {
        Ok(name) => name,
        Err(e) => {
            tracing::debug!(id = player.id, error = %e, "skipping player");
            return None;
        }
    };

    Some(PlayerResponse {
        id: player.id,
        name_brief,
        average_position_age_diff: i64::from(player.age) - average.round() as i64,
        first_name: player.first_name,
        last_name: player.last_name,
        position: player.position,
        age: player.age,
    })
}
