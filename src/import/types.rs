//! Wire types for the external players API

use crate::storage::NewPlayer;
use serde::{Deserialize, Deserializer};

/// Top-level envelope: `{ "body": { "players": [...] } }`
#[derive(Debug, Clone, Deserialize)]
pub struct CbsPlayersResponse {
    #[serde(default)]
    pub body: Option<Body>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Body {
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<CbsPlayer>,
}

/// One player as returned by the API. Missing or null fields default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CbsPlayer {
    #[serde(rename = "firstname", default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(rename = "lastname", default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: i32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<CbsPlayer> for NewPlayer {
    fn from(player: CbsPlayer) -> Self {
        NewPlayer {
            first_name: player.first_name,
            last_name: player.last_name,
            position: player.position,
            age: player.age,
        }
    }
}
