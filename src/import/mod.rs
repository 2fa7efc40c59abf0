//! Startup import of players from the external API.
//!
//! Sports are imported one after another. Before each request the importer
//! waits a fixed delay to stay polite with the upstream API, then substitutes
//! the sport into the URL template, fetches the players envelope and stores
//! the players in chunks of the configured batch size.
//!
//! Every failure is returned to the caller; the binary treats them as fatal.

pub mod types;


use crate::config::{Config, SPORT_PLACEHOLDER};
use crate::error::{ImportError, StorageError};
use crate::storage::{NewPlayer, PlayerDatabase};
use reqwest::Client;
use std::time::Duration;
use types::{CbsPlayer, CbsPlayersResponse};

/// Pause before each sport's request.
pub const DEFAULT_IMPORT_DELAY: Duration = Duration::from_secs(2);

/// Destination for imported players, one insert statement per call.
pub trait PlayerSink {
    fn insert_batch(&self, players: &[NewPlayer], sport: &str) -> Result<usize, StorageError>;
}

impl PlayerSink for PlayerDatabase {
    fn insert_batch(&self, players: &[NewPlayer], sport: &str) -> Result<usize, StorageError> {
        PlayerDatabase::insert_batch(self, players, sport)
    }
}

pub struct Importer {
    client: Client,
    url_template: String,
    sports: Vec<String>,
    batch_size: usize,
    delay: Duration,
}

impl Importer {
    pub fn new(
        client: Client,
        url_template: impl Into<String>,
        sports: Vec<String>,
        batch_size: usize,
    ) -> Self {
        Self {
            client,
            url_template: url_template.into(),
            sports,
            batch_size,
            delay: DEFAULT_IMPORT_DELAY,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Client::new(),
            config.cbs_api_url.clone(),
            config.sports.clone(),
            config.import_batch_size,
        )
    }

    /// Override the pause taken before each sport's request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// URL for a single sport
    pub fn sport_url(&self, sport: &str) -> String {
        self.url_template.replace(SPORT_PLACEHOLDER, sport)
    }

    /// Import every configured sport into `sink`, returning the rows inserted.
    pub async fn run<S: PlayerSink>(&self, sink: &S) -> Result<usize, ImportError> {
        let mut row_count = 0;

        for sport in &self.sports {
            tracing::info!(sport = %sport, "importing players");
            tokio::time::sleep(self.delay).await;

            let url = self.sport_url(sport);
            let response = fetch_players(&self.client, &url).await?;
            let body = response
                .body
                .ok_or_else(|| ImportError::MissingBody { url: url.clone() })?;

            let inserted = insert_players(sink, body.players, sport, self.batch_size)?;
            tracing::info!(sport = %sport, inserted, "imported players");

            row_count += inserted;
        }

        Ok(row_count)
    }
}

/// GET `url` and decode the players envelope.
pub async fn fetch_players(client: &Client, url: &str) -> Result<CbsPlayersResponse, ImportError> {
    let response = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<CbsPlayersResponse>()
        .await?;

    Ok(response)
}

/// Insert `players` in chunks of `batch_size`; the last chunk may be shorter.
pub fn insert_players<S: PlayerSink>(
    sink: &S,
    players: Vec<CbsPlayer>,
    sport: &str,
    batch_size: usize,
) -> Result<usize, StorageError> {
    let players: Vec<NewPlayer> = players.into_iter().map(NewPlayer::from).collect();
    let mut row_count = 0;

    for chunk in players.chunks(batch_size.max(1)) {
        let count = sink.insert_batch(chunk, sport)?;
        tracing::debug!(sport, chunk = chunk.len(), inserted = count, "inserted batch");
        row_count += count;
    }

    Ok(row_count)
}
