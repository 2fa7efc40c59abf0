//! Error types for the players API

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Failures raised by the SQLite storage layer.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("database connection lock poisoned")]
    Poisoned,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {message}")]
    Invalid { message: String },
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("failed to fetch players: {0}")]
    Http(#[from] reqwest::Error),

    #[error("players response had no body: {url}")]
    MissingBody { url: String },

    #[error("failed to insert players: {0}")]
    Storage(#[from] StorageError),
}

/// Why a brief display name could not be built for a player.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BriefNameError {
    #[error("unknown sport '{sport}' found")]
    UnknownSport { sport: String },

    #[error("name part to abbreviate is empty")]
    EmptyName,
}

/// Startup failures; any of these terminates the process.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
