//! Players API Library
//!
//! Imports athlete records from an external sports API into SQLite and serves
//! a single filtered query that enriches each player with a brief display
//! name and its age difference from the average age of its position.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use players_api::{service::{GetPlayersQuery, Service}, storage::PlayerDatabase};
//!
//! # fn example() -> players_api::Result<()> {
//! let db = PlayerDatabase::open_in_memory()?;
//! let service = Service::new(db);
//!
//! let response = service.get_players(GetPlayersQuery {
//!     sport: Some("football".to_string()),
//!     ..Default::default()
//! });
//! println!("{}", serde_json::to_string(&response).unwrap());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod import;
pub mod logging;
pub mod server;
pub mod service;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use service::{GetPlayersQuery, PlayerResponse, Service};
pub use storage::{Player, PlayerDatabase, PlayerFilter, Players};
