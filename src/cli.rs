//! Command-line arguments.

use crate::config::DEFAULT_CONFIG_PATH;
use clap::Parser;
use std::path::PathBuf;

/// Import players from the external API and serve filtered queries over HTTP.
#[derive(Debug, Parser)]
#[clap(name = "players-api", version, about)]
pub struct Args {
    /// Path to the JSON config file.
    #[clap(long, short, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Log debug output (ignored when `RUST_LOG` is set).
    #[clap(long, short)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["players-api"]);
        assert_eq!(args.config, PathBuf::from("config.json"));
        assert!(!args.verbose);
    }

    #[test]
    fn test_config_flag() {
        let args = Args::parse_from(["players-api", "--config", "/etc/players.json", "-v"]);
        assert_eq!(args.config, PathBuf::from("/etc/players.json"));
        assert!(args.verbose);
    }
}
