use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;

use crate::client::DEFAULT_API_URL;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Parser, Debug, Default)]
#[command(name = "holidays", about = "Browse Canadian public holidays in the terminal")]
pub struct Cli {
    /// Shared link to open, e.g. "year=2023&province=ON&page=2&search=day"
    #[arg(long)]
    pub link: Option<String>,

    /// Base URL of the holiday API
    #[arg(long, env = "HOLIDAYS_API_URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// File that always holds the current shareable link
    #[arg(long, env = "HOLIDAYS_LOCATION_FILE")]
    pub location_file: Option<PathBuf>,

    /// Log file path
    #[arg(long, env = "HOLIDAYS_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub location_file: Option<PathBuf>,
}

impl ConfigFile {
    pub fn load() -> Option<Self> {
        let config_dir = dirs::config_dir()?;
        let config_path = config_dir.join("holidays").join("config.toml");
        let content = std::fs::read_to_string(&config_path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("ignoring {}: {}", config_path.display(), e);
                None
            }
        }
    }
}

/// Effective settings: command line, then config file, then defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub timeout: Duration,
    pub location_file: Option<PathBuf>,
    pub link: Option<String>,
}

impl Settings {
    pub fn resolve(cli: &Cli, file: Option<ConfigFile>) -> Self {
        let file = file.unwrap_or_default();
        Self {
            api_url: cli
                .api_url
                .clone()
                .or(file.api_url)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            timeout: Duration::from_secs(
                cli.timeout
                    .or(file.timeout_secs)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            location_file: cli.location_file.clone().or(file.location_file),
            link: cli.link.clone(),
        }
    }
}
