use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://tickets.db?mode=rwc";
const DEFAULT_TRANSCRIPT_DIR: &str = "transcripts";

/// Runtime configuration for the bot process.
pub struct Config {
    pub discord_token: String,
    pub database_url: String,
    /// Directory transcripts are written to, one subdirectory per guild.
    pub transcript_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            transcript_dir: std::env::var("TRANSCRIPT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_TRANSCRIPT_DIR)),
        })
    }
}

/// Configuration for the one-shot command registration binary.
pub struct DeployConfig {
    pub discord_token: String,
    pub client_id: u64,
}

impl DeployConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let client_id = required("CLIENT_ID")?;

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            client_id: client_id
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "CLIENT_ID".to_string(),
                    value: client_id.clone(),
                })?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
