use std::path::PathBuf;

use thiserror::Error;

pub const TOKEN_VAR: &str = "TELOXIDE_TOKEN";
pub const DB_PATH_VAR: &str = "QUIZ_DB_PATH";
pub const DEFAULT_DB_PATH: &str = "db.sqlite";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TELOXIDE_TOKEN is not set")]
    MissingToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub token: String,
    pub db_path: PathBuf,
}

impl BotConfig {
    /// Reads an optional `.env` file, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenv::dotenv().is_err() {
            log::debug!("no .env file loaded");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;
        let db_path = lookup(DB_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DB_PATH), PathBuf::from);

        Ok(Self { token, db_path })
    }
}
