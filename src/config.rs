//! Service configuration.
//!
//! Defaults are overridden by `PWDLIST_*` environment variables (a `.env`
//! file is loaded by `main` before this runs).

use crate::error::CheckError;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const ENV_PREFIX: &str = "PWDLIST_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// sqlx connection string for the password table database.
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// Open the database read-only. The file must already exist.
    pub read_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:pwdlist.sqlite".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            max_connections: 8,
            acquire_timeout_secs: 5,
            read_only: true,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, CheckError> {
        Ok(Self::figment().extract()?)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}
