use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};

/// Runtime settings, read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
    /// Fixed seed for deterministic game deals; entropy when unset.
    pub rng_seed: Option<u64>,
    pub breath_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup("SERENE_DB_PATH")
            .unwrap_or_else(|| "database/mood_journal.db".into())
            .into();
        let host = lookup("SERENE_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = lookup("SERENE_PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .context("SERENE_PORT must be a port number")?;
        let rng_seed = lookup("SERENE_RNG_SEED")
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("SERENE_RNG_SEED must be an unsigned integer")?;
        let breath_secs: u64 = lookup("SERENE_BREATH_INTERVAL_SECS")
            .unwrap_or_else(|| "2".into())
            .parse()
            .context("SERENE_BREATH_INTERVAL_SECS must be a whole number of seconds")?;
        if breath_secs == 0 {
            bail!("SERENE_BREATH_INTERVAL_SECS must be at least 1");
        }

        Ok(Self {
            db_path,
            host,
            port,
            rng_seed,
            breath_interval: Duration::from_secs(breath_secs),
        })
    }
}
