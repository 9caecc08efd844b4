use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_HISTORY_FILE: &str = "riwayat.csv";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub history_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            history_file: std::env::var("HISTORY_FILE")
                .unwrap_or_else(|_| DEFAULT_HISTORY_FILE.to_string())
                .into(),
        })
    }
}
