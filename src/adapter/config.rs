//! Configuration
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

fn default_query_limit() -> usize {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Path of the JSON data file backing the repository (`~` is expanded)
    pub data_path: String,

    /// Maximum number of rows returned by a single select
    #[serde(default = "default_query_limit")]
    pub query_limit: usize,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;
        if config.query_limit == 0 {
            anyhow::bail!("query_limit must be at least 1 in {}", path);
        }
        Ok(config)
    }

    /// `data_path` with `~` expanded to the home directory
    pub fn expanded_data_path(&self) -> String {
        shellexpand::tilde(&self.data_path).into_owned()
    }
}
