//! HTTP service configuration.
//!
//! Resolution order: built-in defaults, then an optional YAML file, then `DATAGUARD_*`
//! environment variables and command-line flags. The last two are read by clap and applied
//! by the `serve` command.

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default cap on request bodies: 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Configuration for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// Largest accepted request body, JSON or raw
    pub max_upload_bytes: usize,

    /// Worker threads; `None` keeps actix's default of one per core
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            workers: None,
        }
    }
}

impl ServerConfig {
    /// Defaults, overlaid by `path` when given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        debug!("Resolved server configuration: {:?}", config);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read server config {}", path.display()))?;
        serde_yml::from_str(&text).with_context(|| format!("Failed to parse server config {}", path.display()))
    }
}
