//! `serve` command: resolves the server configuration and runs the HTTP service.

use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use crate::api::config::ServerConfig;
use crate::api::{start_server, AppState};

/// Options for [`run_serve`]. Values come from flags or `DATAGUARD_*` variables and win over
/// the config file.
#[derive(Debug, Default, Clone)]
pub struct ServeOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub max_upload_bytes: Option<usize>,
    pub config_path: Option<PathBuf>,
}

/// Applies flag and environment values on top of a loaded configuration.
pub fn resolve_config(opts: &ServeOptions, mut config: ServerConfig) -> ServerConfig {
    if let Some(host) = &opts.host {
        config.host = host.clone();
    }
    if let Some(port) = opts.port {
        config.port = port;
    }
    if let Some(limit) = opts.max_upload_bytes {
        config.max_upload_bytes = limit;
    }
    config
}

/// Blocks on the actix system until the server exits.
pub fn run_serve(opts: &ServeOptions) -> Result<()> {
    let config = resolve_config(opts, ServerConfig::load(opts.config_path.as_deref())?);
    let state = AppState::with_defaults()?;
    info!(
        "Serving on {}:{} (max upload {} bytes).",
        config.host, config.port, config.max_upload_bytes
    );

    actix_web::rt::System::new()
        .block_on(start_server(config, state))
        .context("DataGuard API server failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_loaded_values() {
        let loaded = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
            ..Default::default()
        };
        let opts = ServeOptions {
            port: Some(7000),
            ..Default::default()
        };
        let config = resolve_config(&opts, loaded);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 7000);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_upload_limit_override() {
        let opts = ServeOptions {
            max_upload_bytes: Some(4096),
            ..Default::default()
        };
        let config = resolve_config(&opts, ServerConfig::default());
        assert_eq!(config.max_upload_bytes, 4096);
        assert_eq!(config.port, 8000);
    }
}
