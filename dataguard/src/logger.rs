// dataguard/src/logger.rs
//! Logger bootstrap for the `dataguard` binary and its tests.
//!
//! `RUST_LOG` is honoured unless an explicit level is passed, in which case the level
//! applies to this workspace's crates and actix stays at `info`.
//! License: MIT OR APACHE 2.0

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

const DEFAULT_FILTER: &str = "warn";

/// Initializes `env_logger` once. Later calls are ignored, so tests may call it freely.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.target(Target::Stderr).format_timestamp_millis();

    if let Some(level) = level {
        builder
            .filter_module("dataguard", level)
            .filter_module("dataguard_core", level);
        if level == LevelFilter::Off {
            builder.filter_level(LevelFilter::Off);
        } else {
            builder.filter_module("actix_web", LevelFilter::Info.min(level));
        }
    }

    // Already initialised by an earlier call or by test-log.
    let _ = builder.try_init();
}

/// Chooses the level from the global `--quiet` and `--debug` flags.
///
/// `None` leaves the decision to `RUST_LOG`.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
