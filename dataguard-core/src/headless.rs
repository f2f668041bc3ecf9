// File: dataguard-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive use.
//!
//! A single `RegexEngine` is built on first use and shared for the rest of the process.

use once_cell::sync::OnceCell;

use crate::engines::regex_engine::RegexEngine;
use crate::errors::DataguardError;
use crate::tally::ScrubResult;

static SHARED_ENGINE: OnceCell<RegexEngine> = OnceCell::new();

/// Returns the process-wide engine, building it on first call.
pub fn shared_engine() -> Result<&'static RegexEngine, DataguardError> {
    SHARED_ENGINE.get_or_try_init(RegexEngine::new)
}

/// Scrubs `content` with the shared engine.
///
/// The scrub itself cannot fail; the error case only covers building the engine the
/// first time.
pub fn headless_scrub_string(content: &str) -> Result<ScrubResult, DataguardError> {
    Ok(shared_engine()?.scrub_text(content))
}
