//! errors.rs - Custom error types for the dataguard-core library.
//!
//! Scrubbing text is total and has no error type. Failures only occur while building the
//! pattern registry at startup, and in the file metadata cleaner.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// Rule loading and compilation errors for the `dataguard-core` library.
///
/// `#[non_exhaustive]` so new variants can be added without breaking downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DataguardError {
    #[error("Failed to compile redaction rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}

/// The two ways stripping metadata from a file can fail. Both are terminal for the file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CleanError {
    /// The declared media kind is not a supported image format or PDF.
    #[error("Unsupported file type: {0}")]
    UnsupportedKind(String),

    /// The bytes could not be decoded as the declared kind.
    #[error("Failed to process {kind}: {reason}")]
    MalformedInput { kind: String, reason: String },
}

impl CleanError {
    pub(crate) fn malformed(kind: impl Into<String>, reason: impl ToString) -> Self {
        CleanError::MalformedInput {
            kind: kind.into(),
            reason: reason.to_string(),
        }
    }
}
