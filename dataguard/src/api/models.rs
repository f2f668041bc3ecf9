use dataguard_core::{Category, ScrubResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Request body for `POST /scrub/text`.
#[derive(Debug, Deserialize, Clone)]
pub struct ScrubTextRequest {
    /// Text to scrub for PII
    pub text: String,
}

/// Response for `POST /scrub/text`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScrubTextResponse {
    /// Text with PII redacted
    pub clean_text: String,

    /// Total number of redactions made
    pub redactions_count: usize,

    /// Breakdown of redactions by category, always all six keys
    pub details: BTreeMap<Category, usize>,
}

impl From<ScrubResult> for ScrubTextResponse {
    fn from(result: ScrubResult) -> Self {
        Self {
            redactions_count: result.tally.total(),
            details: result.tally.details().clone(),
            clean_text: result.clean_text,
        }
    }
}

/// Query string for `POST /scrub/file`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct FileQuery {
    /// Original file name, used to build the attachment name
    pub filename: Option<String>,
}

/// Response for `GET /health`.
#[derive(Debug, Serialize, Clone)]
pub struct HealthStatus {
    /// Always "OK" while the process serves requests
    pub status: String,

    /// Service name
    pub service: String,

    /// Crate version
    pub version: String,
}

/// Response for `GET /`.
#[derive(Debug, Serialize, Clone)]
pub struct ServiceInfo {
    pub service: String,
    pub tagline: String,
    pub version: String,
    pub endpoints: HashMap<String, String>,
    pub features: Vec<String>,
    pub security: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    /// Status indicator: error
    pub status: String,

    /// Error message details
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}
