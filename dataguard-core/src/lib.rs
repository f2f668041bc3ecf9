// dataguard-core/src/lib.rs
//! # DataGuard Core Library
//!
//! `dataguard-core` detects and redacts personally identifiable information in free-form
//! text, and strips embedded metadata from image and PDF files. Everything runs locally;
//! nothing in this crate performs network I/O.
//!
//! ## Modules
//!
//! * `category`: The six fixed PII categories.
//! * `config`: The serialized rule shape and the embedded default rule set.
//! * `sanitizers`: Registry compilation, matching and position-safe rewriting.
//! * `validators`: Luhn checksum and the shape guards regex cannot express.
//! * `redaction_match`: Match records and PII-safe debug logging.
//! * `tally`: Per-category counts and the scrub result type.
//! * `engine`: The `SanitizationEngine` trait.
//! * `engines`: Concrete engines (`RegexEngine`).
//! * `headless`: One-shot helpers over a shared engine.
//! * `cleaner`: Image and PDF metadata stripping.
//! * `errors`: Library error types.
//!
//! ## Usage Example
//!
//! ```rust
//! use dataguard_core::{Category, RegexEngine};
//!
//! let engine = RegexEngine::new().unwrap();
//! let result = engine.scrub_text("Contact me at john.doe@example.com. My SSN is 123-45-6789.");
//!
//! assert_eq!(result.clean_text, "Contact me at [EMAIL]. My SSN is [SSN].");
//! assert_eq!(result.tally.count(Category::Email), 1);
//! assert_eq!(result.tally.total(), 2);
//! ```
//!
//! ## Processing order
//!
//! Credit card candidates are matched and Luhn-validated first, and the accepted ones are
//! rewritten before any other category is scanned. The remaining categories then run one
//! after another in registry order, each against the text left by the previous pass.
//! Within one pass, replacements are applied right to left.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod category;
pub mod cleaner;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod redaction_match;
pub mod sanitizers;
pub mod tally;
pub mod validators;

/// Re-exports the category enum.
pub use category::Category;

/// Re-exports the rule configuration types.
pub use config::{RedactionConfig, RedactionRule, MAX_PATTERN_LENGTH};

/// Re-exports the library error types.
pub use errors::{CleanError, DataguardError};

/// Re-exports the engine trait and its regex implementation.
pub use engine::SanitizationEngine;
pub use engines::regex_engine::RegexEngine;

/// Re-exports match and result types.
pub use redaction_match::{canonical_sample_hash, redact_sensitive, RedactionMatch};
pub use tally::{RedactionSummaryItem, RedactionTally, ScrubResult};

/// Re-exports the registry compiler for advanced usage.
pub use sanitizers::compiler::{compile_rules, default_registry, CompiledRule, PatternRegistry};

/// Re-exports the one-shot helpers.
pub use headless::{headless_scrub_string, shared_engine};

/// Re-exports the file metadata cleaner.
pub use cleaner::{clean_file, FileCleaner, MediaKind, MetadataCleaner};
