//! Rule compilation, matching and rewriting.
//!
//! `compiler` turns the rule configuration into the immutable `PatternRegistry`,
//! `matcher` finds the non-overlapping occurrences of one rule, and `rewriter` applies
//! accepted occurrences to the text without invalidating the offsets of the others.

pub mod compiler;
pub mod matcher;
pub mod rewriter;
