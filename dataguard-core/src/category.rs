// dataguard-core/src/category.rs
//! The fixed set of PII categories the engine knows how to detect.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A personally identifiable information kind.
///
/// The declaration order is the registry order: it drives tally ordering and the order
/// in which the non-credit-card passes run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Email,
    Ssn,
    CreditCard,
    Ipv4,
    Ipv6,
    AwsKey,
}

impl Category {
    /// Every category, in registry order.
    pub const ALL: [Category; 6] = [
        Category::Email,
        Category::Ssn,
        Category::CreditCard,
        Category::Ipv4,
        Category::Ipv6,
        Category::AwsKey,
    ];

    /// The snake_case key used in rule files, JSON output and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Email => "email",
            Category::Ssn => "ssn",
            Category::CreditCard => "credit_card",
            Category::Ipv4 => "ipv4",
            Category::Ipv6 => "ipv6",
            Category::AwsKey => "aws_key",
        }
    }

    /// Whether accepted matches must additionally pass a checksum validator.
    pub fn requires_validation(&self) -> bool {
        matches!(self, Category::CreditCard)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name one of the six categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategoryError(pub String);

impl fmt::Display for UnknownCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown PII category '{}'.", self.0)
    }
}

impl std::error::Error for UnknownCategoryError {}

impl FromStr for Category {
    type Err = UnknownCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategoryError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_unknown_category() {
        assert!("phone".parse::<Category>().is_err());
    }

    #[test]
    fn test_only_credit_card_requires_validation() {
        let validated: Vec<_> = Category::ALL.iter().filter(|c| c.requires_validation()).collect();
        assert_eq!(validated, vec![&Category::CreditCard]);
    }

    #[test]
    fn test_serde_name_matches_as_str() {
        let json = serde_json::to_string(&Category::AwsKey).unwrap();
        assert_eq!(json, "\"aws_key\"");
    }
}
