//! Validated name newtype for inventory records
//!
//! The name doubles as the record store key, so it is valid by construction:
//! - Non-empty after trimming
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for item names
const MAX_NAME_LENGTH: usize = 200;

/// A validated item name (non-empty, <=200 chars, trimmed)
///
/// Names are stored case-sensitively; case-insensitive comparison is a
/// search-filtering concern, not an identity concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Create a new validated item name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Item name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Item name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ItemName> for String {
    fn from(name: ItemName) -> String {
        name.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name() {
        let name = ItemName::new("Apple").unwrap();
        assert_eq!(name.as_str(), "Apple");
        assert_eq!(name.to_string(), "Apple");
    }

    #[test]
    fn empty_name_rejected() {
        let result = ItemName::new("");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn whitespace_only_rejected() {
        let result = ItemName::new("   ");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), DomainError::Validation(_)));
    }

    #[test]
    fn name_is_trimmed() {
        let name = ItemName::new("  green eggs  ").unwrap();
        assert_eq!(name.as_str(), "green eggs");
    }

    #[test]
    fn case_is_preserved() {
        let name = ItemName::new("Olive Oil").unwrap();
        assert_eq!(name.as_str(), "Olive Oil");
    }

    #[test]
    fn too_long_rejected() {
        let long_name = "a".repeat(201);
        let result = ItemName::new(long_name);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("200"));
    }

    #[test]
    fn max_length_accepted() {
        let max_name = "a".repeat(200);
        let name = ItemName::new(max_name).unwrap();
        assert_eq!(name.as_str().len(), 200);
    }

    #[test]
    fn try_from_string() {
        let name: ItemName = "flour".to_string().try_into().unwrap();
        assert_eq!(name.as_str(), "flour");
    }

    #[test]
    fn into_string() {
        let name = ItemName::new("sugar").unwrap();
        let s: String = name.into();
        assert_eq!(s, "sugar");
    }

    #[test]
    fn serde_round_trip() {
        let name = ItemName::new("rice").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"rice\"");
        let back: ItemName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn serde_rejects_empty() {
        let result: Result<ItemName, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}
