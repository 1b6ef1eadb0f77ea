//! Inventory record entity.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{ItemName, Quantity};

/// A single tracked item, keyed by name in the record store.
///
/// Exists only while its quantity is positive; removing the last unit
/// deletes the record rather than persisting a zero quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub name: ItemName,
    pub quantity: Quantity,
    #[serde(default)]
    pub favorite: bool,
}

impl InventoryRecord {
    /// Create a fresh record at quantity 1, not favorited.
    pub fn new(name: ItemName) -> Self {
        Self {
            name,
            quantity: Quantity::ONE,
            favorite: false,
        }
    }

    /// Assemble a record from raw stored fields.
    ///
    /// Store adapters use this to validate documents on the way in: the key
    /// must be a valid name and the document must carry a positive quantity.
    /// A missing `favorite` field reads as `false`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for an invalid name, or a missing
    /// or zero quantity.
    pub fn from_parts(
        name: &str,
        quantity: Option<u32>,
        favorite: Option<bool>,
    ) -> Result<Self, DomainError> {
        let name = ItemName::new(name)?;
        let quantity = quantity
            .ok_or_else(|| DomainError::validation("Record is missing a quantity"))
            .and_then(Quantity::new)?;
        Ok(Self {
            name,
            quantity,
            favorite: favorite.unwrap_or(false),
        })
    }

    /// Case-insensitive substring match against a search query.
    ///
    /// An empty query matches every record.
    pub fn matches_filter(&self, query: &str) -> bool {
        self.name
            .as_str()
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}
