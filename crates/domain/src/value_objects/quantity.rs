//! Quantity value object for inventory records

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A positive item quantity (>= 1 by construction)
///
/// A record whose quantity would reach zero must be deleted instead, so zero
/// is unrepresentable here; `decrement` signals depletion explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// The quantity a freshly created record starts at.
    pub const ONE: Quantity = Quantity(1);

    /// Create a new validated quantity.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `value` is zero.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::validation("Quantity must be at least 1"));
        }
        Ok(Self(value))
    }

    /// Returns the quantity as a plain integer.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Add one unit. No upper bound beyond the integer width.
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Remove one unit.
    pub fn decrement(self) -> QuantityChange {
        if self.0 <= 1 {
            QuantityChange::Depleted
        } else {
            QuantityChange::Updated(Self(self.0 - 1))
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> u32 {
        quantity.0
    }
}

/// Result of removing one unit from a quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// New quantity after the removal
    Updated(Quantity),
    /// The last unit was removed; the record should be deleted
    Depleted,
}

impl QuantityChange {
    /// Check if this result indicates the record should be removed
    pub fn should_remove(&self) -> bool {
        matches!(self, Self::Depleted)
    }

    /// Get the new quantity, if not depleted
    pub fn new_quantity(&self) -> Option<Quantity> {
        match self {
            Self::Updated(qty) => Some(*qty),
            Self::Depleted => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rejected() {
        let result = Quantity::new(0);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("at least 1"));
    }

    #[test]
    fn one_accepted() {
        let qty = Quantity::new(1).unwrap();
        assert_eq!(qty.get(), 1);
        assert_eq!(qty, Quantity::ONE);
    }

    #[test]
    fn increment_adds_one() {
        let qty = Quantity::new(4).unwrap();
        assert_eq!(qty.increment().get(), 5);
    }

    #[test]
    fn increment_saturates_at_max() {
        let qty = Quantity::new(u32::MAX).unwrap();
        assert_eq!(qty.increment().get(), u32::MAX);
    }

    #[test]
    fn decrement_partial() {
        let qty = Quantity::new(5).unwrap();
        assert_eq!(
            qty.decrement(),
            QuantityChange::Updated(Quantity::new(4).unwrap())
        );
    }

    #[test]
    fn decrement_last_unit_depletes() {
        assert_eq!(Quantity::ONE.decrement(), QuantityChange::Depleted);
    }

    #[test]
    fn should_remove() {
        assert!(!Quantity::new(2).unwrap().decrement().should_remove());
        assert!(Quantity::ONE.decrement().should_remove());
    }

    #[test]
    fn new_quantity() {
        let change = Quantity::new(2).unwrap().decrement();
        assert_eq!(change.new_quantity(), Some(Quantity::ONE));
        assert_eq!(QuantityChange::Depleted.new_quantity(), None);
    }

    #[test]
    fn serde_round_trip() {
        let qty = Quantity::new(3).unwrap();
        let json = serde_json::to_string(&qty).unwrap();
        assert_eq!(json, "3");
        let back: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, qty);
    }

    #[test]
    fn serde_rejects_zero() {
        let result: Result<Quantity, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }
}
