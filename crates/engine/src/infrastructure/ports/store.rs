//! Record store port trait.

use async_trait::async_trait;
use serde::Serialize;

use larder_domain::{InventoryRecord, InventorySnapshot, ItemName, Quantity};

use super::error::StoreError;

/// Partial update for a merge-upsert.
///
/// Only the fields present are written; everything else in the stored
/// document is left untouched. The document is created if absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
}

impl RecordPatch {
    /// A patch that writes only the quantity field.
    pub fn quantity(quantity: Quantity) -> Self {
        Self {
            quantity: Some(quantity),
            ..Self::default()
        }
    }

    /// A patch that writes only the favorite flag.
    pub fn favorite(favorite: bool) -> Self {
        Self {
            favorite: Some(favorite),
            ..Self::default()
        }
    }
}

/// Port for the remote keyed document store holding inventory records.
///
/// One document per item name. Each individual call is atomic per key on the
/// store side; no transaction spans a fetch and a subsequent write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Enumerate all records in the collection.
    ///
    /// Ordering is implementation-defined but stable within one call.
    async fn fetch_all(&self) -> Result<InventorySnapshot, StoreError>;

    /// Point lookup by key. `None` is a normal outcome, not an error.
    async fn fetch_one(&self, name: &ItemName) -> Result<Option<InventoryRecord>, StoreError>;

    /// Merge the patch into the record at `name`, creating it if absent.
    async fn upsert(&self, name: &ItemName, patch: RecordPatch) -> Result<(), StoreError>;

    /// Remove the record at `name`. Already absent is a no-op, not an error.
    async fn delete(&self, name: &ItemName) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_patch_leaves_favorite_unset() {
        let patch = RecordPatch::quantity(Quantity::ONE);
        assert_eq!(patch.quantity, Some(Quantity::ONE));
        assert_eq!(patch.favorite, None);
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"quantity":1}"#);
    }

    #[test]
    fn favorite_patch_leaves_quantity_unset() {
        let patch = RecordPatch::favorite(true);
        assert_eq!(patch.quantity, None);
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"favorite":true}"#);
    }
}
