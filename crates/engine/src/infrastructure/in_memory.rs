//! In-memory record store.
//!
//! Backs tests and storeless local runs (`STORE_URL=memory`). Implements the
//! same merge-upsert and delete semantics as the remote adapter. Keys are
//! enumerated in sorted order, which keeps snapshots stable across fetches.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use larder_domain::{InventoryRecord, InventorySnapshot, ItemName};

use super::ports::{RecordPatch, RecordStore, StoreError};

/// Raw stored fields, before validation into a domain record.
///
/// Both fields are optional: a merge-upsert can create a document carrying
/// only the fields it patched.
#[derive(Debug, Clone, Copy, Default)]
struct StoredDoc {
    quantity: Option<u32>,
    favorite: Option<bool>,
}

impl StoredDoc {
    fn merge(&mut self, patch: &RecordPatch) {
        if let Some(quantity) = patch.quantity {
            self.quantity = Some(quantity.get());
        }
        if let Some(favorite) = patch.favorite {
            self.favorite = Some(favorite);
        }
    }

    fn into_record(self, name: &str) -> Option<InventoryRecord> {
        match InventoryRecord::from_parts(name, self.quantity, self.favorite) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(name = %name, error = %e, "Skipping invalid stored document");
                None
            }
        }
    }
}

pub struct InMemoryRecordStore {
    docs: RwLock<BTreeMap<String, StoredDoc>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self {
            docs: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn fetch_all(&self) -> Result<InventorySnapshot, StoreError> {
        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .filter_map(|(name, doc)| doc.into_record(name))
            .collect())
    }

    async fn fetch_one(&self, name: &ItemName) -> Result<Option<InventoryRecord>, StoreError> {
        let docs = self.docs.read().await;
        Ok(docs
            .get(name.as_str())
            .and_then(|doc| doc.into_record(name.as_str())))
    }

    async fn upsert(&self, name: &ItemName, patch: RecordPatch) -> Result<(), StoreError> {
        let mut docs = self.docs.write().await;
        docs.entry(name.as_str().to_string())
            .or_default()
            .merge(&patch);
        Ok(())
    }

    async fn delete(&self, name: &ItemName) -> Result<(), StoreError> {
        let mut docs = self.docs.write().await;
        docs.remove(name.as_str());
        Ok(())
    }
}
