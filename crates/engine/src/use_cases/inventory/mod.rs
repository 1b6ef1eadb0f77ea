//! Inventory tracking use cases.
//!
//! The tracker owns the in-memory mirror of the record set and applies the
//! business rules for each user action: every mutating operation is a
//! read-modify-write against the record store followed by a wholesale
//! resynchronization, so the cached snapshot equals store truth after every
//! call. The free-text name filter is applied on top of the snapshot.

mod error;

pub use error::InventoryError;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use larder_domain::{InventorySnapshot, ItemName, Quantity, QuantityChange};

use crate::infrastructure::ports::{RecordPatch, RecordStore};

/// Inventory controller.
///
/// Orchestrates add/increment/remove/toggle-favorite against the record
/// store and keeps the snapshot cache in sync. No mutual exclusion is
/// enforced between in-flight operations on the same name: the
/// fetch-then-write pair is a deliberately non-atomic two-step sequence,
/// and the store's per-key write atomicity is the only guarantee relied on.
pub struct InventoryTracker {
    store: Arc<dyn RecordStore>,
    snapshot: RwLock<InventorySnapshot>,
    filter: RwLock<String>,
}

impl InventoryTracker {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            snapshot: RwLock::new(Vec::new()),
            filter: RwLock::new(String::new()),
        }
    }

    /// Add one unit of `name`, creating the record at quantity 1 if it is
    /// not tracked yet.
    pub async fn add_item(&self, name: &str) -> Result<(), InventoryError> {
        let name = ItemName::new(name)?;
        let quantity = match self.store.fetch_one(&name).await? {
            Some(record) => record.quantity.increment(),
            None => Quantity::ONE,
        };
        self.store
            .upsert(&name, RecordPatch::quantity(quantity))
            .await?;
        info!(item = %name, quantity = quantity.get(), "Item added");

        self.refresh().await
    }

    /// Add one unit of `name` only if it is already tracked.
    ///
    /// Unlike [`add_item`](Self::add_item), an unknown name is left
    /// untracked rather than created.
    pub async fn increment_item(&self, name: &str) -> Result<(), InventoryError> {
        let name = ItemName::new(name)?;
        match self.store.fetch_one(&name).await? {
            Some(record) => {
                let quantity = record.quantity.increment();
                self.store
                    .upsert(&name, RecordPatch::quantity(quantity))
                    .await?;
                info!(item = %name, quantity = quantity.get(), "Item incremented");
            }
            None => {
                debug!(item = %name, "Increment skipped, item not tracked");
            }
        }

        self.refresh().await
    }

    /// Remove one unit of `name`; removing the last unit deletes the record
    /// entirely, so a zero quantity is never persisted. An unknown name is
    /// a no-op.
    pub async fn remove_item(&self, name: &str) -> Result<(), InventoryError> {
        let name = ItemName::new(name)?;
        match self.store.fetch_one(&name).await? {
            Some(record) => match record.quantity.decrement() {
                QuantityChange::Depleted => {
                    self.store.delete(&name).await?;
                    info!(item = %name, "Item removed, last unit gone");
                }
                QuantityChange::Updated(quantity) => {
                    self.store
                        .upsert(&name, RecordPatch::quantity(quantity))
                        .await?;
                    info!(item = %name, quantity = quantity.get(), "Item decremented");
                }
            },
            None => {
                debug!(item = %name, "Removal skipped, item not tracked");
            }
        }

        self.refresh().await
    }

    /// Flip the favorite flag; quantity and existence are untouched.
    ///
    /// The caller supplies the currently displayed favorite value and this
    /// writes its pure negation without re-reading the store. Two rapid
    /// toggles computed from the same stale view therefore collapse into
    /// one (last write wins) - kept for compatibility with the source
    /// behavior.
    pub async fn toggle_favorite(
        &self,
        name: &str,
        current_favorite: bool,
    ) -> Result<(), InventoryError> {
        let name = ItemName::new(name)?;
        let favorite = !current_favorite;
        self.store
            .upsert(&name, RecordPatch::favorite(favorite))
            .await?;
        info!(item = %name, favorite, "Favorite toggled");

        self.refresh().await
    }

    /// Store the free-text search query. No store traffic.
    pub async fn set_filter(&self, query: impl Into<String>) {
        *self.filter.write().await = query.into();
    }

    /// The cached records whose name contains the current filter,
    /// case-insensitively. An empty filter matches everything.
    pub async fn visible_records(&self) -> InventorySnapshot {
        let filter = self.filter.read().await.clone();
        self.snapshot
            .read()
            .await
            .iter()
            .filter(|record| record.matches_filter(&filter))
            .cloned()
            .collect()
    }

    /// Replace the cached snapshot wholesale with store truth.
    ///
    /// On failure the cache keeps its last-known-good value; the next
    /// successful refresh reconciles.
    pub async fn refresh(&self) -> Result<(), InventoryError> {
        let snapshot = self.store.fetch_all().await?;
        *self.snapshot.write().await = snapshot;
        Ok(())
    }
}
