//! Application state and composition.

use std::sync::Arc;

use crate::use_cases::InventoryTracker;

/// Main application state.
///
/// Holds the inventory tracker. Passed to HTTP handlers via Axum state.
pub struct App {
    pub inventory: Arc<InventoryTracker>,
}

impl App {
    pub fn new(inventory: Arc<InventoryTracker>) -> Self {
        Self { inventory }
    }
}
