//! Use cases - the application's entry points.

pub mod inventory;

pub use inventory::{InventoryError, InventoryTracker};
