//! Inventory operation errors.

use crate::infrastructure::ports::StoreError;
use larder_domain::DomainError;

/// Errors that can occur during inventory operations.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error("Record store error: {0}")]
    Store(#[from] StoreError),
}
