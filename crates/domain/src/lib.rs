extern crate self as larder_domain;

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::InventoryRecord;
pub use error::DomainError;
pub use value_objects::{ItemName, Quantity, QuantityChange};

/// The full in-memory copy of all records retrieved in one enumeration call.
///
/// One entry per distinct name, in the store's enumeration order. The order
/// is implementation-defined but stable within a single fetch.
pub type InventorySnapshot = Vec<InventoryRecord>;
