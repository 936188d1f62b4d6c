//! Snapshot storage for graphs
//!
//! Backends implement the `GraphStore` trait. `JsonStore` reads and writes
//! the single-file JSON snapshot format.

mod json;
mod snapshot;
mod traits;

pub use json::JsonStore;
pub use snapshot::{EdgeRecord, GraphSnapshot, NodeRecord};
pub use traits::{GraphStore, StorageError, StorageResult};
