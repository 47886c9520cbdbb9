pub mod json_file;

use crate::model::{Snapshot, StorageError};

pub use json_file::JsonSnapshotStore;

/// Durable home of the last seen price snapshot.
pub trait SnapshotStore: Send + Sync {
    /// Returns the stored snapshot, or an empty one if nothing was stored yet.
    fn load(&self) -> Result<Snapshot, StorageError>;
    /// Replaces the stored snapshot.
    fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError>;
}
