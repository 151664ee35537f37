//! Key-value persistence abstraction.
//!
//! The credential store and the session manager both persist state through
//! this interface. Production deployments wire in whatever durable
//! per-origin store the host application has; tests use [`MemoryStorage`].

pub mod errors;
pub mod memory;

pub use errors::{StorageError, StorageResult};
pub use memory::MemoryStorage;

/// A minimal string key-value store.
///
/// Reads and writes are last-writer-wins with no transactions; callers that
/// need a read-modify-write sequence must serialize it themselves.
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key` if present. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}
