//! Key-value ledger abstraction.
//!
//! The registry holds no state of its own; every operation reads from and
//! writes to a `Ledger` supplied by the host. Production hosts back this
//! with a transactionally consistent store; `MemoryLedger` is the
//! in-process reference implementation used for embedding and tests.

use crate::error::Result;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Abstraction over the external key-value ledger.
///
/// Contract required of implementations:
/// - `get` and `put` are each atomic and linearizable per call.
/// - A read-then-write sequence issued within one invocation of a registry
///   operation must not interleave with another invocation's write to the
///   same key. Per-key serialization is the substrate's obligation; the
///   registry performs no locking or retry of its own.
pub trait Ledger: Send + Sync {
    /// Get the value stored at `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` at `key`, overwriting any prior value.
    fn put(&self, key: &str, value: &[u8]) -> Result<()>;
}

/// In-memory ledger backed by a `HashMap`.
#[derive(Default)]
pub struct MemoryLedger {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Ledger for MemoryLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
