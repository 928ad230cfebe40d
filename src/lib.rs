//! # Number Registry
//!
//! A registry of uniquely keyed number records with a per-record
//! append-only transaction history, persisted through an external
//! key-value ledger.
//!
//! ## Core Concepts
//!
//! - **Records**: One [`NumberRecord`] per key, created and mutated in
//!   place via [`RecordStore`]
//! - **Transaction log**: An append-only audit trail per record key,
//!   managed by [`TransactionLog`]
//! - **Ledger**: The external store behind the [`Ledger`] trait; it owns
//!   all state and supplies atomicity and per-key ordering
//! - **Dispatch**: The string calling convention of the host, normalized
//!   into a closed [`Operation`] enum at the boundary
//!
//! ## Example
//!
//! ```
//! use number_registry::{dispatch, MemoryLedger, NumberRecord, Operation, RecordStore};
//!
//! # fn main() -> number_registry::Result<()> {
//! let ledger = MemoryLedger::new();
//! let store = RecordStore::new(&ledger);
//!
//! store.create("555-0100", true, "Acme")?;
//! store.update_company("555-0100", "Globex")?;
//!
//! let record = NumberRecord::from_bytes(&store.get("555-0100")?)?;
//! assert_eq!(record.company, "Globex");
//!
//! // Or through the host-facing calling convention:
//! let op = Operation::parse("get", &["555-0100".to_string()])?;
//! let bytes = dispatch(&ledger, op)?;
//! assert!(!bytes.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod dispatch;
pub mod error;
pub mod ledger;
pub mod log;
pub mod store;
pub mod types;

// Re-exports
pub use dispatch::{dispatch, Operation};
pub use error::{RegistryError, Result};
pub use ledger::{Ledger, MemoryLedger};
pub use log::TransactionLog;
pub use store::RecordStore;
pub use types::{NumberRecord, TransactionEntry, TransactionList};
