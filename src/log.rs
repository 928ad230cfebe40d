//! Append-only per-record transaction log.

use crate::error::Result;
use crate::ledger::Ledger;
use crate::types::{TransactionEntry, TransactionList};
use tracing::debug;

/// Prefix joined with the record key to derive the log's ledger key.
const LOG_KEY_PREFIX: &str = "transaction_";

/// Append-only audit trail keyed by record.
///
/// The log for a key has two macro-states: absent (nothing ever appended)
/// and populated. The first append materializes it; after that it only
/// grows. Entries are never removed or reordered.
pub struct TransactionLog<'a> {
    ledger: &'a dyn Ledger,
}

impl<'a> TransactionLog<'a> {
    pub fn new(ledger: &'a dyn Ledger) -> Self {
        Self { ledger }
    }

    /// Ledger key holding the transaction history for `number`.
    pub fn log_key(number: &str) -> String {
        format!("{LOG_KEY_PREFIX}{number}")
    }

    /// Append an entry describing an operation on `number`.
    ///
    /// Reads the existing history, pushes a new timestamped entry, and
    /// writes the full list back. Not idempotent: two calls append two
    /// entries. Existing bytes that fail to decode are an error; the log
    /// is never silently restarted over a corrupt document.
    pub fn append(&self, number: &str, detail: &str) -> Result<()> {
        let key = Self::log_key(number);

        let mut list = match self.ledger.get(&key)? {
            Some(bytes) => TransactionList::from_bytes(&bytes)?,
            None => TransactionList::default(),
        };

        list.transactions.push(TransactionEntry::now(detail));
        self.ledger.put(&key, &list.to_bytes()?)?;

        debug!(number, detail, entries = list.len(), "appended transaction entry");
        Ok(())
    }

    /// Return the stored history bytes verbatim.
    ///
    /// An absent log yields empty bytes, not an error; interpretation is
    /// the caller's concern.
    pub fn read_all(&self, number: &str) -> Result<Vec<u8>> {
        let key = Self::log_key(number);
        Ok(self.ledger.get(&key)?.unwrap_or_default())
    }

    /// Decode the stored history for `number`.
    pub fn read_entries(&self, number: &str) -> Result<TransactionList> {
        let bytes = self.read_all(number)?;
        if bytes.is_empty() {
            return Ok(TransactionList::default());
        }
        TransactionList::from_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use crate::ledger::MemoryLedger;

    #[test]
    fn test_log_key_derivation() {
        assert_eq!(TransactionLog::log_key("555-0100"), "transaction_555-0100");
    }

    #[test]
    fn test_read_absent_log() {
        let ledger = MemoryLedger::new();
        let log = TransactionLog::new(&ledger);

        assert!(log.read_all("never").unwrap().is_empty());
        assert!(log.read_entries("never").unwrap().is_empty());
    }

    #[test]
    fn test_append_materializes_log() {
        let ledger = MemoryLedger::new();
        let log = TransactionLog::new(&ledger);

        log.append("555-0100", "creating number").unwrap();

        let entries = log.read_entries("555-0100").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.transactions[0].detail, "creating number");
    }

    #[test]
    fn test_append_preserves_order() {
        let ledger = MemoryLedger::new();
        let log = TransactionLog::new(&ledger);

        for i in 0..5 {
            log.append("555-0100", &format!("op {i}")).unwrap();
        }

        let entries = log.read_entries("555-0100").unwrap();
        assert_eq!(entries.len(), 5);
        for (i, entry) in entries.transactions.iter().enumerate() {
            assert_eq!(entry.detail, format!("op {i}"));
        }
    }

    #[test]
    fn test_append_is_not_idempotent() {
        let ledger = MemoryLedger::new();
        let log = TransactionLog::new(&ledger);

        log.append("555-0100", "creating number").unwrap();
        log.append("555-0100", "creating number").unwrap();

        assert_eq!(log.read_entries("555-0100").unwrap().len(), 2);
    }

    #[test]
    fn test_append_rejects_corrupt_log() {
        let ledger = MemoryLedger::new();
        ledger
            .put(&TransactionLog::log_key("555-0100"), b"not a log document")
            .unwrap();

        let log = TransactionLog::new(&ledger);
        let result = log.append("555-0100", "creating number");
        assert!(matches!(result, Err(RegistryError::Deserialization(_))));

        // Corrupt bytes are left untouched for the operator to inspect.
        let stored = log.read_all("555-0100").unwrap();
        assert_eq!(stored, b"not a log document");
    }

    #[test]
    fn test_logs_are_isolated_per_key() {
        let ledger = MemoryLedger::new();
        let log = TransactionLog::new(&ledger);

        log.append("555-0100", "creating number").unwrap();
        log.append("555-0199", "creating number").unwrap();
        log.append("555-0199", "Updated number").unwrap();

        assert_eq!(log.read_entries("555-0100").unwrap().len(), 1);
        assert_eq!(log.read_entries("555-0199").unwrap().len(), 2);
    }
}
