//! Record store: create, update, and point-lookup of number records.

use crate::error::{RegistryError, Result};
use crate::ledger::Ledger;
use crate::log::TransactionLog;
use crate::types::NumberRecord;
use tracing::{debug, info};

/// Log entry detail written after a successful create.
const DETAIL_CREATED: &str = "creating number";

/// Log entry detail written after a successful owner change.
const DETAIL_UPDATED: &str = "Updated number";

/// Stateless store for number records.
///
/// All state lives in the ledger; the store re-reads authoritative state
/// on every call and holds nothing between invocations. Each successful
/// mutation appends an audit entry via [`TransactionLog`].
pub struct RecordStore<'a> {
    ledger: &'a dyn Ledger,
    log: TransactionLog<'a>,
}

impl<'a> RecordStore<'a> {
    pub fn new(ledger: &'a dyn Ledger) -> Self {
        Self {
            ledger,
            log: TransactionLog::new(ledger),
        }
    }

    /// Create a record, unconditionally overwriting any prior value at the
    /// same key.
    ///
    /// Uniqueness of `number` is enforced by the ledger's key space; no
    /// separate existence check is performed. The audit entry is appended
    /// only after the record write succeeds, so a failed create leaves
    /// both the record key and the log untouched.
    pub fn create(&self, number: &str, available: bool, company: &str) -> Result<()> {
        debug!(number, available, company, "creating record");

        let record = NumberRecord::new(number, available, company);
        self.ledger.put(number, &record.to_bytes()?)?;
        self.log.append(number, DETAIL_CREATED)?;

        info!(number, "record created");
        Ok(())
    }

    /// Change the owning company of an existing record.
    ///
    /// Returns the serialized record, re-encoded if the owner changed and
    /// verbatim otherwise. An unchanged owner performs no ledger write and
    /// appends no audit entry.
    pub fn update_company(&self, number: &str, company: &str) -> Result<Vec<u8>> {
        debug!(number, company, "updating record owner");

        let bytes = self
            .ledger
            .get(number)?
            .ok_or_else(|| RegistryError::NotFound(number.to_string()))?;
        let mut record = NumberRecord::from_bytes(&bytes)?;

        if record.company == company {
            debug!(number, "owner unchanged, skipping write");
            return Ok(bytes);
        }

        record.company = company.to_string();
        let updated = record.to_bytes()?;
        self.ledger.put(number, &updated)?;
        self.log.append(number, DETAIL_UPDATED)?;

        info!(number, company, "record owner updated");
        Ok(updated)
    }

    /// Return the stored record bytes verbatim.
    ///
    /// A missing key yields empty bytes, not an error; decoding and
    /// validation are the caller's concern.
    pub fn get(&self, number: &str) -> Result<Vec<u8>> {
        Ok(self.ledger.get(number)?.unwrap_or_default())
    }
}
