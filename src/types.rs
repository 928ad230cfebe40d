//! Core types for the registry.

use crate::error::{RegistryError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A managed number record.
///
/// Persisted as field-tagged JSON under ledger key = `number`. The field
/// tags (`Number`, `Available`, `Company`) are the wire names consumers of
/// the raw payload see; they are fixed and must not change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRecord {
    /// Primary key. Immutable once created.
    #[serde(rename = "Number")]
    pub number: String,

    /// Whether the number is available for assignment.
    #[serde(rename = "Available")]
    pub available: bool,

    /// The company currently owning the number.
    #[serde(rename = "Company")]
    pub company: String,
}

impl NumberRecord {
    pub fn new(
        number: impl Into<String>,
        available: bool,
        company: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            available,
            company: company.into(),
        }
    }

    /// Encode to the wire representation.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode from stored bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| RegistryError::Deserialization(e.to_string()))
    }
}

impl fmt::Display for NumberRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (available: {}, company: {})", self.number, self.available, self.company)
    }
}

/// One entry in a record's transaction history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEntry {
    /// RFC 3339 UTC timestamp taken at append time.
    pub date: String,

    /// Free-text description of the operation.
    pub detail: String,
}

impl TransactionEntry {
    /// Create an entry stamped with the current time.
    pub fn now(detail: impl Into<String>) -> Self {
        Self {
            date: Utc::now().to_rfc3339(),
            detail: detail.into(),
        }
    }
}

/// The full transaction history for one record, as stored in the ledger.
///
/// Append order is chronological order; entries are never removed or
/// reordered. An absent document is equivalent to zero entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionList {
    pub transactions: Vec<TransactionEntry>,
}

impl TransactionList {
    /// Encode to the wire representation.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode from stored bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| RegistryError::Deserialization(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
