//! Typed dispatch boundary for the external calling convention.
//!
//! Hosts invoke the registry with an operation name and a list of string
//! arguments. That convention is normalized here, once, into a closed
//! [`Operation`] enum; everything past this boundary works with typed
//! values. Unknown names and wrong argument counts are rejected before any
//! ledger access.

use crate::error::{RegistryError, Result};
use crate::ledger::Ledger;
use crate::log::TransactionLog;
use crate::store::RecordStore;
use tracing::warn;

/// A validated registry operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Create {
        number: String,
        available: bool,
        company: String,
    },
    UpdateCompany {
        number: String,
        company: String,
    },
    Get {
        number: String,
    },
    ReadLog {
        number: String,
    },
}

impl Operation {
    /// Parse an external `(function, args)` invocation.
    ///
    /// Accepted names: `create`, `updateOwner` (alias `updatecompany`),
    /// `get`, `readLog`. For `create` the company argument may be omitted
    /// and defaults to empty; a malformed availability flag falls back to
    /// `true`, matching the historical wire behavior.
    pub fn parse(function: &str, args: &[String]) -> Result<Self> {
        match function {
            "create" => {
                if args.len() < 2 {
                    return Err(RegistryError::Validation(format!(
                        "create expects at least 2 arguments, got {}",
                        args.len()
                    )));
                }
                let available = args[1].parse::<bool>().unwrap_or_else(|_| {
                    warn!(value = %args[1], "unparsable availability flag, defaulting to true");
                    true
                });
                Ok(Operation::Create {
                    number: args[0].clone(),
                    available,
                    company: args.get(2).cloned().unwrap_or_default(),
                })
            }
            "updateOwner" | "updatecompany" => {
                if args.len() != 2 {
                    return Err(RegistryError::Validation(format!(
                        "{function} expects 2 arguments, got {}",
                        args.len()
                    )));
                }
                Ok(Operation::UpdateCompany {
                    number: args[0].clone(),
                    company: args[1].clone(),
                })
            }
            "get" => {
                if args.len() != 1 {
                    return Err(RegistryError::Validation(format!(
                        "get expects 1 argument, got {}",
                        args.len()
                    )));
                }
                Ok(Operation::Get {
                    number: args[0].clone(),
                })
            }
            "readLog" => {
                if args.len() != 1 {
                    return Err(RegistryError::Validation(format!(
                        "readLog expects 1 argument, got {}",
                        args.len()
                    )));
                }
                Ok(Operation::ReadLog {
                    number: args[0].clone(),
                })
            }
            other => Err(RegistryError::Validation(format!(
                "unknown operation: {other}"
            ))),
        }
    }
}

/// Execute a validated operation against `ledger`.
///
/// Returns the operation's byte payload; `Create` yields empty bytes.
pub fn dispatch(ledger: &dyn Ledger, operation: Operation) -> Result<Vec<u8>> {
    match operation {
        Operation::Create {
            number,
            available,
            company,
        } => {
            RecordStore::new(ledger).create(&number, available, &company)?;
            Ok(Vec::new())
        }
        Operation::UpdateCompany { number, company } => {
            RecordStore::new(ledger).update_company(&number, &company)
        }
        Operation::Get { number } => RecordStore::new(ledger).get(&number),
        Operation::ReadLog { number } => TransactionLog::new(ledger).read_all(&number),
    }
}
