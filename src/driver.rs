//! Module `driver` defines the external collaborator contract a host
//! (table storage, tuple iteration, SQL glue) must satisfy to feed the
//! index a column (spec `§6`). Everything past the `scan` call is owned
//! by this crate.

use crate::error::Error;

/// Error surfaced by a host [Driver] while scanning a column.
pub type DriverError = Error;

/// Thin wrapper so callers can match on the domain-specific error names
/// the spec promises (`BuildError`, `QueryError`) while the core shares
/// one [Error] representation internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildError(pub Error);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError(pub Error);

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BuildError {}
impl std::error::Error for QueryError {}

impl From<Error> for BuildError {
    fn from(e: Error) -> Self {
        BuildError(e)
    }
}

impl From<Error> for QueryError {
    fn from(e: Error) -> Self {
        QueryError(e)
    }
}

/// External collaborator supplying the column to index (spec `§6`).
///
/// Rows arrive in undefined-but-stable order; a `None` value stands for
/// SQL NULL and is indexed as the empty string. No batching is required.
/// `RecordId`s are not supplied by the driver — the index assigns them
/// itself, densely, in the order `scan` yields rows (spec `§3`:
/// "assigned at build time in scan order").
pub trait Driver {
    /// Scan `table.column`, yielding one value per row.
    fn scan(
        &mut self,
        table: &str,
        column: &str,
    ) -> Result<Box<dyn Iterator<Item = Result<Option<Vec<u8>>, DriverError>> + '_>, DriverError>;
}
