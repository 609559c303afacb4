//! Seams between the generator and its collaborators.
//!
//! The generator only needs a way to turn postal codes into addresses and a
//! place to put the finished table. Concrete apps (and tests) plug their own
//! implementations in here.

use std::path::Path;

use crate::error::FixtureError;
use crate::generator::JobTable;

/// Resolves a postal code to a street address.
///
/// Implementations authenticate up front; by the time `resolve` is called the
/// resolver must be ready to answer. A `None` means the code could not be
/// resolved and the job using it is dropped.
pub trait AddressResolver {
    fn resolve(&self, postal_code: &str) -> Option<String>;
}

/// Persists a finished job table.
pub trait TableSink {
    /// Rejects destinations the sink cannot write, before any work is done.
    fn check_path(&self, _path: &Path) -> Result<(), FixtureError> {
        Ok(())
    }

    fn write(&self, table: &JobTable, path: &Path) -> Result<(), FixtureError>;
}
