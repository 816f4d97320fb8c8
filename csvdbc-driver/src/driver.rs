use csvdbc_result::Result;

use crate::database::Database;

/// The main entry point for the csvdbc driver.
///
/// The driver is responsible for creating [`Database`] instances, which in
/// turn create connections.
#[derive(Debug, Default)]
pub struct Driver {}

impl Driver {
    /// Creates a new driver instance.
    pub fn new() -> Self {
        Self {}
    }

    /// Creates a new, unconfigured database.
    pub fn new_database(&self) -> Result<Database> {
        Ok(Database::new())
    }
}
