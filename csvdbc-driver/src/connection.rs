use crate::database::Database;
use crate::statement::Statement;

/// A connection to one configured CSV source.
///
/// Connections capture the database's source path at creation time; changing
/// the database afterwards does not affect existing connections.
#[derive(Debug, Clone)]
pub struct Connection {
    uri: Option<String>,
}

impl Connection {
    pub fn new(database: &Database) -> Self {
        Self {
            uri: database.uri().map(str::to_string),
        }
    }

    /// Create a statement bound to this connection's source.
    pub fn new_statement(&self) -> Statement {
        Statement::new(self)
    }

    pub(crate) fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
}
