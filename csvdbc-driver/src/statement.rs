use csvdbc_csv::{CsvReadOptions, CsvReader, CsvStream};
use csvdbc_result::{Error, Result};

use crate::connection::Connection;

/// An executable statement over one CSV source.
///
/// The statement's query surface is intentionally trivial: the empty string
/// means "read the configured file in full" and is the only accepted text.
/// Read options (separators, batch size) can be adjusted per statement.
#[derive(Debug, Clone)]
pub struct Statement {
    uri: Option<String>,
    options: CsvReadOptions,
}

impl Statement {
    pub fn new(connection: &Connection) -> Self {
        Self {
            uri: connection.uri().map(str::to_string),
            options: CsvReadOptions::default(),
        }
    }

    /// Set the query text.
    ///
    /// Only the empty query is supported; any other text is rejected here,
    /// before the source file is touched.
    pub fn set_sql_query(&mut self, query: &str) -> Result<()> {
        if query.is_empty() {
            Ok(())
        } else {
            Err(Error::NotSupported(format!(
                "query text is not supported: {query:?}"
            )))
        }
    }

    /// Override the read options used at execution time.
    pub fn set_read_options(&mut self, options: CsvReadOptions) {
        self.options = options;
    }

    /// Execute the (empty) query.
    ///
    /// Opens the configured file and returns the batch stream along with the
    /// rows-affected value, which is always unknown: this connector cannot
    /// count rows without a full scan.
    pub fn execute_query(&self) -> Result<(CsvStream, Option<i64>)> {
        let uri = self.uri.as_deref().ok_or_else(|| {
            Error::InvalidArgumentError("no source uri configured".to_string())
        })?;
        tracing::debug!("executing csv read over {uri}");
        let stream = CsvReader::new(self.options.clone()).open(uri)?;
        Ok((stream, None))
    }
}
