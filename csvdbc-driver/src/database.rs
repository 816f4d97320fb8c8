use csvdbc_result::{Error, Result};

/// Option key selecting the CSV file backing this database.
pub const OPTION_URI: &str = "uri";

/// Configuration holder for one CSV source.
///
/// A database is configured through string options before use; the only
/// recognized key is [`OPTION_URI`]. There is no catalog, no pooling, and no
/// transaction state behind it.
#[derive(Debug, Clone, Default)]
pub struct Database {
    uri: Option<String>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a configuration option.
    ///
    /// Unknown keys are rejected rather than ignored, so a misspelled option
    /// surfaces at configuration time instead of as a missing-source failure
    /// at execution time.
    pub fn set_option(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            OPTION_URI => {
                tracing::debug!("database source set to {value}");
                self.uri = Some(value.to_string());
                Ok(())
            }
            other => Err(Error::InvalidArgumentError(format!(
                "unknown database option '{other}'"
            ))),
        }
    }

    /// Finish configuration.
    ///
    /// Nothing is validated eagerly; the source path is only opened when a
    /// statement executes.
    pub fn init(&self) -> Result<()> {
        Ok(())
    }

    pub(crate) fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
}
