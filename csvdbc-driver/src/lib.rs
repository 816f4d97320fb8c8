//! Driver, database, connection, and statement lifecycle for csvdbc.
//!
//! This crate is the connectivity surface around the CSV ingestion core in
//! [`csvdbc_csv`]. The object model follows the usual database-connectivity
//! quartet:
//!
//! - [`Driver`] creates [`Database`]s
//! - [`Database`] holds configuration (the `uri` option selects the file)
//! - [`Connection`] binds to a configured database
//! - [`Statement`] accepts a query and executes it, yielding a
//!   [`csvdbc_csv::CsvStream`]
//!
//! The only supported query is the empty string, meaning "read the configured
//! file in full"; any other text is rejected with a not-supported error
//! before the file is touched. Executing reports an unknown rows-affected
//! value, since the row count of a CSV file is only known after a full scan.
//!
//! [`Status`] flattens [`csvdbc_result::Error`] values into the coarse codes
//! a foreign ABI adapter needs.

pub mod connection;
pub mod database;
pub mod driver;
pub mod statement;
pub mod status;

pub use connection::Connection;
pub use database::{Database, OPTION_URI};
pub use driver::Driver;
pub use statement::Statement;
pub use status::Status;
