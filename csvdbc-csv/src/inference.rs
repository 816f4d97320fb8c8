//! Header-row schema inference.
//!
//! This driver infers the cheapest possible schema: one nullable `Utf8`
//! column per header field, named by the field text. No type sniffing is
//! performed on data rows.

use std::io::Read;
use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use csvdbc_result::Result;

use crate::scan::CsvScanner;

/// Derive the stream schema from the next line of the scanner.
///
/// Consumes exactly one line. Header values become column names verbatim:
/// duplicates and empty names are preserved, no validation or renaming is
/// performed. Empty input yields a schema with zero columns.
pub fn infer_schema<R: Read>(scanner: &mut CsvScanner<R>) -> Result<SchemaRef> {
    let (names, _term) = scanner.read_line()?;
    let fields = names
        .into_iter()
        .map(|name| Field::new(name, DataType::Utf8, true))
        .collect::<Vec<Field>>();
    Ok(Arc::new(Schema::new(fields)))
}
