//! Incremental columnar batch construction.

use std::io::Read;
use std::sync::Arc;

use arrow::array::{ArrayRef, StringBuilder};
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;

use csvdbc_result::{Error, Result};

use crate::scan::{CsvScanner, Terminator};

/// Accumulates row values into per-column builders and emits record batches.
///
/// The schema's column count is a hard contract: every appended line must
/// match it exactly, short and long rows are rejected rather than padded or
/// truncated. Draining with [`CsvBatchBuilder::finish`] resets the builders,
/// so one builder serves every chunk of a stream.
#[derive(Debug)]
pub struct CsvBatchBuilder {
    schema: SchemaRef,
    columns: Vec<StringBuilder>,
    rows: usize,
}

impl CsvBatchBuilder {
    pub fn new(schema: SchemaRef) -> Self {
        let columns = (0..schema.fields().len())
            .map(|_| StringBuilder::new())
            .collect();
        Self {
            schema,
            columns,
            rows: 0,
        }
    }

    /// Number of rows accumulated since the last [`CsvBatchBuilder::finish`].
    #[inline]
    pub fn len(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Append one line's field values, preserving row order.
    pub fn append_line(&mut self, fields: &[String]) -> Result<()> {
        if fields.len() != self.columns.len() {
            return Err(Error::FieldCountMismatch {
                expected: self.columns.len(),
                found: fields.len(),
            });
        }
        for (column, value) in self.columns.iter_mut().zip(fields) {
            column.append_value(value);
        }
        self.rows += 1;
        Ok(())
    }

    /// Read lines from the scanner until the row limit is reached or the
    /// input ends. Returns `true` once the source is exhausted.
    pub fn fill_from<R: Read>(
        &mut self,
        scanner: &mut CsvScanner<R>,
        limit: usize,
    ) -> Result<bool> {
        loop {
            let (fields, term) = scanner.read_line()?;
            if term == Terminator::EndOfInput {
                return Ok(true);
            }
            self.append_line(&fields)?;
            if self.rows >= limit {
                return Ok(false);
            }
        }
    }

    /// Drain the accumulated rows into one batch.
    ///
    /// Every column buffer carries exactly [`CsvBatchBuilder::len`] values;
    /// the builders are left empty, ready for the next chunk.
    pub fn finish(&mut self) -> Result<RecordBatch> {
        let arrays = self
            .columns
            .iter_mut()
            .map(|column| Arc::new(column.finish()) as ArrayRef)
            .collect::<Vec<ArrayRef>>();
        self.rows = 0;
        Ok(RecordBatch::try_new(Arc::clone(&self.schema), arrays)?)
    }
}
