//! Reader options and the pull-based batch stream.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;

use csvdbc_result::{Error, Result};

use crate::builder::CsvBatchBuilder;
use crate::inference;
use crate::scan::CsvScanner;

/// Configuration for reading delimited files.
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Byte that separates fields within a line.
    pub field_separator: u8,
    /// Byte that terminates a line.
    pub line_separator: u8,
    /// Maximum number of rows per emitted batch.
    pub batch_size: usize,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            field_separator: b',',
            line_separator: b'\n',
            batch_size: 1024,
        }
    }
}

/// Entry point for opening CSV batch streams.
#[derive(Debug, Clone, Default)]
pub struct CsvReader {
    options: CsvReadOptions,
}

impl CsvReader {
    pub fn new(options: CsvReadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CsvReadOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut CsvReadOptions {
        &mut self.options
    }

    /// Open a file and hand back a lazy batch stream over its contents.
    ///
    /// Only the file handle is acquired here; the header is not read until
    /// the stream's schema or first batch is requested.
    pub fn open<P: AsRef<Path>>(&self, path: P) -> Result<CsvStream> {
        let path = path.as_ref();
        tracing::debug!("opening csv stream for {}", path.display());
        let scanner = CsvScanner::open(
            path,
            self.options.field_separator,
            self.options.line_separator,
        )?;
        Ok(CsvStream::new(scanner, self.options.batch_size.max(1)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamState {
    Uninitialized,
    SchemaReady,
    Streaming,
    Done,
    Failed,
}

/// Pull-based stream of record batches over one CSV source.
///
/// The stream performs no work until asked: the header is read on the first
/// [`CsvStream::schema`] or [`CsvStream::next_batch`] call, and each pull
/// scans just enough lines to fill one bounded batch. End of stream is
/// reported as `None` and is sticky; there is no rewind.
///
/// Failures are absorbing. Once a pull fails, the source is released, the
/// message is retained for [`CsvStream::last_error`], and every later pull
/// reports the retained failure.
#[derive(Debug)]
pub struct CsvStream {
    scanner: Option<CsvScanner<File>>,
    builder: Option<CsvBatchBuilder>,
    schema: Option<SchemaRef>,
    batch_size: usize,
    state: StreamState,
    last_error: Option<String>,
}

impl CsvStream {
    pub(crate) fn new(scanner: CsvScanner<File>, batch_size: usize) -> Self {
        Self {
            scanner: Some(scanner),
            builder: None,
            schema: None,
            batch_size,
            state: StreamState::Uninitialized,
            last_error: None,
        }
    }

    /// The stream schema, inferred from the header line on first access.
    ///
    /// Later calls return the cached schema without touching the source, so
    /// repeated access is side-effect-free even after the stream is done.
    pub fn schema(&mut self) -> Result<SchemaRef> {
        if let Some(schema) = &self.schema {
            return Ok(Arc::clone(schema));
        }
        if self.state == StreamState::Failed {
            return Err(self.failed_error());
        }

        let inferred = match self.scanner.as_mut() {
            Some(scanner) => inference::infer_schema(scanner),
            None => Err(Error::Internal("stream already released".to_string())),
        };
        match inferred {
            Ok(schema) => {
                self.schema = Some(Arc::clone(&schema));
                self.state = StreamState::SchemaReady;
                Ok(schema)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Pull the next batch, or `None` once the source is exhausted.
    ///
    /// Infers the schema first if it has not been requested yet. Every batch
    /// holds at most the configured row limit; the final partial batch is
    /// emitted before end of stream is reported.
    pub fn next_batch(&mut self) -> Result<Option<RecordBatch>> {
        match self.state {
            StreamState::Done => return Ok(None),
            StreamState::Failed => return Err(self.failed_error()),
            _ => {}
        }

        let schema = self.schema()?;
        if self.builder.is_none() {
            self.builder = Some(CsvBatchBuilder::new(Arc::clone(&schema)));
        }

        let batch_size = self.batch_size;
        let step = match (self.scanner.as_mut(), self.builder.as_mut()) {
            (Some(scanner), Some(builder)) => builder.fill_from(scanner, batch_size),
            _ => Err(Error::Internal("stream already released".to_string())),
        };
        let exhausted = match step {
            Ok(exhausted) => exhausted,
            Err(err) => return Err(self.fail(err)),
        };

        let finished = match self.builder.as_mut() {
            Some(builder) if !builder.is_empty() => builder.finish().map(Some),
            _ => Ok(None),
        };
        let batch = match finished {
            Ok(batch) => batch,
            Err(err) => return Err(self.fail(err)),
        };

        if exhausted {
            self.state = StreamState::Done;
            self.release();
        } else {
            self.state = StreamState::Streaming;
        }

        if let Some(batch) = &batch {
            tracing::trace!("emitting csv batch with {} rows", batch.num_rows());
        }
        Ok(batch)
    }

    /// Message of the most recent failure, if the stream has failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Release the source file and buffered state.
    ///
    /// Idempotent: calling it again is a no-op. Also runs implicitly when the
    /// stream is dropped, and eagerly once the source is exhausted.
    pub fn release(&mut self) {
        self.scanner = None;
        self.builder = None;
    }

    fn fail(&mut self, err: Error) -> Error {
        tracing::debug!("csv stream entered failed state: {err}");
        self.last_error = Some(err.to_string());
        self.state = StreamState::Failed;
        self.release();
        err
    }

    fn failed_error(&self) -> Error {
        Error::Internal(
            self.last_error
                .clone()
                .unwrap_or_else(|| "stream is in a failed state".to_string()),
        )
    }
}

impl Iterator for CsvStream {
    type Item = Result<RecordBatch>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_batch().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::StringArray;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_sample_csv() -> NamedTempFile {
        let mut tmp = NamedTempFile::new().expect("create tmp");
        writeln!(tmp, "name,age").unwrap();
        writeln!(tmp, "Alice,30").unwrap();
        writeln!(tmp, "Bob,25").unwrap();
        tmp
    }

    fn column(batch: &RecordBatch, idx: usize) -> Vec<String> {
        batch
            .column(idx)
            .as_any()
            .downcast_ref::<StringArray>()
            .expect("utf8 column")
            .iter()
            .map(|v| v.expect("non-null value").to_string())
            .collect()
    }

    #[test]
    fn streams_file_as_one_batch() {
        let tmp = write_sample_csv();
        let mut stream = CsvReader::default().open(tmp.path()).expect("open");

        let schema = stream.schema().expect("schema");
        assert_eq!(schema.field(0).name(), "name");
        assert_eq!(schema.field(1).name(), "age");

        let batch = stream.next_batch().expect("pull").expect("batch");
        assert_eq!(batch.num_rows(), 2);
        assert_eq!(column(&batch, 0), vec!["Alice", "Bob"]);
        assert_eq!(column(&batch, 1), vec!["30", "25"]);

        assert!(stream.next_batch().expect("end").is_none());
        assert!(stream.next_batch().expect("still end").is_none());
    }

    #[test]
    fn schema_is_cached_after_first_access() {
        let tmp = write_sample_csv();
        let mut stream = CsvReader::default().open(tmp.path()).expect("open");

        let first = stream.schema().expect("schema");
        let second = stream.schema().expect("schema again");
        assert_eq!(first, second);

        // The header must not be consumed twice: the batch still holds every
        // data row.
        let batch = stream.next_batch().expect("pull").expect("batch");
        assert_eq!(batch.num_rows(), 2);

        // Still available after the stream is done.
        assert!(stream.next_batch().expect("end").is_none());
        assert_eq!(stream.schema().expect("schema after done"), first);
    }

    #[test]
    fn first_pull_infers_schema_on_demand() {
        let tmp = write_sample_csv();
        let mut stream = CsvReader::default().open(tmp.path()).expect("open");

        let batch = stream.next_batch().expect("pull").expect("batch");
        assert_eq!(batch.num_rows(), 2);
        assert_eq!(stream.schema().expect("schema").field(0).name(), "name");
    }

    #[test]
    fn bounded_batches_cover_all_rows() {
        let tmp = write_sample_csv();
        let reader = CsvReader::new(CsvReadOptions {
            batch_size: 1,
            ..Default::default()
        });
        let mut stream = reader.open(tmp.path()).expect("open");

        let first = stream.next_batch().expect("pull").expect("batch");
        assert_eq!(column(&first, 0), vec!["Alice"]);

        let second = stream.next_batch().expect("pull").expect("batch");
        assert_eq!(column(&second, 0), vec!["Bob"]);

        assert!(stream.next_batch().expect("end").is_none());
    }

    #[test]
    fn field_count_mismatch_is_absorbing() {
        let mut tmp = NamedTempFile::new().expect("create tmp");
        writeln!(tmp, "a,b,c").unwrap();
        writeln!(tmp, "1,2").unwrap();

        let mut stream = CsvReader::default().open(tmp.path()).expect("open");
        let err = stream.next_batch().expect_err("short row");
        assert!(err.to_string().contains("expected 3 fields but found 2"));

        let message = stream.last_error().expect("cached message").to_string();
        assert!(message.contains("expected 3 fields but found 2"));

        // The failure sticks: later pulls keep reporting it.
        let err = stream.next_batch().expect_err("still failed");
        assert!(err.to_string().contains("expected 3 fields but found 2"));
        assert_eq!(stream.last_error(), Some(message.as_str()));
    }

    #[test]
    fn empty_file_yields_empty_schema_and_no_batches() {
        let tmp = NamedTempFile::new().expect("create tmp");
        let mut stream = CsvReader::default().open(tmp.path()).expect("open");

        assert_eq!(stream.schema().expect("schema").fields().len(), 0);
        assert!(stream.next_batch().expect("end").is_none());
        assert!(stream.last_error().is_none());
    }

    #[test]
    fn release_is_idempotent() {
        let tmp = write_sample_csv();
        let mut stream = CsvReader::default().open(tmp.path()).expect("open");
        stream.release();
        stream.release();
    }

    #[test]
    fn iterator_surface_matches_pull_contract() {
        let tmp = write_sample_csv();
        let stream = CsvReader::default().open(tmp.path()).expect("open");

        let batches = stream
            .collect::<Result<Vec<RecordBatch>>>()
            .expect("collect");
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].num_rows(), 2);
    }
}
