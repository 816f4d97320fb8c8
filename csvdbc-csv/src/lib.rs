//! CSV ingestion pipeline: scanning, schema inference, and batch streaming.
//!
//! This crate turns a delimited text file into a stream of Arrow
//! [`RecordBatch`](arrow::record_batch::RecordBatch)es. The first line of the
//! file is the header and fixes the column set; every column is typed as
//! `Utf8`. Data rows are appended into per-column builders and handed out as
//! bounded batches through [`CsvStream`], a pull-based session that performs
//! no work until asked.
//!
//! The pieces compose bottom-up:
//! - [`scan::CsvScanner`] tokenizes raw bytes into fields and lines
//! - [`inference::infer_schema`] derives the column set from the header
//! - [`builder::CsvBatchBuilder`] accumulates rows into columnar buffers
//! - [`reader::CsvStream`] drives the above lazily, one batch per pull

pub mod builder;
pub mod inference;
pub mod reader;
pub mod scan;

pub use builder::CsvBatchBuilder;
pub use reader::{CsvReadOptions, CsvReader, CsvStream};
pub use scan::{CsvScanner, Terminator};
