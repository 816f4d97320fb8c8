use std::io;

use thiserror::Error;

/// Unified error type for all csvdbc operations.
///
/// This enum covers every failure mode in the driver, from low-level scan
/// errors to lifecycle misuse. Each variant carries enough context for a host
/// adapter to present the failure without inspecting internal state.
///
/// # Error Handling Strategy
///
/// Errors propagate upward through the call stack using Rust's `?` operator.
/// Nothing is retried internally: a local file read is assumed to fail
/// deterministically, so every failure is reported to the caller on the call
/// that detected it. At the stream boundary the most recent failure message is
/// additionally cached so hosts that can only consume flat status codes can
/// still retrieve it after the fact.
///
/// # Thread Safety
///
/// `Error` implements `Send` and `Sync`, allowing errors to cross thread
/// boundaries even though a single stream instance is single-owner.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while opening or scanning the source file.
    ///
    /// Wraps standard library I/O errors. This is the "scan error" class:
    /// anything the tokenizer hits at the byte level surfaces here, including
    /// the initial `File::open` failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Arrow library error during columnar data operations.
    ///
    /// Raised when building arrays or assembling record batches fails. Arrow
    /// is the columnar interchange format used by csvdbc, so these errors
    /// indicate buffer allocation or batch construction problems rather than
    /// malformed input.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// A data line's field count differs from the schema's column count.
    ///
    /// The header fixes the column count for the life of a stream; every
    /// subsequent line must match it exactly. This is a hard contract:
    /// short or long rows are never silently padded or truncated. A common
    /// trigger is a blank line inside a multi-column file, which parses as a
    /// single empty field.
    ///
    /// Terminal for the batch being built; previously produced batches and
    /// the schema itself remain valid.
    #[error("expected {expected} fields but found {found} fields")]
    FieldCountMismatch {
        /// Column count fixed by the header.
        expected: usize,
        /// Field count of the offending line.
        found: usize,
    },

    /// Operation or query text this driver does not implement.
    ///
    /// The only accepted query is the empty string, meaning "read the
    /// configured file in full". Any other text is rejected up front, before
    /// the source file is touched.
    #[error("not supported: {0}")]
    NotSupported(String),

    /// Invalid user input or API parameter.
    ///
    /// Unknown option keys, executing a statement with no configured source
    /// path, and similar misuse. The message states what was invalid.
    ///
    /// # Recovery
    ///
    /// These errors are recoverable: fix the input and retry the operation.
    #[error("Invalid argument: {0}")]
    InvalidArgumentError(String),

    /// Internal error indicating a bug or unexpected state.
    ///
    /// Should not occur during normal operation. Also used when a stream in
    /// the failed state is pulled again: the cached failure message is
    /// re-surfaced under this variant.
    #[error("An internal operation failed: {0}")]
    Internal(String),
}

impl Error {
    /// Create a not-supported error from any displayable value.
    ///
    /// # Examples
    ///
    /// ```
    /// use csvdbc_result::Error;
    ///
    /// let err = Error::not_supported("SELECT 1");
    /// assert!(matches!(err, Error::NotSupported(msg) if msg.contains("SELECT")));
    /// ```
    #[inline]
    pub fn not_supported<E: std::fmt::Display>(what: E) -> Self {
        Error::NotSupported(what.to_string())
    }

    /// Create an internal error from any displayable value.
    #[inline]
    pub fn internal<E: std::fmt::Display>(err: E) -> Self {
        Error::Internal(err.to_string())
    }
}
