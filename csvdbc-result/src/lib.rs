//! Error types and result definitions for the csvdbc driver.
//!
//! This crate provides the unified error type ([`Error`]) and result type alias
//! ([`Result<T>`]) used throughout the csvdbc crates. All operations that could
//! fail return `Result<T>`, where the error variant describes what went wrong.
//!
//! # Error Philosophy
//!
//! csvdbc uses a single error enum ([`Error`]) rather than crate-specific error
//! types.
//!
//! This approach:
//! - Simplifies error handling across crate boundaries
//! - Allows errors to propagate naturally with the `?` operator
//! - Provides clear error messages for end users
//! - Enables structured error matching for programmatic handling
//!
//! # Error Categories
//!
//! - **I/O errors** ([`Error::Io`]): file access and read failures
//! - **Data format errors** ([`Error::Arrow`]): Arrow buffer and batch issues
//! - **Shape violations** ([`Error::FieldCountMismatch`]): rows that do not
//!   match the inferred schema
//! - **Unsupported operations** ([`Error::NotSupported`]): query text this
//!   driver does not implement
//! - **User input errors** ([`Error::InvalidArgumentError`]): bad option keys,
//!   misconfigured statements
//! - **Internal errors** ([`Error::Internal`]): bugs or unexpected states

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;
