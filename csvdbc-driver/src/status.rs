use std::io;

use csvdbc_result::Error;

/// Coarse status classification for hosts that consume flat status codes.
///
/// Foreign ABI adapters typically cannot carry a rich error payload across
/// the boundary; they return a status code and let the caller fetch the
/// message from the failing object's last-error slot. This enum is the
/// driver-side half of that convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    InvalidArgument,
    NotSupported,
    NotFound,
    Io,
    Internal,
}

impl From<&Error> for Status {
    fn from(err: &Error) -> Self {
        match err {
            Error::Io(inner) if inner.kind() == io::ErrorKind::NotFound => Status::NotFound,
            Error::Io(_) => Status::Io,
            Error::NotSupported(_) => Status::NotSupported,
            Error::InvalidArgumentError(_) | Error::FieldCountMismatch { .. } => {
                Status::InvalidArgument
            }
            Error::Arrow(_) | Error::Internal(_) => Status::Internal,
        }
    }
}

impl Status {
    /// Classify a result, treating success as [`Status::Ok`].
    pub fn of<T>(result: &csvdbc_result::Result<T>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(err) => Status::from(err),
        }
    }
}
