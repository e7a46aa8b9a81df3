use std::{fmt, result};

/// This is a specialized Result, similar to std::io::Result
pub type Result<T> = result::Result<T, Error>;

/// Errors reported by the collaborator-facing helpers of this crate.
///
/// Constructing a header never fails. A bad version string or missing
/// credentials are only rejected by the device, so they do not appear here.
#[derive(Debug)]
pub enum Error {
  /// Header could not be encoded to or decoded from JSON.
  Json { reason: String },
  /// Header could not be encoded to or decoded from the binary form.
  Binary { reason: String },
  /// Binary input contained bytes after a complete header.
  TrailingBytes(usize),
  /// Response does not answer the request it was matched against.
  TransactionMismatch {
    expected: String,
    found: Option<String>,
  },
  /// Response carries a different session than the request.
  SessionMismatch {
    expected: Option<String>,
    found: Option<String>,
  },
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::Json { reason } => write!(f, "JSON header error: {}", reason),
      Error::Binary { reason } => write!(f, "binary header error: {}", reason),
      Error::TrailingBytes(n) => write!(f, "trailing garbage after header, {} bytes", n),
      Error::TransactionMismatch { expected, found } => write!(
        f,
        "response transaction {:?} does not match request transaction {:?}",
        found, expected
      ),
      Error::SessionMismatch { expected, found } => write!(
        f,
        "response session {:?} does not match request session {:?}",
        found, expected
      ),
    }
  }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
  fn from(e: serde_json::Error) -> Error {
    Error::Json {
      reason: e.to_string(),
    }
  }
}

impl From<speedy::Error> for Error {
  fn from(e: speedy::Error) -> Error {
    Error::Binary {
      reason: e.to_string(),
    }
  }
}
