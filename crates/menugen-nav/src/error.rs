use std::io;

use thiserror::Error;

/// Error type for menu generation operations.
#[derive(Debug, Error)]
pub enum MenuError {
  /// The manifest could not be retrieved from its location.
  #[error("failed to fetch manifest: {0}")]
  Fetch(#[from] io::Error),

  /// The manifest is not a valid JSON array of path records.
  #[error("failed to parse manifest: {0}")]
  Parse(#[from] serde_json::Error),

  /// A single record does not carry the expected path shape. This is a
  /// per-item condition: callers skip the record and keep going.
  #[error("malformed record `{path}`: {reason}")]
  MalformedRecord {
    path:   String,
    reason: String,
  },
}
