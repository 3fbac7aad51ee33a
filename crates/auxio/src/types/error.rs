/*! Error types for auxio operations. */

use super::WindowId;

/// Failures while recovering a `SpawnConfig` from a feature string.
///
/// Every variant is terminal for that one spawn attempt: the host logs,
/// denies the request, and registers nothing. None of them may crash the
/// interceptor's caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
  /// Feature-string parsing yielded no `config` entry.
  #[error("feature string has no config entry")]
  MalformedFeatureString,

  /// The `config` value is not valid base64-wrapped JSON.
  #[error("config entry is not decodable: {0}")]
  InvalidEncoding(String),

  /// Decoded JSON does not have the `{id: string, options: object}` shape.
  #[error("config has invalid shape: {0}")]
  SchemaViolation(String),
}

/// Errors that can occur during auxio operations.
#[derive(Debug, thiserror::Error)]
pub enum AuxioError {
  /// A live window already uses this id. Ids are caller-chosen, so this is
  /// a programming error surfaced synchronously, not a runtime race.
  #[error("window id already in use: {0}")]
  DuplicateId(WindowId),

  /// Command target is not registered. Non-fatal: the window may have
  /// closed under a race the sender could not observe yet.
  #[error("window not found: {0}")]
  UnknownWindow(WindowId),

  #[error(transparent)]
  Decode(#[from] DecodeError),

  /// The spawn primitive refused or failed to open the navigation.
  #[error("spawn failed: {0}")]
  SpawnFailed(String),
}

/// Result type for auxio operations.
pub type AuxioResult<T> = Result<T, AuxioError>;
