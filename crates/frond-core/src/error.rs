//! Error types for `frond-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("resource not found: {0}")]
  NotFound(Uuid),

  #[error("user {user} does not own resource {resource}")]
  Forbidden { user: Uuid, resource: Uuid },

  /// A record references an owner that no longer exists in the store.
  #[error("owner not found: {0}")]
  OwnerMissing(Uuid),

  #[error("validation: {0}")]
  Validation(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
