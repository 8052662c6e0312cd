//! User — the owning identity a plant record is attributed to.
//!
//! User management (sign-up, credential changes) is not part of this service;
//! users exist so plants can reference an owner and so bearer tokens resolve
//! to an identity. The token digest lives only in storage, never on this type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  #[serde(rename = "id")]
  pub user_id:    Uuid,
  pub email:      String,
  #[serde(rename = "createdAt")]
  pub created_at: DateTime<Utc>,
}

/// Input for provisioning a user. `token_digest` is the hex-encoded SHA-256
/// of the opaque bearer token handed to the user out of band.
#[derive(Debug, Clone)]
pub struct NewUser {
  pub email:        String,
  pub token_digest: String,
}
