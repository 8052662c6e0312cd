//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. UUIDs are stored as
//! hyphenated lowercase strings.

use chrono::{DateTime, Utc};
use frond_core::{plant::Plant, user::User};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `plants` row.
pub struct RawPlant {
  pub plant_id:   String,
  pub name:       String,
  pub kind:       String,
  pub owner:      String,
  pub created_at: String,
  pub updated_at: String,
}

impl RawPlant {
  pub fn into_plant(self) -> Result<Plant> {
    Ok(Plant {
      plant_id:   decode_uuid(&self.plant_id)?,
      name:       self.name,
      kind:       self.kind,
      owner:      decode_uuid(&self.owner)?,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}

/// Raw strings read directly from a `users` row. The token digest column is
/// never read back into a domain type.
pub struct RawUser {
  pub user_id:    String,
  pub email:      String,
  pub created_at: String,
}

impl RawUser {
  pub fn into_user(self) -> Result<User> {
    Ok(User {
      user_id:    decode_uuid(&self.user_id)?,
      email:      self.email,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
