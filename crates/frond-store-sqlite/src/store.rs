//! [`SqliteStore`] — the SQLite implementation of [`PlantStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use frond_core::{
  plant::{NewPlant, Plant, PlantPatch},
  store::PlantStore,
  user::{NewUser, User},
};

use crate::{
  Error, Result,
  encode::{RawPlant, RawUser, encode_dt, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Frond store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn fetch_plant(&self, id: Uuid) -> Result<Option<Plant>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawPlant> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT plant_id, name, kind, owner, created_at, updated_at
             FROM plants WHERE plant_id = ?1",
            rusqlite::params![id_str],
            |row| {
              Ok(RawPlant {
                plant_id:   row.get(0)?,
                name:       row.get(1)?,
                kind:       row.get(2)?,
                owner:      row.get(3)?,
                created_at: row.get(4)?,
                updated_at: row.get(5)?,
              })
            },
          )
          .optional()?)
      })
      .await?;

    raw.map(RawPlant::into_plant).transpose()
  }
}

// ─── PlantStore impl ─────────────────────────────────────────────────────────

impl PlantStore for SqliteStore {
  type Error = Error;

  // ── Plants ────────────────────────────────────────────────────────────────

  async fn list_plants(&self) -> Result<Vec<Plant>> {
    let raws: Vec<RawPlant> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT plant_id, name, kind, owner, created_at, updated_at
           FROM plants ORDER BY created_at",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawPlant {
              plant_id:   row.get(0)?,
              name:       row.get(1)?,
              kind:       row.get(2)?,
              owner:      row.get(3)?,
              created_at: row.get(4)?,
              updated_at: row.get(5)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPlant::into_plant).collect()
  }

  async fn get_plant(&self, id: Uuid) -> Result<Option<Plant>> {
    self.fetch_plant(id).await
  }

  async fn create_plant(&self, input: NewPlant) -> Result<Plant> {
    let now = Utc::now();
    let plant = Plant {
      plant_id:   Uuid::new_v4(),
      name:       input.name,
      kind:       input.kind,
      owner:      input.owner,
      created_at: now,
      updated_at: now,
    };

    let id_str      = encode_uuid(plant.plant_id);
    let name        = plant.name.clone();
    let kind        = plant.kind.clone();
    let owner_str   = encode_uuid(plant.owner);
    let created_str = encode_dt(plant.created_at);
    let updated_str = encode_dt(plant.updated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO plants (plant_id, name, kind, owner, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![id_str, name, kind, owner_str, created_str, updated_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(plant)
  }

  async fn update_plant(&self, id: Uuid, patch: PlantPatch) -> Result<Option<Plant>> {
    let id_str      = encode_uuid(id);
    let updated_str = encode_dt(Utc::now());
    let name        = patch.name;
    let kind        = patch.kind;

    let changed: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE plants
           SET name = COALESCE(?1, name),
               kind = COALESCE(?2, kind),
               updated_at = ?3
           WHERE plant_id = ?4",
          rusqlite::params![name, kind, updated_str, id_str],
        )?)
      })
      .await?;

    if changed == 0 {
      return Ok(None);
    }
    self.fetch_plant(id).await
  }

  async fn delete_plant(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);

    let changed: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM plants WHERE plant_id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    Ok(changed > 0)
  }

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn add_user(&self, input: NewUser) -> Result<User> {
    let user = User {
      user_id:    Uuid::new_v4(),
      email:      input.email,
      created_at: Utc::now(),
    };

    let id_str      = encode_uuid(user.user_id);
    let email       = user.email.clone();
    let digest      = input.token_digest;
    let created_str = encode_dt(user.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO users (user_id, email, token_digest, created_at)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![id_str, email, digest, created_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(user)
  }

  async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT user_id, email, created_at FROM users WHERE user_id = ?1",
            rusqlite::params![id_str],
            |row| {
              Ok(RawUser {
                user_id:    row.get(0)?,
                email:      row.get(1)?,
                created_at: row.get(2)?,
              })
            },
          )
          .optional()?)
      })
      .await?;

    raw.map(RawUser::into_user).transpose()
  }

  async fn find_user_by_token_digest(&self, digest: &str) -> Result<Option<User>> {
    let digest = digest.to_owned();

    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT user_id, email, created_at FROM users WHERE token_digest = ?1",
            rusqlite::params![digest],
            |row| {
              Ok(RawUser {
                user_id:    row.get(0)?,
                email:      row.get(1)?,
                created_at: row.get(2)?,
              })
            },
          )
          .optional()?)
      })
      .await?;

    raw.map(RawUser::into_user).transpose()
  }
}
