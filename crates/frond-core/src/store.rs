//! The `PlantStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `frond-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::{
  plant::{NewPlant, Plant, PlantPatch},
  user::{NewUser, User},
};

/// Abstraction over a Frond storage backend.
///
/// Plants are plain mutable documents: updates are last-write-wins at the
/// record level, and deletes are hard deletes.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait PlantStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Plants ────────────────────────────────────────────────────────────

  /// List every plant, in creation order.
  fn list_plants(
    &self,
  ) -> impl Future<Output = Result<Vec<Plant>, Self::Error>> + Send + '_;

  /// Retrieve a plant by id. Returns `None` if not found.
  fn get_plant(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Plant>, Self::Error>> + Send + '_;

  /// Persist a new plant. The id and both timestamps are assigned by the
  /// store.
  fn create_plant(
    &self,
    input: NewPlant,
  ) -> impl Future<Output = Result<Plant, Self::Error>> + Send + '_;

  /// Apply a partial update. Fields that are `None` in `patch` leave the
  /// stored values untouched; `updated_at` is bumped whenever a row matches.
  /// Returns the updated record, or `None` if no plant has this id.
  fn update_plant(
    &self,
    id: Uuid,
    patch: PlantPatch,
  ) -> impl Future<Output = Result<Option<Plant>, Self::Error>> + Send + '_;

  /// Remove a plant. Returns `false` if no plant has this id.
  fn delete_plant(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Provision a user. Used by the CLI helper and by tests; there is no
  /// HTTP surface for this.
  fn add_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// Retrieve a user by id — backs owner-reference resolution on reads.
  fn get_user(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  /// Resolve a bearer-token digest to its user. Returns `None` for unknown
  /// digests; the caller translates that into an auth failure.
  fn find_user_by_token_digest<'a>(
    &'a self,
    digest: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;
}
