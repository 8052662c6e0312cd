//! Plant — the sole managed entity.
//!
//! A plant is a flat record with a required name and type, attributed to
//! exactly one owning user. The owner is fixed at creation and can never be
//! changed through an update; [`PlantPatch`] simply has no owner field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, guard::Owned, user::User};

/// A persisted plant record. `owner` serialises as the bare user id; reads
/// that resolve the reference use [`PopulatedPlant`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
  #[serde(rename = "id")]
  pub plant_id:   Uuid,
  pub name:       String,
  #[serde(rename = "type")]
  pub kind:       String,
  pub owner:      Uuid,
  #[serde(rename = "createdAt")]
  pub created_at: DateTime<Utc>,
  #[serde(rename = "updatedAt")]
  pub updated_at: DateTime<Utc>,
}

impl Owned for Plant {
  fn resource_id(&self) -> Uuid { self.plant_id }
  fn owner_id(&self) -> Uuid { self.owner }
}

/// Input for creating a plant. The owner comes from the authenticated
/// requester, never from the request body.
#[derive(Debug, Clone)]
pub struct NewPlant {
  pub name:  String,
  pub kind:  String,
  pub owner: Uuid,
}

impl NewPlant {
  /// Required-field check applied before the record reaches the store.
  pub fn validate(&self) -> Result<()> {
    if self.name.is_empty() {
      return Err(Error::Validation("name must not be blank".into()));
    }
    if self.kind.is_empty() {
      return Err(Error::Validation("type must not be blank".into()));
    }
    Ok(())
  }
}

/// Partial update. `None` fields are left untouched by the store; there is
/// deliberately no owner field here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlantPatch {
  pub name: Option<String>,
  #[serde(rename = "type")]
  pub kind: Option<String>,
}

impl PlantPatch {
  pub fn is_empty(&self) -> bool { self.name.is_none() && self.kind.is_none() }
}

/// A plant with its owner reference resolved — the read model for GET
/// responses. Never stored, always derived.
#[derive(Debug, Clone, Serialize)]
pub struct PopulatedPlant {
  #[serde(rename = "id")]
  pub plant_id:   Uuid,
  pub name:       String,
  #[serde(rename = "type")]
  pub kind:       String,
  pub owner:      User,
  #[serde(rename = "createdAt")]
  pub created_at: DateTime<Utc>,
  #[serde(rename = "updatedAt")]
  pub updated_at: DateTime<Utc>,
}

impl PopulatedPlant {
  pub fn new(plant: Plant, owner: User) -> Self {
    Self {
      plant_id:   plant.plant_id,
      name:       plant.name,
      kind:       plant.kind,
      owner,
      created_at: plant.created_at,
      updated_at: plant.updated_at,
    }
  }
}
