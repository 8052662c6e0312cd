//! Handlers for `/plants` endpoints.
//!
//! | Method   | Path           | Notes |
//! |----------|----------------|-------|
//! | `GET`    | `/plants`      | 200, owners resolved |
//! | `GET`    | `/plants/:id`  | 404 if not found |
//! | `POST`   | `/plants`      | 201; owner forced to the requester |
//! | `PATCH`  | `/plants/:id`  | 204; 404 / 403 guarded |
//! | `DELETE` | `/plants/:id`  | 204; 404 / 403 guarded |
//!
//! All routes require a bearer token. Every mutating route checks existence
//! first, then ownership, in that order.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use frond_core::{
  guard::{require_found, require_ownership},
  plant::{NewPlant, Plant, PlantPatch, PopulatedPlant},
  store::PlantStore,
};

use crate::{auth::CurrentUser, error::Error, sanitize::remove_blank_fields};

// ─── Body envelopes ───────────────────────────────────────────────────────────

/// Single-record envelope: `{"plant": …}`, on requests and responses alike.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlantBody<T> {
  pub plant: T,
}

/// Collection envelope: `{"plants": […]}`.
#[derive(Debug, Serialize)]
pub struct PlantsBody<T> {
  pub plants: Vec<T>,
}

/// Creation payload. There is no owner field — any `owner` a client supplies
/// is dropped during deserialization.
#[derive(Debug, Deserialize)]
pub struct CreatePlant {
  pub name: String,
  #[serde(rename = "type")]
  pub kind: String,
}

async fn populate<S>(store: &S, plant: Plant) -> Result<PopulatedPlant, Error>
where
  S: PlantStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let owner = store
    .get_user(plant.owner)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or(frond_core::Error::OwnerMissing(plant.owner))?;
  Ok(PopulatedPlant::new(plant, owner))
}

// ─── Index ────────────────────────────────────────────────────────────────────

/// `GET /plants`
pub async fn index<S>(
  State(store): State<Arc<S>>,
  CurrentUser(_user): CurrentUser,
) -> Result<Json<PlantsBody<PopulatedPlant>>, Error>
where
  S: PlantStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let plants = store
    .list_plants()
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  let mut populated = Vec::with_capacity(plants.len());
  for plant in plants {
    populated.push(populate(store.as_ref(), plant).await?);
  }
  Ok(Json(PlantsBody { plants: populated }))
}

// ─── Show ─────────────────────────────────────────────────────────────────────

/// `GET /plants/:id`
pub async fn show<S>(
  State(store): State<Arc<S>>,
  CurrentUser(_user): CurrentUser,
  Path(id): Path<Uuid>,
) -> Result<Json<PlantBody<PopulatedPlant>>, Error>
where
  S: PlantStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let lookup = store
    .get_plant(id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  let plant = require_found(lookup, id)?;
  Ok(Json(PlantBody { plant: populate(store.as_ref(), plant).await? }))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /plants` — body: `{"plant": {"name": …, "type": …}}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  CurrentUser(user): CurrentUser,
  Json(body): Json<PlantBody<CreatePlant>>,
) -> Result<impl IntoResponse, Error>
where
  S: PlantStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  // The owner always comes from the verified token, never from the body.
  let input = NewPlant {
    name:  body.plant.name,
    kind:  body.plant.kind,
    owner: user.user_id,
  };
  input.validate()?;

  let plant = store
    .create_plant(input)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(PlantBody { plant })))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /plants/:id` — body: `{"plant": {partial fields}}`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  CurrentUser(user): CurrentUser,
  Path(id): Path<Uuid>,
  Json(body): Json<PlantBody<Map<String, Value>>>,
) -> Result<StatusCode, Error>
where
  S: PlantStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  // Blank strings mean "not supplied". Typing the remainder as PlantPatch
  // also drops any owner the client tried to smuggle in.
  let fields = remove_blank_fields(body.plant);
  let patch: PlantPatch = serde_json::from_value(Value::Object(fields))
    .map_err(|e| Error::Validation(e.to_string()))?;

  let lookup = store
    .get_plant(id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  let plant = require_found(lookup, id)?;
  require_ownership(&user, &plant)?;

  // A payload that sanitised down to nothing is a no-op; don't touch the row.
  if patch.is_empty() {
    return Ok(StatusCode::NO_CONTENT);
  }

  let updated = store
    .update_plant(id, patch)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  require_found(updated, id)?;

  Ok(StatusCode::NO_CONTENT)
}

// ─── Destroy ──────────────────────────────────────────────────────────────────

/// `DELETE /plants/:id`
pub async fn destroy<S>(
  State(store): State<Arc<S>>,
  CurrentUser(user): CurrentUser,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, Error>
where
  S: PlantStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let lookup = store
    .get_plant(id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  let plant = require_found(lookup, id)?;
  require_ownership(&user, &plant)?;

  store
    .delete_plant(id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  Ok(StatusCode::NO_CONTENT)
}
