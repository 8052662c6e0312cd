//! Integration tests for `SqliteStore` against an in-memory database.

use frond_core::{
  plant::{NewPlant, PlantPatch},
  store::PlantStore,
  user::{NewUser, User},
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

async fn seed_user(s: &SqliteStore, email: &str, digest: &str) -> User {
  s.add_user(NewUser {
    email:        email.to_string(),
    token_digest: digest.to_string(),
  })
  .await
  .unwrap()
}

fn fern(owner: Uuid) -> NewPlant {
  NewPlant {
    name: "Fern".into(),
    kind: "Shade".into(),
    owner,
  }
}

// ─── Plants ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_plant() {
  let s = store().await;
  let owner = seed_user(&s, "a@example.com", "digest-a").await;

  let plant = s.create_plant(fern(owner.user_id)).await.unwrap();
  assert_eq!(plant.name, "Fern");
  assert_eq!(plant.owner, owner.user_id);
  assert_eq!(plant.created_at, plant.updated_at);

  let fetched = s.get_plant(plant.plant_id).await.unwrap().unwrap();
  assert_eq!(fetched.plant_id, plant.plant_id);
  assert_eq!(fetched.kind, "Shade");
  assert_eq!(fetched.owner, owner.user_id);
}

#[tokio::test]
async fn get_plant_missing_returns_none() {
  let s = store().await;
  let result = s.get_plant(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn list_plants_returns_all_in_creation_order() {
  let s = store().await;
  let owner = seed_user(&s, "a@example.com", "digest-a").await;

  let first = s.create_plant(fern(owner.user_id)).await.unwrap();
  let second = s
    .create_plant(NewPlant {
      name:  "Cactus".into(),
      kind:  "Succulent".into(),
      owner: owner.user_id,
    })
    .await
    .unwrap();

  let all = s.list_plants().await.unwrap();
  assert_eq!(all.len(), 2);
  assert_eq!(all[0].plant_id, first.plant_id);
  assert_eq!(all[1].plant_id, second.plant_id);
}

#[tokio::test]
async fn update_plant_applies_partial_patch() {
  let s = store().await;
  let owner = seed_user(&s, "a@example.com", "digest-a").await;
  let plant = s.create_plant(fern(owner.user_id)).await.unwrap();

  let updated = s
    .update_plant(
      plant.plant_id,
      PlantPatch { name: Some("Boston Fern".into()), kind: None },
    )
    .await
    .unwrap()
    .unwrap();

  assert_eq!(updated.name, "Boston Fern");
  // untouched fields keep their values
  assert_eq!(updated.kind, "Shade");
  assert_eq!(updated.owner, owner.user_id);
  assert!(updated.updated_at >= plant.updated_at);
  assert_eq!(updated.created_at, plant.created_at);
}

#[tokio::test]
async fn update_plant_missing_returns_none() {
  let s = store().await;
  let result = s
    .update_plant(Uuid::new_v4(), PlantPatch::default())
    .await
    .unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn delete_plant_removes_row() {
  let s = store().await;
  let owner = seed_user(&s, "a@example.com", "digest-a").await;
  let plant = s.create_plant(fern(owner.user_id)).await.unwrap();

  assert!(s.delete_plant(plant.plant_id).await.unwrap());
  assert!(s.get_plant(plant.plant_id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_plant_missing_returns_false() {
  let s = store().await;
  assert!(!s.delete_plant(Uuid::new_v4()).await.unwrap());
}

// ─── Users ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_user() {
  let s = store().await;
  let user = seed_user(&s, "a@example.com", "digest-a").await;

  let fetched = s.get_user(user.user_id).await.unwrap().unwrap();
  assert_eq!(fetched.user_id, user.user_id);
  assert_eq!(fetched.email, "a@example.com");
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
  let s = store().await;
  seed_user(&s, "a@example.com", "digest-a").await;

  let err = s
    .add_user(NewUser {
      email:        "a@example.com".into(),
      token_digest: "digest-b".into(),
    })
    .await;
  assert!(err.is_err());
}

#[tokio::test]
async fn find_user_by_token_digest_resolves_identity() {
  let s = store().await;
  let a = seed_user(&s, "a@example.com", "digest-a").await;
  seed_user(&s, "b@example.com", "digest-b").await;

  let found = s.find_user_by_token_digest("digest-a").await.unwrap().unwrap();
  assert_eq!(found.user_id, a.user_id);

  let missing = s.find_user_by_token_digest("digest-x").await.unwrap();
  assert!(missing.is_none());
}
