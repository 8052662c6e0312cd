//! JSON REST layer for the Frond plant registry.
//!
//! Exposes an axum [`Router`] backed by any [`frond_core::store::PlantStore`].
//! The store doubles as the identity collaborator: bearer tokens resolve to
//! users through it, so handlers receive both collaborators by injection.

pub mod auth;
pub mod error;
pub mod plants;
pub mod sanitize;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use frond_core::store::PlantStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

pub use error::Error;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn router<S>(store: Arc<S>) -> Router<()>
where
  S: PlantStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/plants", get(plants::index::<S>).post(plants::create::<S>))
    .route(
      "/plants/{id}",
      get(plants::show::<S>)
        .patch(plants::update::<S>)
        .delete(plants::destroy::<S>),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
