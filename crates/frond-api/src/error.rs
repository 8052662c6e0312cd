//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Handlers never recover or retry; every failure propagates here and is
//! translated to a status code exactly once.

use axum::{
  Json,
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum Error {
  #[error("unauthorized")]
  Unauthorized,

  #[error("forbidden")]
  Forbidden,

  #[error("not found: {0}")]
  NotFound(String),

  #[error("validation: {0}")]
  Validation(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<frond_core::Error> for Error {
  fn from(err: frond_core::Error) -> Self {
    match err {
      frond_core::Error::NotFound(id) => Error::NotFound(format!("plant {id} not found")),
      frond_core::Error::Forbidden { .. } => Error::Forbidden,
      frond_core::Error::Validation(msg) => Error::Validation(msg),
      err @ frond_core::Error::OwnerMissing(_) => Error::Store(Box::new(err)),
    }
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      Error::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
      Error::Forbidden => (StatusCode::FORBIDDEN, self.to_string()),
      Error::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      Error::Validation(m) => (StatusCode::UNPROCESSABLE_ENTITY, m.clone()),
      Error::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };

    let mut res = (status, Json(json!({ "error": message }))).into_response();
    if status == StatusCode::UNAUTHORIZED {
      res.headers_mut().insert(
        header::WWW_AUTHENTICATE,
        HeaderValue::from_static("Bearer realm=\"frond\""),
      );
    }
    res
  }
}
