//! Bearer-token extractor and standalone verifier.
//!
//! Tokens are opaque strings handed out when a user is provisioned. Only the
//! hex-encoded SHA-256 digest of a token is stored, so a leaked database does
//! not leak live credentials. Token issuance has no HTTP surface.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};
use sha2::{Digest as _, Sha256};

use frond_core::{store::PlantStore, user::User};

use crate::error::Error;

/// The authenticated requester; present in a handler's arguments means the
/// bearer token resolved to a known user.
pub struct CurrentUser(pub User);

/// Hex-encoded SHA-256 digest of an opaque token — the stored form.
pub fn token_digest(token: &str) -> String {
  hex::encode(Sha256::digest(token.as_bytes()))
}

/// Verify the `Authorization` header directly — used by the extractor below.
pub async fn verify_bearer<S>(headers: &HeaderMap, store: &S) -> Result<User, Error>
where
  S: PlantStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let header_val = headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .ok_or(Error::Unauthorized)?;

  let token = header_val
    .strip_prefix("Bearer ")
    .ok_or(Error::Unauthorized)?;

  if token.is_empty() {
    return Err(Error::Unauthorized);
  }

  store
    .find_user_by_token_digest(&token_digest(token))
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or(Error::Unauthorized)
}

impl<S> FromRequestParts<Arc<S>> for CurrentUser
where
  S: PlantStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    store: &Arc<S>,
  ) -> Result<Self, Self::Rejection> {
    let user = verify_bearer(&parts.headers, store.as_ref()).await?;
    Ok(CurrentUser(user))
  }
}

#[cfg(test)]
mod tests {
  use frond_core::user::NewUser;
  use frond_store_sqlite::SqliteStore;

  use super::*;

  async fn store_with_token(token: &str) -> (SqliteStore, User) {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let user = store
      .add_user(NewUser {
        email:        "user@example.com".into(),
        token_digest: token_digest(token),
      })
      .await
      .unwrap();
    (store, user)
  }

  fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
      header::AUTHORIZATION,
      format!("Bearer {token}").parse().unwrap(),
    );
    headers
  }

  #[tokio::test]
  async fn correct_token_resolves_user() {
    let (store, user) = store_with_token("secret-token").await;
    let found = verify_bearer(&bearer("secret-token"), &store).await.unwrap();
    assert_eq!(found.user_id, user.user_id);
  }

  #[tokio::test]
  async fn unknown_token_is_rejected() {
    let (store, _) = store_with_token("secret-token").await;
    let err = verify_bearer(&bearer("wrong-token"), &store).await;
    assert!(matches!(err, Err(Error::Unauthorized)));
  }

  #[tokio::test]
  async fn missing_header_is_rejected() {
    let (store, _) = store_with_token("secret-token").await;
    let err = verify_bearer(&HeaderMap::new(), &store).await;
    assert!(matches!(err, Err(Error::Unauthorized)));
  }

  #[tokio::test]
  async fn non_bearer_scheme_is_rejected() {
    let (store, _) = store_with_token("secret-token").await;
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());
    let err = verify_bearer(&headers, &store).await;
    assert!(matches!(err, Err(Error::Unauthorized)));
  }

  #[tokio::test]
  async fn empty_token_is_rejected() {
    let (store, _) = store_with_token("secret-token").await;
    let err = verify_bearer(&bearer(""), &store).await;
    assert!(matches!(err, Err(Error::Unauthorized)));
  }

  #[test]
  fn digest_is_stable_hex() {
    let d = token_digest("abc");
    assert_eq!(d.len(), 64);
    assert_eq!(d, token_digest("abc"));
    assert_ne!(d, token_digest("abd"));
  }
}
