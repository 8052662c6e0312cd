//! Shared guard helpers applied by every mutating route.
//!
//! Both guards are pure: they inspect a value and either pass it through or
//! return the matching domain error. Existence is always checked before
//! ownership — [`require_ownership`] presupposes a loaded resource.

use uuid::Uuid;

use crate::{Error, Result, user::User};

/// A resource attributed to a single owning user.
pub trait Owned {
  fn resource_id(&self) -> Uuid;
  fn owner_id(&self) -> Uuid;
}

/// Pass a lookup result through, or fail with [`Error::NotFound`] carrying
/// the id that was asked for.
pub fn require_found<T>(lookup: Option<T>, id: Uuid) -> Result<T> {
  lookup.ok_or(Error::NotFound(id))
}

/// Succeed silently when `user` owns `resource`; otherwise fail with
/// [`Error::Forbidden`].
pub fn require_ownership<T: Owned>(user: &User, resource: &T) -> Result<()> {
  if resource.owner_id() == user.user_id {
    Ok(())
  } else {
    Err(Error::Forbidden {
      user:     user.user_id,
      resource: resource.resource_id(),
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::Utc;

  use super::*;

  struct Widget {
    id:    Uuid,
    owner: Uuid,
  }

  impl Owned for Widget {
    fn resource_id(&self) -> Uuid { self.id }
    fn owner_id(&self) -> Uuid { self.owner }
  }

  fn user(id: Uuid) -> User {
    User {
      user_id:    id,
      email:      "a@example.com".into(),
      created_at: Utc::now(),
    }
  }

  #[test]
  fn require_found_passes_value_through() {
    let id = Uuid::new_v4();
    assert_eq!(require_found(Some(7), id).unwrap(), 7);
  }

  #[test]
  fn require_found_fails_on_none() {
    let id = Uuid::new_v4();
    assert!(matches!(
      require_found::<()>(None, id),
      Err(Error::NotFound(missing)) if missing == id
    ));
  }

  #[test]
  fn require_ownership_accepts_the_owner() {
    let owner = Uuid::new_v4();
    let widget = Widget { id: Uuid::new_v4(), owner };
    assert!(require_ownership(&user(owner), &widget).is_ok());
  }

  #[test]
  fn require_ownership_rejects_everyone_else() {
    let widget = Widget { id: Uuid::new_v4(), owner: Uuid::new_v4() };
    let stranger = user(Uuid::new_v4());
    assert!(matches!(
      require_ownership(&stranger, &widget),
      Err(Error::Forbidden { user, resource })
        if user == stranger.user_id && resource == widget.id
    ));
  }
}
