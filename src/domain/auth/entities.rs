use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::UserRole;

/// User entity representing an account in the system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  /// Unique identifier for the user
  pub id: Uuid,
  /// User's email address (unique among active accounts, used as login key)
  pub email: String,
  /// User's first name
  pub first_name: String,
  /// User's last name
  pub last_name: String,
  /// Hashed password (PHC string); the plaintext is never persisted
  pub password_hash: String,
  /// Role tag, persisted but not enforced here
  pub role: UserRole,
  /// Timestamp when the user was created
  pub created_at: DateTime<Utc>,
  /// Timestamp when the user was last updated
  pub updated_at: DateTime<Utc>,
  /// Soft-delete marker; a set value makes the row invisible to all queries
  pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
  /// Creates a new user with the given details
  pub fn new(
    email: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    role: UserRole,
  ) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      email,
      first_name,
      last_name,
      password_hash,
      role,
      created_at: now,
      updated_at: now,
      deleted_at: None,
    }
  }

  /// Creates a user from database fields (for reconstruction)
  #[allow(clippy::too_many_arguments)]
  pub fn from_db(
    id: Uuid,
    email: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    role: UserRole,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
  ) -> Self {
    Self {
      id,
      email,
      first_name,
      last_name,
      password_hash,
      role,
      created_at,
      updated_at,
      deleted_at,
    }
  }

  pub fn is_deleted(&self) -> bool {
    self.deleted_at.is_some()
  }
}

/// Listing projection of a user. Carries no password material by
/// construction, so nothing credential-shaped can leak through a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
  pub id: Uuid,
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  pub role: UserRole,
}

impl From<&User> for UserSummary {
  fn from(user: &User) -> Self {
    Self {
      id: user.id,
      first_name: user.first_name.clone(),
      last_name: user.last_name.clone(),
      email: user.email.clone(),
      role: user.role,
    }
  }
}
