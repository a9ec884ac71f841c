//! In-memory port implementations shared by unit tests.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

use super::entities::User;
use super::errors::{AuthError, RepositoryError};
use super::ports::{PasswordHasher, UserRepository};
use super::value_objects::{Email, Password, PasswordHash};

/// User store backed by a Vec, mimicking the partial unique index on email.
pub struct InMemoryUserRepository {
  users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
  pub fn new() -> Self {
    Self {
      users: Mutex::new(Vec::new()),
    }
  }
}

impl Default for InMemoryUserRepository {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn create(&self, user: User) -> Result<User, AuthError> {
    let mut users = self.users.lock().unwrap();

    if users
      .iter()
      .any(|u| u.deleted_at.is_none() && u.email == user.email)
    {
      return Err(AuthError::Repository(RepositoryError::DuplicateKey(
        user.email.clone(),
      )));
    }

    users.push(user.clone());
    Ok(user)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
    let users = self.users.lock().unwrap();
    Ok(
      users
        .iter()
        .find(|u| u.deleted_at.is_none() && u.id == id)
        .cloned(),
    )
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AuthError> {
    let users = self.users.lock().unwrap();
    Ok(
      users
        .iter()
        .find(|u| u.deleted_at.is_none() && u.email == email.as_str())
        .cloned(),
    )
  }

  async fn list_all(&self) -> Result<Vec<User>, AuthError> {
    let users = self.users.lock().unwrap();
    let mut active: Vec<User> = users.iter().filter(|u| u.deleted_at.is_none()).cloned().collect();
    active.sort_by_key(|u| u.id);
    Ok(active)
  }

  async fn soft_delete(&self, id: Uuid) -> Result<(), AuthError> {
    let mut users = self.users.lock().unwrap();
    match users.iter_mut().find(|u| u.deleted_at.is_none() && u.id == id) {
      Some(user) => {
        user.deleted_at = Some(Utc::now());
        Ok(())
      }
      None => Err(AuthError::Repository(RepositoryError::NotFound)),
    }
  }
}

/// Transparent "hash" for tests: keeps the plaintext recoverable so service
/// tests stay fast and deterministic. Never leaves test builds.
pub struct StubPasswordHasher;

#[async_trait]
impl PasswordHasher for StubPasswordHasher {
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AuthError> {
    Ok(PasswordHash::from_hash(format!("$stub${}", password.as_str()))?)
  }

  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AuthError> {
    Ok(hashed_password.as_str() == format!("$stub${}", password.as_str()))
  }
}
