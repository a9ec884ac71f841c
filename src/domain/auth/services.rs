use std::sync::Arc;
use uuid::Uuid;

use super::entities::{User, UserSummary};
use super::errors::{AuthError, RepositoryError};
use super::ports::{PasswordHasher, UserRepository};
use super::value_objects::{Email, Password, PasswordHash, UserRole};

/// Account service implementing the credential lifecycle and user
/// administration. Stateless: every call is an independent unit of work over
/// persisted rows.
pub struct AccountService {
  user_repo: Arc<dyn UserRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
}

impl AccountService {
  pub fn new(user_repo: Arc<dyn UserRepository>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
    Self {
      user_repo,
      password_hasher,
    }
  }

  /// Registers a new user.
  ///
  /// The password is hashed before anything is persisted; a failed sign-up
  /// leaves no user row behind. Both the pre-check and the unique index race
  /// surface as `EmailAlreadyExists`.
  pub async fn sign_up(
    &self,
    email: Email,
    first_name: String,
    last_name: String,
    password: Password,
    role: UserRole,
  ) -> Result<User, AuthError> {
    if self.user_repo.find_by_email(&email).await?.is_some() {
      return Err(AuthError::EmailAlreadyExists);
    }

    let password_hash = self.password_hasher.hash(&password).await?;

    let user = User::new(
      email.into_inner(),
      first_name,
      last_name,
      password_hash.into_inner(),
      role,
    );

    match self.user_repo.create(user).await {
      Ok(user) => Ok(user),
      Err(AuthError::Repository(RepositoryError::DuplicateKey(_))) => {
        Err(AuthError::EmailAlreadyExists)
      }
      Err(e) => Err(e),
    }
  }

  /// Authenticates a user by email and password.
  ///
  /// An unknown email and a wrong password both return
  /// `AuthError::InvalidCredentials` so the response shape cannot be used to
  /// enumerate accounts. The returned record is the full user row; callers
  /// exposing it externally must project the hash away.
  pub async fn login(&self, email: Email, password: Password) -> Result<User, AuthError> {
    let user = self
      .user_repo
      .find_by_email(&email)
      .await?
      .ok_or(AuthError::InvalidCredentials)?;

    let password_hash = PasswordHash::from_hash(&user.password_hash)?;

    let is_valid = self.password_hasher.verify(&password, &password_hash).await?;

    if !is_valid {
      return Err(AuthError::InvalidCredentials);
    }

    Ok(user)
  }

  /// Lists all active users as credential-free summaries, ordered by id.
  pub async fn list_users(&self) -> Result<Vec<UserSummary>, AuthError> {
    let users = self.user_repo.list_all().await?;

    Ok(users.iter().map(UserSummary::from).collect())
  }

  /// Deletes the user with the given id.
  ///
  /// Returns `UserNotFound` when no active user has that id, so deleting the
  /// same id twice fails the second time. Callers treat that as benign.
  pub async fn delete_user(&self, user_id: Uuid) -> Result<(), AuthError> {
    match self.user_repo.soft_delete(user_id).await {
      Ok(()) => Ok(()),
      Err(AuthError::Repository(RepositoryError::NotFound)) => Err(AuthError::UserNotFound),
      Err(e) => Err(e),
    }
  }
}
